//! `gp-locate` — device location acquisition.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                        |
//! |--------------|-----------------------------------------------------------------|
//! | [`options`]  | `PositionOptions` (high accuracy, 15 s timeout, 60 s max age)   |
//! | [`provider`] | `LocationProvider` trait, raw `Fix` and `PositionError`         |
//! | [`failure`]  | `FailureKind` classification and user-facing messages           |
//! | [`notify`]   | `Notifier` side channel, `Notice`, `LogNotifier`                |
//! | [`locator`]  | `Locator` — `try_acquire` / `acquire` with fallback             |
//! | [`fixed`]    | `FixedProvider`, `FailingProvider`, `UnsupportedProvider`       |
//! | [`error`]    | `LocateError`, `LocateResult<T>`                                |
//!
//! # Design notes
//!
//! Acquisition is single-shot: one call, one reading.  [`Locator::acquire`]
//! never fails. When the platform cannot produce a position it resolves
//! with the fixed fallback reading and reports the reason through the
//! [`Notifier`] instead of to the caller.  Callers that need to know *why*
//! use [`Locator::try_acquire`], which returns the classified failure.
//!
//! Both methods take `&mut self`, so two acquisitions on the same locator
//! can never be in flight at once; there is no de-duplication or
//! cancellation to reason about.

pub mod error;
pub mod failure;
pub mod fixed;
pub mod locator;
pub mod notify;
pub mod options;
pub mod provider;


pub use error::{LocateError, LocateResult};
pub use failure::FailureKind;
pub use fixed::{FailingProvider, FixedProvider, UnsupportedProvider};
pub use locator::{Acquisition, Locator, ReadingSource};
pub use notify::{LogNotifier, Notice, Notifier, Severity};
pub use options::PositionOptions;
pub use provider::{Fix, LocationProvider, PositionError};
