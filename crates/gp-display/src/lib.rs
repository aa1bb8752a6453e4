//! `gp-display` — the geo-display engine.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                       |
//! |------------|----------------------------------------------------------------|
//! | [`marker`] | `MarkerRole`, `MarkerState`                                    |
//! | [`bounds`] | `Bounds` — lat/lon box backed by an `rstar` envelope           |
//! | [`view`]   | `ViewConfig`, `ViewState`, `SingleView`, `RouteView`, fit zoom |
//! | [`engine`] | `GeoDisplay` — owns both markers and derives the view          |
//! | [`error`]  | `DisplayError`, `DisplayResult<T>`                             |
//!
//! # State machine
//!
//! ```text
//! NoSelf ──set_current──▶ HasSelf ──set_target──▶ HasSelfAndTarget
//!            ▲   │                    ▲    │
//!            └───┘ (replace)          └────┘ (replace either marker)
//! ```
//!
//! Markers are replaced in place; the engine never keeps a history.  The
//! only way back from `HasSelfAndTarget` is an explicit
//! [`GeoDisplay::clear_target`].  The view is recomputed from scratch on
//! every [`GeoDisplay::compute_view`] call and has no identity of its own.

pub mod bounds;
pub mod engine;
pub mod error;
pub mod marker;
pub mod view;


pub use bounds::Bounds;
pub use engine::{DisplayPhase, GeoDisplay, compute_distance};
pub use error::{DisplayError, DisplayResult};
pub use marker::{MarkerRole, MarkerState};
pub use view::{MAX_TILE_ZOOM, RouteView, SingleView, ViewConfig, ViewState};
