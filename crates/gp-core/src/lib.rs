//! `gp-core` — foundational types for the GeoPet location companion.
//!
//! This crate is a dependency of every other `gp-*` crate.  It has no `gp-*`
//! dependencies and minimal external ones (only `thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`geo`]       | `Coordinate`, haversine distance, fallback constants      |
//! | [`reading`]   | `LocationReading` (coordinate + accuracy)                 |
//! | [`input`]     | Manual-entry and page-attribute parsing                   |
//! | [`format`]    | Display text for panels (7-decimal degrees, km)           |
//! | [`theme`]     | `Theme`, `MapStyle`, `RouteStyle` — plain style data      |
//! | [`error`]     | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod format;
pub mod geo;
pub mod input;
pub mod reading;
pub mod theme;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use format::{format_coordinate, format_degrees, format_distance_km};
pub use geo::{Coordinate, EARTH_RADIUS_KM, FALLBACK_COORDINATE, distance_km};
pub use input::{parse_attribute, parse_manual};
pub use reading::{FALLBACK_ACCURACY_M, LocationReading};
pub use theme::{MapStyle, MarkerStyle, RouteStyle, Theme};
