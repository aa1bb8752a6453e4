//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` through a
//! `#[from]` variant.

use thiserror::Error;

/// Validation failures shared by every `gp-*` crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error(
        "coordinates out of range: ({lat}, {lon}); latitude must be within -90..90 \
         and longitude within -180..180"
    )]
    OutOfRange { lat: f64, lon: f64 },

    #[error("{field} is not a valid number: {value:?}")]
    InvalidNumericInput { field: &'static str, value: String },

    #[error("accuracy must be a finite, non-negative distance, got {0}")]
    InvalidAccuracy(f64),
}

/// Shorthand result type for `gp-core`.
pub type CoreResult<T> = Result<T, CoreError>;
