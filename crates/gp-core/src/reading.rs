//! A single location fix as handed out by location acquisition.

use crate::{Coordinate, CoreError, CoreResult, FALLBACK_COORDINATE};

/// Accuracy attached to the fallback reading, metres.
pub const FALLBACK_ACCURACY_M: f64 = 1_000.0;

/// A coordinate plus the provider's accuracy estimate (radius, metres).
///
/// Produced once per acquisition and consumed immediately by the caller;
/// nothing in the acquisition layer keeps a copy.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationReading {
    pub coordinate: Coordinate,
    pub accuracy_m: f64,
}

impl LocationReading {
    /// Validate both the coordinate and the accuracy.
    pub fn new(coordinate: Coordinate, accuracy_m: f64) -> CoreResult<Self> {
        coordinate.validate()?;
        if !accuracy_m.is_finite() || accuracy_m < 0.0 {
            return Err(CoreError::InvalidAccuracy(accuracy_m));
        }
        Ok(Self {
            coordinate,
            accuracy_m,
        })
    }

    /// The fixed reading used when the device cannot be located.
    pub const fn fallback() -> Self {
        Self {
            coordinate: FALLBACK_COORDINATE,
            accuracy_m: FALLBACK_ACCURACY_M,
        }
    }
}
