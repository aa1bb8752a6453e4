//! The `LocationProvider` trait: the seam to the platform's location API.

use std::future::Future;

use crate::PositionOptions;

/// Raw position as reported by the platform, before validation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fix {
    pub latitude:   f64,
    pub longitude:  f64,
    /// Radius of the 95 % confidence circle, metres.
    pub accuracy_m: f64,
}

/// Failure reported by the platform.
///
/// `code` follows the platform enumeration: 1 permission denied,
/// 2 position unavailable, 3 timeout.  Anything else is unknown.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionError {
    pub code:    u16,
    pub message: String,
}

impl PositionError {
    pub const PERMISSION_DENIED: u16 = 1;
    pub const POSITION_UNAVAILABLE: u16 = 2;
    pub const TIMEOUT: u16 = 3;

    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// A platform location capability.
///
/// Implementations answer one request per call.  They may write the method
/// as an `async fn`.
///
/// # Example
///
/// ```rust,ignore
/// struct Gps { port: SerialPort }
///
/// impl LocationProvider for Gps {
///     async fn current_position(&mut self, opts: &PositionOptions) -> Result<Fix, PositionError> {
///         let sentence = self.port.read_gga().await.map_err(|e| PositionError::new(2, e.to_string()))?;
///         Ok(Fix { latitude: sentence.lat, longitude: sentence.lon, accuracy_m: sentence.hdop * 5.0 })
///     }
/// }
/// ```
pub trait LocationProvider {
    /// `false` when the host has no location capability at all.
    ///
    /// Default: `true`.
    fn is_supported(&self) -> bool {
        true
    }

    /// Request the current position once.
    fn current_position(
        &mut self,
        options: &PositionOptions,
    ) -> impl Future<Output = Result<Fix, PositionError>>;
}
