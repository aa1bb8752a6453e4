use thiserror::Error;

use crate::FailureKind;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocateError {
    #[error("location unavailable: {0}")]
    Unavailable(FailureKind),

    #[error("location is not supported on this device")]
    Unsupported,
}

impl LocateError {
    /// Text for the user-facing alert.
    pub fn message(&self) -> &'static str {
        match self {
            LocateError::Unavailable(kind) => kind.message(),
            LocateError::Unsupported => {
                "Your device does not support geolocation. Please enter your location manually."
            }
        }
    }
}

pub type LocateResult<T> = Result<T, LocateError>;
