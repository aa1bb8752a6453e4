//! Classification of platform location failures.

use std::fmt;

use crate::PositionError;

/// Why the device position could not be obtained.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FailureKind {
    PermissionDenied,
    PositionUnavailable,
    Timeout,
    Unknown,
}

impl FailureKind {
    /// Map a platform error code onto a kind.
    pub fn from_code(code: u16) -> Self {
        match code {
            PositionError::PERMISSION_DENIED => FailureKind::PermissionDenied,
            PositionError::POSITION_UNAVAILABLE => FailureKind::PositionUnavailable,
            PositionError::TIMEOUT => FailureKind::Timeout,
            _ => FailureKind::Unknown,
        }
    }

    /// Text shown to the user in the location alert.
    pub fn message(self) -> &'static str {
        match self {
            FailureKind::PermissionDenied => {
                "Location permission denied. Please enable location on your device."
            }
            FailureKind::PositionUnavailable => {
                "Location information is not available right now."
            }
            FailureKind::Timeout => "Timed out while getting your location.",
            FailureKind::Unknown => "An unknown error occurred while getting your location.",
        }
    }
}

impl From<&PositionError> for FailureKind {
    fn from(err: &PositionError) -> Self {
        FailureKind::from_code(err.code)
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureKind::PermissionDenied => "permission denied",
            FailureKind::PositionUnavailable => "position unavailable",
            FailureKind::Timeout => "timeout",
            FailureKind::Unknown => "unknown",
        };
        f.write_str(name)
    }
}
