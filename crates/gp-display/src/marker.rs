//! The two logical map markers.

use std::fmt;

use gp_core::Coordinate;

/// Which of the two markers a [`MarkerState`] describes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MarkerRole {
    /// The device's (or scanner's) own position.
    Current,
    /// The position recorded when the QR code was scanned.
    Target,
}

impl fmt::Display for MarkerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkerRole::Current => f.write_str("current"),
            MarkerRole::Target => f.write_str("target"),
        }
    }
}

/// One marker: its role, where it is, and the popup label.
///
/// At most one state per role exists inside a
/// [`GeoDisplay`][crate::GeoDisplay]; updates overwrite `position`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarkerState {
    pub role:     MarkerRole,
    pub position: Coordinate,
    pub label:    String,
}

impl MarkerState {
    pub fn new(role: MarkerRole, position: Coordinate, label: impl Into<String>) -> Self {
        Self {
            role,
            position,
            label: label.into(),
        }
    }
}
