//! Options handed to the platform location provider.

use std::time::Duration;

/// Mirrors the platform's position options.
///
/// The timeout is also enforced on the host side by
/// [`Locator`][crate::Locator], so a provider that never calls back still
/// resolves.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionOptions {
    /// Ask for GPS-grade accuracy rather than network positioning.
    pub enable_high_accuracy: bool,
    /// Give up after this long.  Default: 15 000 ms (slow devices).
    pub timeout_ms: u64,
    /// Accept a cached position up to this old.  Default: 60 000 ms.
    pub maximum_age_ms: u64,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            enable_high_accuracy: true,
            timeout_ms:           15_000,
            maximum_age_ms:       60_000,
        }
    }
}

impl PositionOptions {
    #[inline]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    #[inline]
    pub fn maximum_age(&self) -> Duration {
        Duration::from_millis(self.maximum_age_ms)
    }
}
