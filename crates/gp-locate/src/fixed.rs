//! Providers with canned answers, for hosts without a real location source
//! and for tests.

use crate::{Fix, LocationProvider, PositionError, PositionOptions};

/// Always answers with the same fix and counts requests.
#[derive(Clone, Debug)]
pub struct FixedProvider {
    pub fix:      Fix,
    pub requests: usize,
}

impl FixedProvider {
    pub fn new(latitude: f64, longitude: f64, accuracy_m: f64) -> Self {
        Self {
            fix: Fix {
                latitude,
                longitude,
                accuracy_m,
            },
            requests: 0,
        }
    }
}

impl LocationProvider for FixedProvider {
    async fn current_position(&mut self, _options: &PositionOptions) -> Result<Fix, PositionError> {
        self.requests += 1;
        Ok(self.fix)
    }
}

/// Always fails with the same platform error code.
#[derive(Clone, Debug)]
pub struct FailingProvider {
    pub code: u16,
}

impl FailingProvider {
    pub fn new(code: u16) -> Self {
        Self { code }
    }
}

impl LocationProvider for FailingProvider {
    async fn current_position(&mut self, _options: &PositionOptions) -> Result<Fix, PositionError> {
        Err(PositionError::new(self.code, "simulated failure"))
    }
}

/// A host with no location capability.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnsupportedProvider;

impl LocationProvider for UnsupportedProvider {
    fn is_supported(&self) -> bool {
        false
    }

    async fn current_position(&mut self, _options: &PositionOptions) -> Result<Fix, PositionError> {
        Err(PositionError::new(0, "location is not supported"))
    }
}
