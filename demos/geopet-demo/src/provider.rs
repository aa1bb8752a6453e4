//! A location provider that jitters around a fixed home position.

use std::time::Duration;

use tokio::time::Instant;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use gp_core::Coordinate;
use gp_locate::{Fix, LocationProvider, PositionError, PositionOptions};

/// Simulated GPS: each request answers after `latency` with a fix within
/// `jitter_deg` of `home`.  High-accuracy requests get a 5–25 m accuracy
/// circle, low-accuracy ones 50–500 m.  A fix younger than the requested
/// maximum age is answered from cache without waiting.
pub struct SimulatedProvider {
    home:       Coordinate,
    jitter_deg: f64,
    latency:    Duration,
    rng:        SmallRng,
    last:       Option<(Instant, Fix)>,
    /// When set, every request fails with this platform code.
    pub fail_with: Option<u16>,
    pub requests:  u32,
}

impl SimulatedProvider {
    pub fn new(home: Coordinate, seed: u64) -> Self {
        Self {
            home,
            jitter_deg: 0.002,
            latency:    Duration::from_millis(40),
            rng:        SmallRng::seed_from_u64(seed),
            last:       None,
            fail_with:  None,
            requests:   0,
        }
    }

    pub fn latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

impl LocationProvider for SimulatedProvider {
    async fn current_position(&mut self, options: &PositionOptions) -> Result<Fix, PositionError> {
        self.requests += 1;
        if let Some((at, fix)) = self.last {
            if at.elapsed() <= options.maximum_age() {
                tracing::debug!(age_ms = at.elapsed().as_millis() as u64, "answering from cached fix");
                return Ok(fix);
            }
        }
        tokio::time::sleep(self.latency).await;

        if let Some(code) = self.fail_with {
            return Err(PositionError::new(code, "simulated platform failure"));
        }

        let j = self.jitter_deg;
        let accuracy_m = if options.enable_high_accuracy {
            self.rng.gen_range(5.0..25.0)
        } else {
            self.rng.gen_range(50.0..500.0)
        };
        let fix = Fix {
            latitude:  self.home.lat + self.rng.gen_range(-j..=j),
            longitude: self.home.lon + self.rng.gen_range(-j..=j),
            accuracy_m,
        };
        self.last = Some((Instant::now(), fix));
        Ok(fix)
    }
}
