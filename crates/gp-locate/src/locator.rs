//! `Locator` — drives one provider and applies the fallback policy.

use gp_core::{Coordinate, LocationReading};

use crate::{
    FailureKind, Fix, LocateError, LocateResult, LocationProvider, LogNotifier, Notice, Notifier,
    PositionOptions,
};

/// Where the reading in an [`Acquisition`] came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReadingSource {
    /// The provider answered with a usable fix.
    Device,
    /// The provider failed; the reading is the fixed fallback.
    Fallback(FailureKind),
    /// The host has no location capability; the reading is the fallback.
    Unsupported,
}

/// Result of [`Locator::acquire`]: always carries a usable reading.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Acquisition {
    pub reading: LocationReading,
    pub source:  ReadingSource,
}

impl Acquisition {
    #[inline]
    pub fn is_fallback(&self) -> bool {
        self.source != ReadingSource::Device
    }
}

/// Owns a [`LocationProvider`] and a [`Notifier`] for the page session.
///
/// # Example
///
/// ```rust,ignore
/// let mut locator = Locator::new(browser_geolocation);
/// let acq = locator.acquire().await;
/// engine.set_current(acq.reading.coordinate)?;
/// ```
pub struct Locator<P: LocationProvider, N: Notifier = LogNotifier> {
    provider: P,
    notifier: N,
    options:  PositionOptions,
}

impl<P: LocationProvider> Locator<P, LogNotifier> {
    /// Locator with default options that reports problems to the log.
    pub fn new(provider: P) -> Self {
        Self::with_notifier(provider, LogNotifier)
    }
}

impl<P: LocationProvider, N: Notifier> Locator<P, N> {
    pub fn with_notifier(provider: P, notifier: N) -> Self {
        Self {
            provider,
            notifier,
            options: PositionOptions::default(),
        }
    }

    /// Replace the default position options.
    pub fn options(mut self, options: PositionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn position_options(&self) -> &PositionOptions {
        &self.options
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Ask the provider once and classify the outcome.
    ///
    /// A provider that does not answer within `timeout_ms` is reported as
    /// [`FailureKind::Timeout`]; a fix that fails validation as
    /// [`FailureKind::PositionUnavailable`].
    pub async fn try_acquire(&mut self) -> LocateResult<LocationReading> {
        if !self.provider.is_supported() {
            return Err(LocateError::Unsupported);
        }

        let request = self.provider.current_position(&self.options);
        let fix = match tokio::time::timeout(self.options.timeout(), request).await {
            Ok(Ok(fix)) => fix,
            Ok(Err(err)) => {
                tracing::debug!(code = err.code, detail = %err.message, "provider reported an error");
                return Err(LocateError::Unavailable(FailureKind::from(&err)));
            }
            Err(_elapsed) => {
                tracing::debug!(timeout_ms = self.options.timeout_ms, "provider did not answer");
                return Err(LocateError::Unavailable(FailureKind::Timeout));
            }
        };

        reading_from_fix(fix)
    }

    /// Acquire a reading, degrading to the fixed fallback on any failure.
    ///
    /// Never fails.  The failure reason goes to the notifier: a passive
    /// notice for classified failures, a blocking one when location is not
    /// supported at all.
    pub async fn acquire(&mut self) -> Acquisition {
        match self.try_acquire().await {
            Ok(reading) => {
                tracing::debug!(
                    lat = reading.coordinate.lat,
                    lon = reading.coordinate.lon,
                    accuracy_m = reading.accuracy_m,
                    "device location acquired"
                );
                Acquisition {
                    reading,
                    source: ReadingSource::Device,
                }
            }
            Err(err) => {
                let (source, notice) = match &err {
                    LocateError::Unavailable(kind) => {
                        (ReadingSource::Fallback(*kind), Notice::passive(err.message()))
                    }
                    LocateError::Unsupported => {
                        (ReadingSource::Unsupported, Notice::blocking(err.message()))
                    }
                };
                tracing::warn!(reason = %err, "using fallback location");
                self.notifier.notify(&notice);
                Acquisition {
                    reading: LocationReading::fallback(),
                    source,
                }
            }
        }
    }
}

fn reading_from_fix(fix: Fix) -> LocateResult<LocationReading> {
    let coordinate = Coordinate {
        lat: fix.latitude,
        lon: fix.longitude,
    };
    LocationReading::new(coordinate, fix.accuracy_m).map_err(|e| {
        tracing::debug!(error = %e, "provider returned an unusable fix");
        LocateError::Unavailable(FailureKind::PositionUnavailable)
    })
}
