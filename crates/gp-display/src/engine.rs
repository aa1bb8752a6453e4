//! The two-marker display engine.

use gp_core::{Coordinate, MarkerStyle, distance_km, format_distance_km};

use crate::{
    Bounds, DisplayResult, MarkerRole, MarkerState, RouteView, SingleView, ViewConfig, ViewState,
};

/// Great-circle distance in kilometres (Haversine, R = 6371 km).
///
/// Symmetric, and exactly `0.0` for identical points.
#[inline]
pub fn compute_distance(a: Coordinate, b: Coordinate) -> f64 {
    distance_km(a, b)
}

/// Which markers are currently set.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DisplayPhase {
    NoSelf,
    HasSelf,
    HasSelfAndTarget,
}

/// Owns the current and target markers and derives the map view from them.
///
/// A target may be recorded before the current position is known (page data
/// often arrives first); it only becomes visible once a current position
/// exists.  Every setter validates before touching state, so a rejected
/// update leaves the engine exactly as it was.
#[derive(Clone, Debug)]
pub struct GeoDisplay {
    config:        ViewConfig,
    current:       Option<MarkerState>,
    target:        Option<MarkerState>,
    current_label: String,
    target_label:  String,
}

impl Default for GeoDisplay {
    fn default() -> Self {
        Self::new(ViewConfig::default())
    }
}

impl GeoDisplay {
    pub fn new(config: ViewConfig) -> Self {
        Self {
            config,
            current:       None,
            target:        None,
            current_label: MarkerStyle::default().label,
            target_label:  MarkerStyle::target().label,
        }
    }

    /// Override the popup labels attached to newly placed markers.
    pub fn with_labels(mut self, current: impl Into<String>, target: impl Into<String>) -> Self {
        self.current_label = current.into();
        self.target_label  = target.into();
        self
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Place or move the current marker.
    pub fn set_current(&mut self, c: Coordinate) -> DisplayResult<()> {
        c.validate()?;
        let label = &self.current_label;
        Self::place(&mut self.current, MarkerRole::Current, c, label);
        tracing::debug!(lat = c.lat, lon = c.lon, "current marker set");
        Ok(())
    }

    /// Place or move the target marker.
    pub fn set_target(&mut self, c: Coordinate) -> DisplayResult<()> {
        c.validate()?;
        let label = &self.target_label;
        Self::place(&mut self.target, MarkerRole::Target, c, label);
        tracing::debug!(lat = c.lat, lon = c.lon, "target marker set");
        Ok(())
    }

    /// Drop the target marker.  Returns the removed state, if any.
    pub fn clear_target(&mut self) -> Option<MarkerState> {
        self.target.take()
    }

    fn place(slot: &mut Option<MarkerState>, role: MarkerRole, c: Coordinate, label: &str) {
        match slot {
            Some(marker) => marker.position = c,
            None => *slot = Some(MarkerState::new(role, c, label)),
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn current(&self) -> Option<&MarkerState> {
        self.current.as_ref()
    }

    pub fn target(&self) -> Option<&MarkerState> {
        self.target.as_ref()
    }

    pub fn phase(&self) -> DisplayPhase {
        match (&self.current, &self.target) {
            (None, _) => DisplayPhase::NoSelf,
            (Some(_), None) => DisplayPhase::HasSelf,
            (Some(_), Some(_)) => DisplayPhase::HasSelfAndTarget,
        }
    }

    /// Distance between the markers, when both are set.
    pub fn distance_km(&self) -> Option<f64> {
        match (&self.current, &self.target) {
            (Some(a), Some(b)) => Some(compute_distance(a.position, b.position)),
            _ => None,
        }
    }

    /// Derive the view for the present markers.
    pub fn compute_view(&self) -> ViewState {
        let Some(current) = &self.current else {
            return ViewState::Empty;
        };
        let Some(target) = &self.target else {
            return ViewState::Single(SingleView {
                center: current.position,
                zoom:   self.config.default_zoom,
            });
        };

        let (a, b) = (current.position, target.position);
        let bounds = match Bounds::from_points([a, b]) {
            Some(bounds) => bounds,
            None => Bounds { south_west: a, north_east: a },
        };

        let distance_km = compute_distance(a, b);
        ViewState::Route(RouteView {
            current:        a,
            target:         b,
            midpoint:       a.midpoint(b),
            distance_km,
            distance_label: format_distance_km(distance_km),
            bounds,
            padding_px:     self.config.fit_padding_px,
            max_zoom:       self.config.max_fit_zoom,
        })
    }
}
