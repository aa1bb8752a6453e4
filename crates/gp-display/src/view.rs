//! Derived map view.
//!
//! A [`ViewState`] is a pure function of the engine's markers and its
//! [`ViewConfig`]; nothing here is cached between calls.

use std::f64::consts::PI;

use gp_core::Coordinate;

use crate::{Bounds, DisplayError, DisplayResult};

/// Deepest zoom level any standard slippy-map tile server offers.
pub const MAX_TILE_ZOOM: u8 = 22;

/// Web-Mercator cut-off latitude.
const MERCATOR_MAX_LAT: f64 = 85.051_128_779_806_6;

/// Tile edge in pixels at zoom 0.
const TILE_PX: f64 = 256.0;

// ── ViewConfig ────────────────────────────────────────────────────────────────

/// Framing parameters for the derived view.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewConfig {
    /// Zoom used when only the current marker exists.
    pub default_zoom:   u8,
    /// Pixel padding around the route when fitting both markers.
    pub fit_padding_px: u32,
    /// Upper bound on the fitted zoom.
    pub max_fit_zoom:   u8,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            default_zoom:   15,
            fit_padding_px: 50,
            max_fit_zoom:   16,
        }
    }
}

impl ViewConfig {
    pub fn validate(&self) -> DisplayResult<()> {
        if self.default_zoom > MAX_TILE_ZOOM {
            return Err(DisplayError::Config(format!(
                "default_zoom {} exceeds {MAX_TILE_ZOOM}",
                self.default_zoom
            )));
        }
        if self.max_fit_zoom > MAX_TILE_ZOOM {
            return Err(DisplayError::Config(format!(
                "max_fit_zoom {} exceeds {MAX_TILE_ZOOM}",
                self.max_fit_zoom
            )));
        }
        Ok(())
    }
}

// ── ViewState ─────────────────────────────────────────────────────────────────

/// What the map should show.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum ViewState {
    /// No current position yet.  A lone target is never shown.
    Empty,
    /// Centered on the current position.
    Single(SingleView),
    /// Both markers, joined by a route line.
    Route(RouteView),
}

impl ViewState {
    /// The current marker position, when one is shown.
    pub fn current(&self) -> Option<Coordinate> {
        match self {
            ViewState::Empty => None,
            ViewState::Single(v) => Some(v.center),
            ViewState::Route(r) => Some(r.current),
        }
    }

    pub fn route(&self) -> Option<&RouteView> {
        match self {
            ViewState::Route(r) => Some(r),
            _ => None,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, ViewState::Empty)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SingleView {
    pub center: Coordinate,
    pub zoom:   u8,
}

/// Two-marker view: route line, midpoint label anchor, and fit request.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteView {
    pub current:        Coordinate,
    pub target:         Coordinate,
    /// Component-wise mean of the two endpoints; anchors the distance label.
    pub midpoint:       Coordinate,
    pub distance_km:    f64,
    /// `"12.34 km"`, shown at `midpoint`.
    pub distance_label: String,
    pub bounds:         Bounds,
    pub padding_px:     u32,
    pub max_zoom:       u8,
}

impl RouteView {
    /// The straight segment from current to target.
    pub fn line(&self) -> [Coordinate; 2] {
        [self.current, self.target]
    }

    /// Zoom a Web-Mercator map of `width_px × height_px` needs to show
    /// `bounds` inside the padding, floored and clamped to `[0, max_zoom]`.
    ///
    /// A degenerate box (both markers on the same spot) fits at `max_zoom`.
    /// A viewport too small to hold the padding fits at 0.
    pub fn fit_zoom(&self, width_px: u32, height_px: u32) -> u8 {
        let pad = 2.0 * f64::from(self.padding_px);
        let avail_w = f64::from(width_px) - pad;
        let avail_h = f64::from(height_px) - pad;
        if avail_w <= 0.0 || avail_h <= 0.0 {
            return 0;
        }

        let span_x = self.bounds.lon_span() / 360.0 * TILE_PX;
        let span_y = (mercator_y(self.bounds.south_west.lat)
            - mercator_y(self.bounds.north_east.lat))
            * TILE_PX;

        let mut scale = f64::INFINITY;
        if span_x > 0.0 {
            scale = scale.min(avail_w / span_x);
        }
        if span_y > 0.0 {
            scale = scale.min(avail_h / span_y);
        }
        if !scale.is_finite() {
            return self.max_zoom;
        }

        let zoom = scale.log2().floor();
        zoom.clamp(0.0, f64::from(self.max_zoom)) as u8
    }
}

/// Normalised Web-Mercator y in `[0, 1]`, 0 at the northern cut-off.
fn mercator_y(lat: f64) -> f64 {
    let phi = lat.clamp(-MERCATOR_MAX_LAT, MERCATOR_MAX_LAT).to_radians();
    (1.0 - (phi.tan() + 1.0 / phi.cos()).ln() / PI) / 2.0
}
