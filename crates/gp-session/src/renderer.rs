//! The `MapRenderer` trait implemented by map widget backends.

use std::fmt;

use gp_core::{Coordinate, MarkerStyle, RouteStyle};
use gp_display::{Bounds, MarkerRole};

use crate::RenderResult;

/// Opaque id of a layer (marker, line or label) owned by the renderer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LayerHandle(pub u32);

impl fmt::Display for LayerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "layer#{}", self.0)
    }
}

/// Everything needed to place one marker.  `style.label` is the popup text.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerSpec {
    pub role:     MarkerRole,
    pub position: Coordinate,
    pub style:    MarkerStyle,
}

/// Trait implemented by interactive map backends.
///
/// The session only ever talks to the map through this trait; it never
/// inspects rendered state.  Layers are addressed by the handles the backend
/// hands out, and a handle is never reused after `remove_layer`.
pub trait MapRenderer {
    /// Create the map centred on `center`.  Called once per session.
    fn create_map(&mut self, center: Coordinate, zoom: u8, attribution: &str) -> RenderResult<()>;

    fn add_marker(&mut self, spec: &MarkerSpec) -> RenderResult<LayerHandle>;

    fn move_marker(&mut self, handle: LayerHandle, position: Coordinate) -> RenderResult<()>;

    fn draw_line(
        &mut self,
        from:  Coordinate,
        to:    Coordinate,
        style: &RouteStyle,
    ) -> RenderResult<LayerHandle>;

    /// A text label pinned at `position`.
    fn add_label(&mut self, position: Coordinate, text: &str) -> RenderResult<LayerHandle>;

    /// Zoom and pan so `bounds` is visible inside `padding_px` on every side,
    /// never zooming in past `max_zoom`.
    fn fit_bounds(&mut self, bounds: &Bounds, padding_px: u32, max_zoom: u8) -> RenderResult<()>;

    fn set_view(&mut self, center: Coordinate, zoom: u8) -> RenderResult<()>;

    fn remove_layer(&mut self, handle: LayerHandle) -> RenderResult<()>;
}
