//! Headless renderer and panels that report to the log and stdout.

use std::collections::HashSet;

use gp_core::{Coordinate, RouteStyle};
use gp_display::Bounds;
use gp_session::{DisplayPanels, LayerHandle, MapRenderer, MarkerSpec, RenderError, RenderResult};

// ── LoggingRenderer ───────────────────────────────────────────────────────────

/// A [`MapRenderer`] with no screen: every call becomes a `tracing` event.
#[derive(Default)]
pub struct LoggingRenderer {
    live:    HashSet<LayerHandle>,
    next:    u32,
    created: bool,
    calls:   usize,
}

impl LoggingRenderer {
    pub fn live_layers(&self) -> usize {
        self.live.len()
    }

    pub fn calls(&self) -> usize {
        self.calls
    }

    fn alloc(&mut self) -> RenderResult<LayerHandle> {
        if !self.created {
            return Err(RenderError::NoMap);
        }
        self.next += 1;
        let handle = LayerHandle(self.next);
        self.live.insert(handle);
        Ok(handle)
    }

    fn check(&self, handle: LayerHandle) -> RenderResult<()> {
        if self.live.contains(&handle) {
            Ok(())
        } else {
            Err(RenderError::UnknownLayer(handle))
        }
    }
}

impl MapRenderer for LoggingRenderer {
    fn create_map(&mut self, center: Coordinate, zoom: u8, attribution: &str) -> RenderResult<()> {
        self.calls += 1;
        self.created = true;
        tracing::info!(%center, zoom, attribution, "map created");
        Ok(())
    }

    fn add_marker(&mut self, spec: &MarkerSpec) -> RenderResult<LayerHandle> {
        self.calls += 1;
        let handle = self.alloc()?;
        tracing::info!(
            %handle,
            role = %spec.role,
            position = %spec.position,
            color = %spec.style.color,
            pulsing = spec.style.pulsing,
            popup = %spec.style.label,
            "marker added"
        );
        Ok(handle)
    }

    fn move_marker(&mut self, handle: LayerHandle, position: Coordinate) -> RenderResult<()> {
        self.calls += 1;
        self.check(handle)?;
        tracing::info!(%handle, %position, "marker moved");
        Ok(())
    }

    fn draw_line(&mut self, from: Coordinate, to: Coordinate, style: &RouteStyle) -> RenderResult<LayerHandle> {
        self.calls += 1;
        let handle = self.alloc()?;
        tracing::info!(
            %handle,
            %from,
            %to,
            color = %style.color,
            weight = style.weight,
            dash = style.dash_array.as_deref().unwrap_or("solid"),
            "route drawn"
        );
        Ok(handle)
    }

    fn add_label(&mut self, position: Coordinate, text: &str) -> RenderResult<LayerHandle> {
        self.calls += 1;
        let handle = self.alloc()?;
        tracing::info!(%handle, %position, text, "label added");
        Ok(handle)
    }

    fn fit_bounds(&mut self, bounds: &Bounds, padding_px: u32, max_zoom: u8) -> RenderResult<()> {
        self.calls += 1;
        tracing::info!(
            south_west = %bounds.south_west,
            north_east = %bounds.north_east,
            padding_px,
            max_zoom,
            "fit bounds"
        );
        Ok(())
    }

    fn set_view(&mut self, center: Coordinate, zoom: u8) -> RenderResult<()> {
        self.calls += 1;
        tracing::info!(%center, zoom, "set view");
        Ok(())
    }

    fn remove_layer(&mut self, handle: LayerHandle) -> RenderResult<()> {
        self.calls += 1;
        self.check(handle)?;
        self.live.remove(&handle);
        tracing::debug!(%handle, "layer removed");
        Ok(())
    }
}

// ── StdoutPanels ──────────────────────────────────────────────────────────────

/// Prints each panel update on its own line.
#[derive(Default)]
pub struct StdoutPanels;

impl DisplayPanels for StdoutPanels {
    fn show_current_location(&mut self, text: &str) {
        println!("  [you]      {text}");
    }

    fn show_target_location(&mut self, text: &str) {
        println!("  [qr]       {text}");
    }

    fn show_distance(&mut self, text: &str) {
        println!("  [distance] {text}");
    }

    fn show_form_fields(&mut self, lat: &str, lon: &str) {
        println!("  [form]     latitude={lat} longitude={lon}");
    }

    fn set_loading(&mut self, loading: bool) {
        if loading {
            println!("  [loading]  locating…");
        }
    }

    fn alert(&mut self, message: &str) {
        println!("  [alert]    {message}");
    }

    fn show_notice(&mut self, message: &str) {
        println!("  [notice]   {message}");
    }
}
