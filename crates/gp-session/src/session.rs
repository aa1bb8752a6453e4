//! `MapSession` — the per-page map state and its event handlers.

use gp_core::{Coordinate, CoreError, MapStyle, format_coordinate, format_degrees, parse_manual};
use gp_display::{GeoDisplay, MarkerRole, RouteView, ViewState};
use gp_locate::{Acquisition, LocationProvider, Locator, Notifier};

use crate::{DisplayPanels, LayerHandle, MapRenderer, MarkerSpec, NoopPanels, PageData, SessionResult};

const INVALID_INPUT_ALERT: &str = "Please enter valid coordinates.";
const OUT_OF_RANGE_ALERT: &str =
    "Coordinates out of range. Latitude: -90 to 90, Longitude: -180 to 180.";

/// Renderer-side handles for everything the session has put on the map.
#[derive(Debug, Default)]
struct Layers {
    current: Option<LayerHandle>,
    target:  Option<LayerHandle>,
    route:   Option<LayerHandle>,
    label:   Option<LayerHandle>,
}

/// One map page.
///
/// Built with [`SessionBuilder`][crate::SessionBuilder].  Every mutating
/// handler updates the [`GeoDisplay`] first and then calls [`sync`][Self::sync]
/// to push the derived view to the renderer and panels; a rejected
/// coordinate never reaches the renderer.
pub struct MapSession<R: MapRenderer, P: DisplayPanels = NoopPanels> {
    display:   GeoDisplay,
    renderer:  R,
    panels:    P,
    style:     MapStyle,
    page:      PageData,
    layers:    Layers,
    map_ready: bool,
}

impl<R: MapRenderer, P: DisplayPanels> MapSession<R, P> {
    pub(crate) fn from_parts(
        display:  GeoDisplay,
        renderer: R,
        panels:   P,
        style:    MapStyle,
        page:     PageData,
    ) -> Self {
        Self {
            display,
            renderer,
            panels,
            style,
            page,
            layers:    Layers::default(),
            map_ready: false,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn display(&self) -> &GeoDisplay {
        &self.display
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn panels(&self) -> &P {
        &self.panels
    }

    pub fn page(&self) -> &PageData {
        &self.page
    }

    pub fn style(&self) -> &MapStyle {
        &self.style
    }

    pub fn is_map_ready(&self) -> bool {
        self.map_ready
    }

    /// Consume the session and return its collaborators.
    pub fn into_parts(self) -> (R, P) {
        (self.renderer, self.panels)
    }

    // ── Handlers ──────────────────────────────────────────────────────────

    /// Page load: pick a starting position, create the map, fill the form
    /// and show the QR target when the page carries one.
    ///
    /// A scanner position embedded in the page wins over acquisition.
    /// Out-of-range page coordinates are dropped with a warning before
    /// anything is drawn.  Returns the starting position.
    pub async fn bootstrap<L, N>(&mut self, locator: &mut Locator<L, N>) -> SessionResult<Coordinate>
    where
        L: LocationProvider,
        N: Notifier,
    {
        self.page.scanner = usable_page_coordinate(self.page.scanner, "scanner");
        self.page.target = usable_page_coordinate(self.page.target, "target");

        let start = match self.page.scanner {
            Some(scanner) => {
                tracing::debug!(lat = scanner.lat, lon = scanner.lon, "using scanner position from page");
                scanner
            }
            None => locator.acquire().await.reading.coordinate,
        };

        self.display.set_current(start)?;
        if let Some(target) = self.page.target {
            self.display.set_target(target)?;
        }

        self.ensure_map(start)?;
        self.show_form_fields(start);
        self.sync()?;
        tracing::info!(kind = ?self.page.kind, target = self.page.target.is_some(), "map session started");
        Ok(start)
    }

    /// Move the current marker.
    pub fn update_current(&mut self, c: Coordinate) -> SessionResult<ViewState> {
        self.display.set_current(c)?;
        self.sync()
    }

    /// Place or move the QR target marker.
    pub fn set_target(&mut self, c: Coordinate) -> SessionResult<ViewState> {
        self.display.set_target(c)?;
        self.sync()
    }

    /// Remove the target marker together with its route and label.
    pub fn clear_target(&mut self) -> SessionResult<ViewState> {
        self.display.clear_target();
        self.sync()
    }

    /// The user clicked the map: the click becomes the current position.
    ///
    /// The markers and route follow the click but the viewport stays where
    /// the user left it.
    pub fn on_map_click(&mut self, c: Coordinate) -> SessionResult<ViewState> {
        self.display.set_current(c)?;
        self.show_form_fields(c);
        self.apply(false)
    }

    /// Manual coordinate entry.
    ///
    /// Bad input raises an alert and is returned as an error; the map and
    /// markers are left as they were.
    pub fn search_location(&mut self, lat_text: &str, lon_text: &str) -> SessionResult<ViewState> {
        let c = match parse_manual(lat_text, lon_text) {
            Ok(c) => c,
            Err(e) => {
                let message = match &e {
                    CoreError::OutOfRange { .. } => OUT_OF_RANGE_ALERT,
                    _ => INVALID_INPUT_ALERT,
                };
                tracing::debug!(error = %e, "manual entry rejected");
                self.panels.alert(message);
                return Err(e.into());
            }
        };
        self.update_current(c)
    }

    /// The "use my location" button: acquire, fill the inputs and move the
    /// current marker, with the loading indicator shown meanwhile.
    pub async fn fill_location_inputs<L, N>(
        &mut self,
        locator: &mut Locator<L, N>,
    ) -> SessionResult<Acquisition>
    where
        L: LocationProvider,
        N: Notifier,
    {
        self.panels.set_loading(true);
        let acq = locator.acquire().await;
        let c = acq.reading.coordinate;
        self.show_form_fields(c);
        self.panels.set_loading(false);

        self.display.set_current(c)?;
        self.sync()?;
        Ok(acq)
    }

    // ── Rendering ─────────────────────────────────────────────────────────

    /// Recompute the view and apply it to the renderer and panels.
    ///
    /// Any previous route line and distance label are removed before a new
    /// one is drawn, so at most one of each is ever on the map.
    pub fn sync(&mut self) -> SessionResult<ViewState> {
        self.apply(true)
    }

    /// Push the current view out; `reframe` moves the viewport as well.
    fn apply(&mut self, reframe: bool) -> SessionResult<ViewState> {
        let view = self.display.compute_view();
        match &view {
            ViewState::Empty => {}
            ViewState::Single(v) => {
                self.ensure_map(v.center)?;
                self.place_marker(MarkerRole::Current, v.center)?;
                self.clear_route()?;
                if let Some(handle) = self.layers.target.take() {
                    self.renderer.remove_layer(handle)?;
                }
                if reframe {
                    self.renderer.set_view(v.center, v.zoom)?;
                }
                self.panels.show_current_location(&format_coordinate(v.center));
            }
            ViewState::Route(r) => {
                self.ensure_map(r.current)?;
                self.place_marker(MarkerRole::Current, r.current)?;
                self.place_marker(MarkerRole::Target, r.target)?;
                self.draw_route(r)?;
                if reframe {
                    self.renderer.fit_bounds(&r.bounds, r.padding_px, r.max_zoom)?;
                }
                self.panels.show_current_location(&format_coordinate(r.current));
                self.panels.show_target_location(&format_coordinate(r.target));
                self.panels.show_distance(&r.distance_label);
            }
        }
        Ok(view)
    }

    fn ensure_map(&mut self, center: Coordinate) -> SessionResult<()> {
        if !self.map_ready {
            let zoom = self.display.config().default_zoom;
            self.renderer.create_map(center, zoom, &self.style.attribution)?;
            self.map_ready = true;
        }
        Ok(())
    }

    fn place_marker(&mut self, role: MarkerRole, position: Coordinate) -> SessionResult<()> {
        let slot = match role {
            MarkerRole::Current => &mut self.layers.current,
            MarkerRole::Target => &mut self.layers.target,
        };
        match *slot {
            Some(handle) => self.renderer.move_marker(handle, position)?,
            None => {
                let marker = match role {
                    MarkerRole::Current => self.display.current(),
                    MarkerRole::Target => self.display.target(),
                };
                let mut style = match role {
                    MarkerRole::Current => self.style.current_marker.clone(),
                    MarkerRole::Target => self.style.target_marker.clone(),
                };
                if let Some(m) = marker {
                    style.label.clone_from(&m.label);
                }
                let spec = MarkerSpec { role, position, style };
                *slot = Some(self.renderer.add_marker(&spec)?);
            }
        }
        Ok(())
    }

    fn draw_route(&mut self, r: &RouteView) -> SessionResult<()> {
        self.clear_route()?;
        let [from, to] = r.line();
        self.layers.route = Some(self.renderer.draw_line(from, to, &self.style.route)?);
        self.layers.label = Some(self.renderer.add_label(r.midpoint, &r.distance_label)?);
        Ok(())
    }

    fn clear_route(&mut self) -> SessionResult<()> {
        if let Some(handle) = self.layers.route.take() {
            self.renderer.remove_layer(handle)?;
        }
        if let Some(handle) = self.layers.label.take() {
            self.renderer.remove_layer(handle)?;
        }
        Ok(())
    }

    fn show_form_fields(&mut self, c: Coordinate) {
        self.panels.show_form_fields(&format_degrees(c.lat), &format_degrees(c.lon));
    }
}

fn usable_page_coordinate(c: Option<Coordinate>, which: &'static str) -> Option<Coordinate> {
    match c {
        Some(c) if !c.is_valid() => {
            tracing::warn!(which, lat = c.lat, lon = c.lon, "ignoring out-of-range page coordinate");
            None
        }
        other => other,
    }
}
