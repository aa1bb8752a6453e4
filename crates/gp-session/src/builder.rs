//! Fluent builder for constructing a [`MapSession`].

use gp_core::MapStyle;
use gp_display::{GeoDisplay, ViewConfig};

use crate::{DisplayPanels, MapRenderer, MapSession, NoopPanels, PageData, SessionError, SessionResult};

/// Fluent builder for [`MapSession<R, P>`].
///
/// # Required inputs
///
/// - `R: MapRenderer`: the map widget backend
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                                   |
/// |---------------------|-------------------------------------------|
/// | `.panels(p)`        | [`NoopPanels`]                            |
/// | `.page(d)`          | `PageData::default()` (no coordinates)    |
/// | `.style(s)`         | `MapStyle::default()`                     |
/// | `.view_config(c)`   | `ViewConfig::default()` (15 / 50 px / 16) |
pub struct SessionBuilder<R: MapRenderer, P: DisplayPanels = NoopPanels> {
    renderer:    R,
    panels:      P,
    page:        PageData,
    style:       MapStyle,
    view_config: ViewConfig,
}

impl<R: MapRenderer> SessionBuilder<R, NoopPanels> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            panels:      NoopPanels,
            page:        PageData::default(),
            style:       MapStyle::default(),
            view_config: ViewConfig::default(),
        }
    }
}

impl<R: MapRenderer, P: DisplayPanels> SessionBuilder<R, P> {
    /// Attach the page's text regions.
    pub fn panels<Q: DisplayPanels>(self, panels: Q) -> SessionBuilder<R, Q> {
        SessionBuilder {
            renderer:    self.renderer,
            panels,
            page:        self.page,
            style:       self.style,
            view_config: self.view_config,
        }
    }

    pub fn page(mut self, page: PageData) -> Self {
        self.page = page;
        self
    }

    pub fn style(mut self, style: MapStyle) -> Self {
        self.style = style;
        self
    }

    pub fn view_config(mut self, config: ViewConfig) -> Self {
        self.view_config = config;
        self
    }

    /// Validate the view configuration and return a session with no map yet.
    pub fn build(self) -> SessionResult<MapSession<R, P>> {
        self.view_config
            .validate()
            .map_err(|e| SessionError::Config(e.to_string()))?;

        let display = GeoDisplay::new(self.view_config).with_labels(
            self.style.current_marker.label.clone(),
            self.style.target_marker.label.clone(),
        );

        Ok(MapSession::from_parts(
            display,
            self.renderer,
            self.panels,
            self.style,
            self.page,
        ))
    }
}
