//! Unit tests for gp-session.

use std::collections::HashMap;

use gp_core::{Coordinate, CoreError, FALLBACK_COORDINATE, RouteStyle};
use gp_display::{Bounds, DisplayError, MarkerRole, ViewConfig, ViewState};
use gp_locate::{FailingProvider, FixedProvider, Locator, UnsupportedProvider};

use crate::{
    DisplayPanels, LayerHandle, MapRenderer, MapSession, MarkerSpec, PageData, PageKind,
    PanelNotifier, RenderError, RenderResult, SessionBuilder, SessionError,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
enum Op {
    CreateMap { center: Coordinate, zoom: u8, attribution: String },
    AddMarker(MarkerSpec),
    MoveMarker(LayerHandle, Coordinate),
    DrawLine(Coordinate, Coordinate, RouteStyle),
    AddLabel(Coordinate, String),
    FitBounds(Bounds, u32, u8),
    SetView(Coordinate, u8),
    Remove(LayerHandle),
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum Layer {
    Marker(MarkerRole),
    Line,
    Label,
}

/// Records every call and enforces handle bookkeeping like a real widget.
#[derive(Default)]
struct RecordingRenderer {
    ops:     Vec<Op>,
    live:    HashMap<LayerHandle, Layer>,
    next:    u32,
    created: bool,
}

impl RecordingRenderer {
    fn alloc(&mut self, layer: Layer) -> RenderResult<LayerHandle> {
        if !self.created {
            return Err(RenderError::NoMap);
        }
        self.next += 1;
        let h = LayerHandle(self.next);
        self.live.insert(h, layer);
        Ok(h)
    }

    fn count(&self, layer: Layer) -> usize {
        self.live.values().filter(|l| **l == layer).count()
    }
}

impl MapRenderer for RecordingRenderer {
    fn create_map(&mut self, center: Coordinate, zoom: u8, attribution: &str) -> RenderResult<()> {
        if self.created {
            return Err(RenderError::Backend("map created twice".into()));
        }
        self.created = true;
        self.ops.push(Op::CreateMap { center, zoom, attribution: attribution.to_owned() });
        Ok(())
    }

    fn add_marker(&mut self, spec: &MarkerSpec) -> RenderResult<LayerHandle> {
        let h = self.alloc(Layer::Marker(spec.role))?;
        self.ops.push(Op::AddMarker(spec.clone()));
        Ok(h)
    }

    fn move_marker(&mut self, handle: LayerHandle, position: Coordinate) -> RenderResult<()> {
        if !self.live.contains_key(&handle) {
            return Err(RenderError::UnknownLayer(handle));
        }
        self.ops.push(Op::MoveMarker(handle, position));
        Ok(())
    }

    fn draw_line(&mut self, from: Coordinate, to: Coordinate, style: &RouteStyle) -> RenderResult<LayerHandle> {
        let h = self.alloc(Layer::Line)?;
        self.ops.push(Op::DrawLine(from, to, style.clone()));
        Ok(h)
    }

    fn add_label(&mut self, position: Coordinate, text: &str) -> RenderResult<LayerHandle> {
        let h = self.alloc(Layer::Label)?;
        self.ops.push(Op::AddLabel(position, text.to_owned()));
        Ok(h)
    }

    fn fit_bounds(&mut self, bounds: &Bounds, padding_px: u32, max_zoom: u8) -> RenderResult<()> {
        self.ops.push(Op::FitBounds(*bounds, padding_px, max_zoom));
        Ok(())
    }

    fn set_view(&mut self, center: Coordinate, zoom: u8) -> RenderResult<()> {
        self.ops.push(Op::SetView(center, zoom));
        Ok(())
    }

    fn remove_layer(&mut self, handle: LayerHandle) -> RenderResult<()> {
        if self.live.remove(&handle).is_none() {
            return Err(RenderError::UnknownLayer(handle));
        }
        self.ops.push(Op::Remove(handle));
        Ok(())
    }
}

#[derive(Default)]
struct RecordingPanels {
    current:  Option<String>,
    target:   Option<String>,
    distance: Option<String>,
    form:     Option<(String, String)>,
    loading:  Vec<bool>,
    alerts:   Vec<String>,
    notices:  Vec<String>,
}

impl DisplayPanels for RecordingPanels {
    fn show_current_location(&mut self, text: &str) {
        self.current = Some(text.to_owned());
    }

    fn show_target_location(&mut self, text: &str) {
        self.target = Some(text.to_owned());
    }

    fn show_distance(&mut self, text: &str) {
        self.distance = Some(text.to_owned());
    }

    fn show_form_fields(&mut self, lat: &str, lon: &str) {
        self.form = Some((lat.to_owned(), lon.to_owned()));
    }

    fn set_loading(&mut self, loading: bool) {
        self.loading.push(loading);
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_owned());
    }

    fn show_notice(&mut self, message: &str) {
        self.notices.push(message.to_owned());
    }
}

type TestSession = MapSession<RecordingRenderer, RecordingPanels>;

fn c(lat: f64, lon: f64) -> Coordinate {
    Coordinate { lat, lon }
}

fn session(page: PageData) -> TestSession {
    SessionBuilder::new(RecordingRenderer::default())
        .panels(RecordingPanels::default())
        .page(page)
        .build()
        .unwrap()
}

fn page_with_target(target: Coordinate) -> PageData {
    PageData { target: Some(target), ..PageData::default() }
}

fn dataset(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

// ── Page data ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod page {
    use super::*;

    #[test]
    fn reads_target_scanner_and_kind() {
        let d = PageData::from_dataset(&dataset(&[
            ("qr-lat", "19.1"),
            ("qr-lng", "-99.1"),
            ("scanner-lat", " 19.0 "),
            ("scanner-lng", "-99.0"),
            ("page", "map_view"),
        ]));
        assert_eq!(d.target, Some(c(19.1, -99.1)));
        assert_eq!(d.scanner, Some(c(19.0, -99.0)));
        assert_eq!(d.kind, PageKind::MapView);
    }

    #[test]
    fn incomplete_or_invalid_pairs_are_absent() {
        let d = PageData::from_dataset(&dataset(&[
            ("qr-lat", "19.1"),
            ("scanner-lat", "95.0"),
            ("scanner-lng", "0.0"),
        ]));
        assert_eq!(d.target, None);
        assert_eq!(d.scanner, None);
        assert_eq!(d.kind, PageKind::Other);

        let d = PageData::from_dataset(&dataset(&[("qr-lat", "abc"), ("qr-lng", "1.0")]));
        assert_eq!(d.target, None);
    }

    #[test]
    fn auto_locate_kinds() {
        assert!(PageKind::from_name("generate_qr").auto_locate());
        assert!(PageKind::from_name("scan_qr").auto_locate());
        assert!(PageKind::from_name("map_view").auto_locate());
        assert!(!PageKind::from_name("index").auto_locate());
        assert_eq!(PageKind::from_name("index"), PageKind::Other);
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use super::*;

    #[test]
    fn rejects_zoom_beyond_tile_levels() {
        let result = SessionBuilder::new(RecordingRenderer::default())
            .view_config(ViewConfig { max_fit_zoom: 23, ..ViewConfig::default() })
            .build();
        assert!(matches!(result, Err(SessionError::Config(_))));
    }

    #[test]
    fn borrowed_panels_receive_updates() {
        let mut panels = RecordingPanels::default();
        {
            let mut s = SessionBuilder::new(RecordingRenderer::default())
                .panels(&mut panels)
                .build()
                .unwrap();
            assert!(s.search_location("", "1.0").is_err());
        }
        assert_eq!(panels.alerts.len(), 1);
    }

    #[test]
    fn fresh_session_has_no_map() {
        let s = session(PageData::default());
        assert!(!s.is_map_ready());
        assert!(s.renderer().ops.is_empty());
        assert_eq!(s.display().compute_view(), ViewState::Empty);
    }
}

// ── Bootstrap ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod bootstrap {
    use super::*;

    #[tokio::test]
    async fn acquires_and_centres_single_view() {
        let mut locator = Locator::new(FixedProvider::new(40.4168, -3.7038, 10.0));
        let mut s = session(PageData::default());
        let start = s.bootstrap(&mut locator).await.unwrap();
        assert_eq!(start, c(40.4168, -3.7038));

        let ops = &s.renderer().ops;
        assert_eq!(
            ops[0],
            Op::CreateMap { center: start, zoom: 15, attribution: "GeoPet © 2025".into() }
        );
        match &ops[1] {
            Op::AddMarker(spec) => {
                assert_eq!(spec.role, MarkerRole::Current);
                assert!(spec.style.pulsing);
                assert_eq!(spec.style.color, "#4e73df");
                assert_eq!(spec.style.label, "Your current location");
            }
            other => panic!("expected marker, got {other:?}"),
        }
        assert!(ops.contains(&Op::SetView(start, 15)));
        assert_eq!(s.renderer().count(Layer::Line), 0);

        let p = s.panels();
        assert_eq!(p.form, Some(("40.4168000".into(), "-3.7038000".into())));
        assert_eq!(p.current.as_deref(), Some("Latitude: 40.4168000, Longitude: -3.7038000"));
        assert_eq!(p.distance, None);
    }

    #[tokio::test]
    async fn page_target_draws_route() {
        let mut locator = Locator::new(FixedProvider::new(19.0, -99.0, 5.0));
        let mut s = session(page_with_target(c(19.1, -99.1)));
        s.bootstrap(&mut locator).await.unwrap();

        let r = s.renderer();
        assert_eq!(r.count(Layer::Marker(MarkerRole::Current)), 1);
        assert_eq!(r.count(Layer::Marker(MarkerRole::Target)), 1);
        assert_eq!(r.count(Layer::Line), 1);
        assert_eq!(r.count(Layer::Label), 1);

        let line = r.ops.iter().find_map(|op| match op {
            Op::DrawLine(a, b, style) => Some((*a, *b, style.clone())),
            _ => None,
        });
        let (a, b, style) = line.unwrap();
        assert_eq!((a, b), (c(19.0, -99.0), c(19.1, -99.1)));
        assert_eq!(style.dash_array.as_deref(), Some("10, 10"));

        let fit = r.ops.iter().find_map(|op| match op {
            Op::FitBounds(bounds, pad, max) => Some((*bounds, *pad, *max)),
            _ => None,
        });
        let (bounds, pad, max) = fit.unwrap();
        assert!(bounds.contains(a) && bounds.contains(b));
        assert_eq!((pad, max), (50, 16));

        let distance = s.display().distance_km().unwrap();
        assert_eq!(s.panels().distance, Some(format!("{distance:.2} km")));
        assert!(s.panels().target.is_some());
    }

    #[tokio::test]
    async fn scanner_position_skips_acquisition() {
        let mut locator = Locator::new(FixedProvider::new(1.0, 1.0, 1.0));
        let page = PageData {
            scanner: Some(c(19.0, -99.0)),
            target:  Some(c(19.1, -99.1)),
            kind:    PageKind::MapView,
        };
        let mut s = session(page);
        let start = s.bootstrap(&mut locator).await.unwrap();
        assert_eq!(start, c(19.0, -99.0));
        assert_eq!(locator.provider().requests, 0);
        assert!(s.display().compute_view().route().is_some());
    }

    #[tokio::test]
    async fn failed_acquisition_starts_at_fallback() {
        let mut locator = Locator::new(FailingProvider::new(1));
        let mut s = session(PageData::default());
        let start = s.bootstrap(&mut locator).await.unwrap();
        assert_eq!(start, FALLBACK_COORDINATE);
        assert!(matches!(
            s.renderer().ops[0],
            Op::CreateMap { center, .. } if center == FALLBACK_COORDINATE
        ));
    }

    #[tokio::test]
    async fn out_of_range_page_target_is_dropped() {
        let mut locator = Locator::new(FixedProvider::new(19.0, -99.0, 5.0));
        let mut s = session(page_with_target(c(95.0, 0.0)));
        let start = s.bootstrap(&mut locator).await.unwrap();
        assert_eq!(start, c(19.0, -99.0));

        assert!(s.is_map_ready());
        assert_eq!(s.page().target, None);
        assert!(s.display().target().is_none());
        assert!(matches!(s.display().compute_view(), ViewState::Single(_)));
        assert_eq!(s.renderer().count(Layer::Marker(MarkerRole::Current)), 1);
        assert_eq!(s.renderer().count(Layer::Line), 0);
        assert_eq!(s.panels().form, Some(("19.0000000".into(), "-99.0000000".into())));
    }

    #[tokio::test]
    async fn out_of_range_scanner_falls_back_to_acquisition() {
        let mut locator = Locator::new(FixedProvider::new(19.0, -99.0, 5.0));
        let page = PageData {
            scanner: Some(c(0.0, 181.0)),
            ..PageData::default()
        };
        let mut s = session(page);
        let start = s.bootstrap(&mut locator).await.unwrap();
        assert_eq!(start, c(19.0, -99.0));
        assert_eq!(locator.provider().requests, 1);
        assert_eq!(s.renderer().count(Layer::Marker(MarkerRole::Current)), 1);
    }
}

// ── Handlers ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod handlers {
    use super::*;

    async fn routed_session() -> TestSession {
        let mut locator = Locator::new(FixedProvider::new(19.0, -99.0, 5.0));
        let mut s = session(page_with_target(c(19.1, -99.1)));
        s.bootstrap(&mut locator).await.unwrap();
        s
    }

    #[tokio::test]
    async fn map_click_moves_current_and_reroutes() {
        let mut s = routed_session().await;
        for lon in [-99.02, -99.03, -99.04] {
            let view = s.on_map_click(c(19.02, lon)).unwrap();
            assert_eq!(view.current(), Some(c(19.02, lon)));
        }

        let r = s.renderer();
        assert_eq!(r.count(Layer::Line), 1);
        assert_eq!(r.count(Layer::Label), 1);
        assert_eq!(r.count(Layer::Marker(MarkerRole::Current)), 1);
        assert!(r.ops.iter().any(|op| matches!(op, Op::MoveMarker(_, p) if *p == c(19.02, -99.04))));
        assert_eq!(s.panels().form, Some(("19.0200000".into(), "-99.0400000".into())));
    }

    #[tokio::test]
    async fn map_click_keeps_viewport() {
        let mut s = routed_session().await;
        let before = s.renderer().ops.len();
        s.on_map_click(c(19.05, -99.05)).unwrap();
        let after = &s.renderer().ops[before..];
        assert!(after.iter().any(|op| matches!(op, Op::DrawLine(..))));
        assert!(!after.iter().any(|op| matches!(op, Op::FitBounds(..) | Op::SetView(..))));

        s.clear_target().unwrap();
        let before = s.renderer().ops.len();
        s.on_map_click(c(19.06, -99.06)).unwrap();
        let after = &s.renderer().ops[before..];
        assert!(after.iter().any(|op| matches!(op, Op::MoveMarker(..))));
        assert!(!after.iter().any(|op| matches!(op, Op::SetView(..))));
    }

    #[tokio::test]
    async fn map_click_out_of_range_is_rejected() {
        let mut s = routed_session().await;
        let before = s.renderer().ops.len();
        let err = s.on_map_click(c(0.0, 200.0)).unwrap_err();
        assert!(matches!(err, SessionError::Display(DisplayError::OutOfRange(_))));
        assert_eq!(s.renderer().ops.len(), before);
    }

    #[tokio::test]
    async fn search_rejects_non_numeric_input() {
        let mut s = routed_session().await;
        let before = s.renderer().ops.len();
        let err = s.search_location("abc", "-99.0").unwrap_err();
        assert!(matches!(
            err,
            SessionError::Core(CoreError::InvalidNumericInput { field: "latitude", .. })
        ));
        assert_eq!(s.panels().alerts, vec!["Please enter valid coordinates.".to_owned()]);
        assert_eq!(s.renderer().ops.len(), before);
        assert_eq!(s.display().current().unwrap().position, c(19.0, -99.0));
    }

    #[tokio::test]
    async fn search_rejects_out_of_range() {
        let mut s = routed_session().await;
        let err = s.search_location("95", "10").unwrap_err();
        assert!(matches!(err, SessionError::Core(CoreError::OutOfRange { .. })));
        assert_eq!(s.panels().alerts.len(), 1);
        assert!(s.panels().alerts[0].starts_with("Coordinates out of range"));
        assert_eq!(s.display().current().unwrap().position, c(19.0, -99.0));
    }

    #[tokio::test]
    async fn search_moves_current_marker() {
        let mut s = routed_session().await;
        let view = s.search_location(" 19.05 ", "-99.05").unwrap();
        assert_eq!(view.current(), Some(c(19.05, -99.05)));
        assert!(s.panels().alerts.is_empty());
    }

    #[tokio::test]
    async fn fill_location_inputs_toggles_loading() {
        let mut locator = Locator::new(FixedProvider::new(19.3, -99.2, 8.0));
        let mut s = routed_session().await;
        let acq = s.fill_location_inputs(&mut locator).await.unwrap();
        assert!(!acq.is_fallback());
        assert_eq!(s.panels().loading, vec![true, false]);
        assert_eq!(s.panels().form, Some(("19.3000000".into(), "-99.2000000".into())));
        assert_eq!(s.display().current().unwrap().position, c(19.3, -99.2));
    }

    #[tokio::test]
    async fn fill_location_inputs_creates_map_when_missing() {
        let mut locator = Locator::new(FixedProvider::new(10.0, 20.0, 8.0));
        let mut s = session(PageData::default());
        s.fill_location_inputs(&mut locator).await.unwrap();
        assert!(s.is_map_ready());
        assert!(matches!(s.renderer().ops[0], Op::CreateMap { zoom: 15, .. }));
    }

    #[tokio::test]
    async fn clear_target_removes_route_layers() {
        let mut s = routed_session().await;
        let view = s.clear_target().unwrap();
        assert!(matches!(view, ViewState::Single(_)));
        let r = s.renderer();
        assert_eq!(r.count(Layer::Marker(MarkerRole::Target)), 0);
        assert_eq!(r.count(Layer::Line), 0);
        assert_eq!(r.count(Layer::Label), 0);
        assert_eq!(r.count(Layer::Marker(MarkerRole::Current)), 1);
    }

    #[tokio::test]
    async fn set_target_after_bootstrap() {
        let mut locator = Locator::new(FixedProvider::new(0.0, 0.0, 1.0));
        let mut s = session(PageData::default());
        s.bootstrap(&mut locator).await.unwrap();
        let view = s.set_target(c(0.0, 0.0)).unwrap();
        let route = view.route().unwrap();
        assert_eq!(route.distance_km, 0.0);
        assert_eq!(route.distance_label, "0.00 km");
        assert_eq!(s.renderer().count(Layer::Marker(MarkerRole::Target)), 1);
    }
}

// ── Notices ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod notices {
    use super::*;

    #[tokio::test]
    async fn unsupported_host_raises_alert() {
        let mut panels = RecordingPanels::default();
        let mut locator = Locator::with_notifier(UnsupportedProvider, PanelNotifier::new(&mut panels));
        let acq = locator.acquire().await;
        assert!(acq.is_fallback());
        drop(locator);

        assert_eq!(panels.alerts.len(), 1);
        assert!(panels.alerts[0].starts_with("Your device does not support geolocation"));
        assert!(panels.notices.is_empty());
    }

    #[tokio::test]
    async fn denied_permission_shows_inline_notice() {
        let mut locator =
            Locator::with_notifier(FailingProvider::new(1), PanelNotifier::new(RecordingPanels::default()));
        let mut s = session(PageData::default());
        s.bootstrap(&mut locator).await.unwrap();

        let panels = locator.notifier().panels();
        assert_eq!(panels.notices.len(), 1);
        assert!(panels.alerts.is_empty());
        assert_eq!(s.display().current().unwrap().position, FALLBACK_COORDINATE);
    }
}
