//! geopet-demo — headless walk through one GeoPet map page.
//!
//! Plays the part of the browser: a simulated GPS, a renderer that logs
//! instead of drawing, and panels that print to stdout.  The page dataset
//! (and optionally a theme) can be supplied as JSON files:
//!
//! ```text
//! geopet-demo [page.json] [theme.json]
//! RUST_LOG=debug geopet-demo
//! ```

mod provider;
mod render;

use std::collections::HashMap;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

use gp_core::{Coordinate, MapStyle, Theme};
use gp_locate::{Locator, UnsupportedProvider};
use gp_session::{PageData, PanelNotifier, SessionBuilder};

use provider::SimulatedProvider;
use render::{LoggingRenderer, StdoutPanels};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:       u64 = 42;
const VIEWPORT_W: u32 = 800;
const VIEWPORT_H: u32 = 600;

/// The scanner stands in the Zócalo; the pet's QR tag was scanned in
/// Alameda Central, about 1.5 km west.
const HOME: Coordinate = Coordinate { lat: 19.4326, lon: -99.1332 };

const DEFAULT_PAGE: &str = r#"{
    "page":   "map_view",
    "qr-lat": "19.4353",
    "qr-lng": "-99.1446"
}"#;

// ── Loading ───────────────────────────────────────────────────────────────────

fn load_page(path: Option<&str>) -> Result<PageData> {
    let text = match path {
        Some(p) => std::fs::read_to_string(p).with_context(|| format!("reading page data {p}"))?,
        None => DEFAULT_PAGE.to_owned(),
    };
    let attrs: HashMap<String, String> =
        serde_json::from_str(&text).context("page data must be a flat JSON object of strings")?;
    Ok(PageData::from_dataset(&attrs))
}

fn load_theme(path: Option<&str>) -> Result<Theme> {
    match path {
        Some(p) => {
            let text = std::fs::read_to_string(p).with_context(|| format!("reading theme {p}"))?;
            Ok(serde_json::from_str(&text).context("parsing theme")?)
        }
        None => Ok(Theme::default()),
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let page  = load_page(args.first().map(String::as_str))?;
    let theme = load_theme(args.get(1).map(String::as_str))?;

    println!("=== geopet-demo ===");
    println!(
        "Page: {:?}  |  target: {}  |  scanner: {}",
        page.kind,
        page.target.map_or("none".to_owned(), |c| c.to_string()),
        page.scanner.map_or("none".to_owned(), |c| c.to_string()),
    );
    println!(
        "Theme: primary {}  secondary {}  font {}",
        theme.palette.primary.main, theme.palette.secondary.main, theme.typography.font_family
    );
    println!();

    // 1. Collaborators.
    let mut locator = Locator::with_notifier(
        SimulatedProvider::new(HOME, SEED).latency(Duration::from_millis(120)),
        PanelNotifier::new(StdoutPanels),
    );
    let mut session = SessionBuilder::new(LoggingRenderer::default())
        .panels(StdoutPanels)
        .page(page.clone())
        .style(MapStyle::default())
        .build()?;

    // 2. Page load.
    println!("-- page load");
    let t0 = Instant::now();
    let start = session.bootstrap(&mut locator).await?;
    println!("started at {start} in {:.1} ms", t0.elapsed().as_secs_f64() * 1e3);
    if page.kind.auto_locate() {
        let acq = session.fill_location_inputs(&mut locator).await?;
        println!("auto-located ({:?}, ±{:.0} m)", acq.source, acq.reading.accuracy_m);
    }
    println!();

    // 3. The user taps around the map.
    println!("-- map clicks");
    for (lat, lon) in [(19.4340, -99.1380), (19.4348, -99.1420)] {
        session.on_map_click(Coordinate { lat, lon })?;
    }
    println!();

    // 4. Manual entry: one typo, one out of range, one good.
    println!("-- manual search");
    for (lat, lon) in [("19.43x", "-99.14"), ("119.4", "-99.14"), ("19.4350", "-99.1430")] {
        if let Err(e) = session.search_location(lat, lon) {
            println!("  rejected ({lat}, {lon}): {e}");
        }
    }
    println!();

    // 5. Permission denied degrades with an inline notice; a host without
    //    geolocation gets a blocking alert.  Both resolve to the fallback.
    println!("-- degraded hosts");
    let mut denied = SimulatedProvider::new(HOME, SEED);
    denied.fail_with = Some(1);
    let acq = Locator::with_notifier(denied, PanelNotifier::new(StdoutPanels)).acquire().await;
    println!("  denied      -> {} ±{} m ({:?})", acq.reading.coordinate, acq.reading.accuracy_m, acq.source);
    let acq = Locator::with_notifier(UnsupportedProvider, PanelNotifier::new(StdoutPanels)).acquire().await;
    println!("  unsupported -> {} ±{} m ({:?})", acq.reading.coordinate, acq.reading.accuracy_m, acq.source);
    println!();

    // 6. Final view.
    let view = session.sync()?;
    if let Some(route) = view.route() {
        println!(
            "Route: {}  |  fit zoom at {VIEWPORT_W}×{VIEWPORT_H}: {}",
            route.distance_label,
            route.fit_zoom(VIEWPORT_W, VIEWPORT_H)
        );
    }
    println!("{}", serde_json::to_string_pretty(&view)?);

    let provider_requests = locator.provider().requests;
    let (renderer, _panels) = session.into_parts();
    println!();
    println!(
        "Provider requests: {provider_requests}  |  renderer calls: {}  |  live layers: {}",
        renderer.calls(),
        renderer.live_layers()
    );

    Ok(())
}
