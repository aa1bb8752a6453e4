//! Page dataset attributes.

use std::collections::HashMap;

use gp_core::{Coordinate, parse_attribute};

/// Which page the session is running on.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PageKind {
    GenerateQr,
    ScanQr,
    MapView,
    #[default]
    Other,
}

impl PageKind {
    /// Parse the `page` attribute (`generate_qr`, `scan_qr`, `map_view`).
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "generate_qr" => PageKind::GenerateQr,
            "scan_qr" => PageKind::ScanQr,
            "map_view" => PageKind::MapView,
            _ => PageKind::Other,
        }
    }

    /// Pages that fill the location inputs on load.
    pub fn auto_locate(self) -> bool {
        matches!(self, PageKind::GenerateQr | PageKind::ScanQr | PageKind::MapView)
    }
}

/// Coordinates and page kind handed to a session by its host page.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageData {
    /// Where the QR code was scanned.
    pub target:  Option<Coordinate>,
    /// The scanner's own position, when the page already knows it.
    pub scanner: Option<Coordinate>,
    pub kind:    PageKind,
}

impl PageData {
    /// Read `qr-lat`/`qr-lng`, `scanner-lat`/`scanner-lng` and `page`.
    ///
    /// A coordinate pair is kept only when both halves parse and the result
    /// is in range; anything else is treated as absent.
    pub fn from_dataset(attrs: &HashMap<String, String>) -> Self {
        let pair = |lat_key: &str, lon_key: &str| {
            let lat = parse_attribute(attrs.get(lat_key).map(String::as_str))?;
            let lon = parse_attribute(attrs.get(lon_key).map(String::as_str))?;
            Coordinate::new(lat, lon).ok()
        };

        Self {
            target:  pair("qr-lat", "qr-lng"),
            scanner: pair("scanner-lat", "scanner-lng"),
            kind:    attrs.get("page").map_or(PageKind::Other, |p| PageKind::from_name(p)),
        }
    }
}
