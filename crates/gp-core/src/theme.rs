//! Visual style data.
//!
//! Everything here is plain data with `Default` impls; nothing in the
//! companion branches on it except the renderer, which receives colours and
//! line styles verbatim.

// ── Map style ─────────────────────────────────────────────────────────────────

/// How one marker is drawn.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarkerStyle {
    /// CSS colour of the dot.
    pub color: String,
    /// Animated pulse around the dot.
    pub pulsing: bool,
    /// Popup text bound to the marker.
    pub label: String,
}

/// Line drawn between the current position and the target.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteStyle {
    pub color: String,
    /// Stroke width, pixels.
    pub weight: u32,
    /// `0.0..=1.0`.
    pub opacity: f32,
    /// SVG dash pattern, e.g. `"10, 10"`.  `None` draws a solid line.
    pub dash_array: Option<String>,
}

/// Everything the renderer needs to draw the two markers and the route.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapStyle {
    pub current_marker: MarkerStyle,
    pub target_marker:  MarkerStyle,
    pub route:          RouteStyle,
    /// Attribution appended to the tile provider's.
    pub attribution:    String,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            color:   "#4e73df".to_owned(),
            pulsing: true,
            label:   "Your current location".to_owned(),
        }
    }
}

impl MarkerStyle {
    /// Red, static marker for the scanned QR position.
    pub fn target() -> Self {
        Self {
            color:   "#e74a3b".to_owned(),
            pulsing: false,
            label:   "QR code location".to_owned(),
        }
    }
}

impl Default for RouteStyle {
    fn default() -> Self {
        Self {
            color:      "#e74a3b".to_owned(),
            weight:     4,
            opacity:    0.7,
            dash_array: Some("10, 10".to_owned()),
        }
    }
}

impl Default for MapStyle {
    fn default() -> Self {
        Self {
            current_marker: MarkerStyle::default(),
            target_marker:  MarkerStyle::target(),
            route:          RouteStyle::default(),
            attribution:    "GeoPet © 2025".to_owned(),
        }
    }
}

// ── Page theme ────────────────────────────────────────────────────────────────

/// One palette entry with its light/dark variants.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Swatch {
    pub main:          String,
    pub light:         Option<String>,
    pub dark:          Option<String>,
    pub contrast_text: Option<String>,
}

impl Swatch {
    fn solid(main: &str) -> Self {
        Self {
            main:          main.to_owned(),
            light:         None,
            dark:          None,
            contrast_text: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Palette {
    pub primary:            Swatch,
    pub secondary:          Swatch,
    pub background_default: String,
    pub background_paper:   String,
    pub text_primary:       String,
    pub text_secondary:     String,
    pub error:              Swatch,
    pub warning:            Swatch,
    pub info:               Swatch,
    pub success:            Swatch,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Typography {
    pub font_family:    String,
    /// Weight shared by all heading levels.
    pub heading_weight: u16,
    pub heading_color:  String,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Shape {
    pub button_radius_px: u16,
    pub button_weight:    u16,
    pub card_radius_px:   u16,
    pub app_bar_color:    String,
}

/// Page-wide colour and typography theme (warm gold palette).
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Theme {
    pub palette:    Palette,
    pub typography: Typography,
    pub shape:      Shape,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: Swatch {
                main:          "#FFD700".to_owned(),
                light:         Some("#FFDB58".to_owned()),
                dark:          Some("#FFB84C".to_owned()),
                contrast_text: Some("#212121".to_owned()),
            },
            secondary: Swatch {
                main:          "#FFB84C".to_owned(),
                light:         Some("#FFDB58".to_owned()),
                dark:          Some("#E09819".to_owned()),
                contrast_text: Some("#212121".to_owned()),
            },
            background_default: "#FFF9E6".to_owned(),
            background_paper:   "#FFFDF5".to_owned(),
            text_primary:       "#212121".to_owned(),
            text_secondary:     "#424242".to_owned(),
            error:              Swatch::solid("#FF6B6B"),
            warning:            Swatch::solid("#FFB84C"),
            info:               Swatch::solid("#64B5F6"),
            success:            Swatch::solid("#66BB6A"),
        }
    }
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            font_family:    "\"Roboto\", \"Helvetica\", \"Arial\", sans-serif".to_owned(),
            heading_weight: 500,
            heading_color:  "#212121".to_owned(),
        }
    }
}

impl Default for Shape {
    fn default() -> Self {
        Self {
            button_radius_px: 8,
            button_weight:    600,
            card_radius_px:   12,
            app_bar_color:    "#FFDB58".to_owned(),
        }
    }
}
