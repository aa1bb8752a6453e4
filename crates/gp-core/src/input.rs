//! Parsing of user-typed and page-embedded coordinate text.

use crate::{Coordinate, CoreError, CoreResult};

/// Parse a manually entered latitude/longitude pair.
///
/// Numeric problems are reported before range problems, so `"abc"` with an
/// out-of-range partner still yields [`CoreError::InvalidNumericInput`].
pub fn parse_manual(lat_text: &str, lon_text: &str) -> CoreResult<Coordinate> {
    let lat = parse_field("latitude", lat_text)?;
    let lon = parse_field("longitude", lon_text)?;
    Coordinate::new(lat, lon)
}

fn parse_field(field: &'static str, text: &str) -> CoreResult<f64> {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(CoreError::InvalidNumericInput {
            field,
            value: text.to_owned(),
        }),
    }
}

/// Lenient parse for page data attributes: absent, blank, non-numeric and
/// non-finite values all mean "not supplied".
pub fn parse_attribute(text: Option<&str>) -> Option<f64> {
    text.map(str::trim)
        .filter(|t| !t.is_empty())
        .and_then(|t| t.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}
