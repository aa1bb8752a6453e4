//! Text written into the display panels.

use crate::Coordinate;

/// Degrees with seven decimal places.
#[inline]
pub fn format_degrees(value: f64) -> String {
    format!("{value:.7}")
}

/// Distance with two decimal places and a `km` suffix.
#[inline]
pub fn format_distance_km(distance_km: f64) -> String {
    format!("{distance_km:.2} km")
}

/// `"Latitude: 19.4326000, Longitude: -99.1332000"`.
pub fn format_coordinate(c: Coordinate) -> String {
    format!(
        "Latitude: {}, Longitude: {}",
        format_degrees(c.lat),
        format_degrees(c.lon)
    )
}
