//! Geographic coordinate type and great-circle distance.
//!
//! `Coordinate` uses `f64` latitude/longitude.  Panels print seven decimal
//! places (~1 cm at the equator), which single precision cannot carry.

use std::fmt;

use crate::{CoreError, CoreResult};

/// Mean Earth radius used by the haversine formula, kilometres.
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// Position used whenever the device location cannot be obtained
/// (Mexico City, Zócalo).
pub const FALLBACK_COORDINATE: Coordinate = Coordinate {
    lat: 19.4326,
    lon: -99.1332,
};

/// A WGS-84 geographic coordinate in decimal degrees.
///
/// Fields are public so values can be written as literals; anything that
/// enters engine state goes through [`Coordinate::new`] or
/// [`Coordinate::validate`] first.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    /// Build a coordinate, rejecting non-finite or out-of-range components.
    pub fn new(lat: f64, lon: f64) -> CoreResult<Self> {
        let c = Self { lat, lon };
        c.validate()?;
        Ok(c)
    }

    /// `Ok(())` when `lat ∈ [-90, 90]` and `lon ∈ [-180, 180]`.
    ///
    /// NaN fails both range checks, so it is reported as out of range too.
    pub fn validate(&self) -> CoreResult<()> {
        let lat_ok = (-90.0..=90.0).contains(&self.lat);
        let lon_ok = (-180.0..=180.0).contains(&self.lon);
        if lat_ok && lon_ok {
            Ok(())
        } else {
            Err(CoreError::OutOfRange {
                lat: self.lat,
                lon: self.lon,
            })
        }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Haversine great-circle distance in kilometres.
    ///
    /// Symmetric bit-for-bit, and exactly `0.0` for identical inputs.
    pub fn distance_km(self, other: Coordinate) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);
        // Rounding can push `a` just past 1 for antipodal pairs.
        let a = a.clamp(0.0, 1.0);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }

    /// Component-wise mean of two coordinates.
    ///
    /// This is where the distance label is anchored on the map, not the
    /// great-circle midpoint; the two agree closely at city scale.
    #[inline]
    pub fn midpoint(self, other: Coordinate) -> Coordinate {
        Coordinate {
            lat: (self.lat + other.lat) / 2.0,
            lon: (self.lon + other.lon) / 2.0,
        }
    }

    /// `[lat, lon]` pair, the point layout used by the bounds envelope.
    #[inline]
    pub fn to_array(self) -> [f64; 2] {
        [self.lat, self.lon]
    }
}

/// Free-function form of [`Coordinate::distance_km`].
#[inline]
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    a.distance_km(b)
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.7}, {:.7})", self.lat, self.lon)
    }
}
