//! Axis-aligned lat/lon bounding box.

use rstar::{AABB, Envelope};

use gp_core::Coordinate;

/// A `[south-west, north-east]` box in degrees.
///
/// Computation goes through an `rstar` envelope over `[lat, lon]` points.
/// Boxes that straddle the antimeridian are not split; a route across it
/// yields a box spanning most of the globe, which the renderer still fits.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub south_west: Coordinate,
    pub north_east: Coordinate,
}

impl Bounds {
    /// Smallest box containing every point.  `None` for an empty iterator.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let pts: Vec<[f64; 2]> = points.into_iter().map(Coordinate::to_array).collect();
        if pts.is_empty() {
            return None;
        }
        Some(Self::from_envelope(&AABB::from_points(pts.iter())))
    }

    fn from_envelope(env: &AABB<[f64; 2]>) -> Self {
        let [s, w] = env.lower();
        let [n, e] = env.upper();
        Self {
            south_west: Coordinate { lat: s, lon: w },
            north_east: Coordinate { lat: n, lon: e },
        }
    }

    fn envelope(&self) -> AABB<[f64; 2]> {
        AABB::from_corners(self.south_west.to_array(), self.north_east.to_array())
    }

    /// Inclusive on every edge.
    pub fn contains(&self, c: Coordinate) -> bool {
        self.envelope().contains_point(&c.to_array())
    }

    pub fn center(&self) -> Coordinate {
        let [lat, lon] = self.envelope().center();
        Coordinate { lat, lon }
    }

    /// Grow the box to include `c`.
    pub fn extended(&self, c: Coordinate) -> Self {
        let merged = self.envelope().merged(&AABB::from_point(c.to_array()));
        Self::from_envelope(&merged)
    }

    #[inline]
    pub fn lat_span(&self) -> f64 {
        self.north_east.lat - self.south_west.lat
    }

    #[inline]
    pub fn lon_span(&self) -> f64 {
        self.north_east.lon - self.south_west.lon
    }
}
