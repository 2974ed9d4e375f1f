//! The [`GeoPoint`] value type and the fixed reference origin.

use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A geographic position, latitude and longitude in degrees.
///
/// `GeoPoint` is a plain immutable value; operations that produce positions
/// return fresh values rather than mutating shared state.
///
/// # Notes
/// * No range validation is performed. Callers are expected to keep
///   `|latitude| <= 90` and longitude within a sane range; out-of-range
///   inputs flow through the trigonometry unchecked.
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoPoint {
    /// The latitude of the position in degrees, positive north.
    pub latitude: f64,

    /// The longitude of the position in degrees, positive east.
    pub longitude: f64,
}

/// Reference point anchoring the default local Cartesian frame.
pub const ORIGIN: GeoPoint = GeoPoint {
    latitude: 59.39453626,
    longitude: 24.67179717,
};

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> GeoPoint {
        GeoPoint {
            latitude,
            longitude,
        }
    }
}

impl Display for GeoPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

impl From<GeoPoint> for geo_types::Point<f64> {
    fn from(p: GeoPoint) -> geo_types::Point<f64> {
        geo_types::Point::new(p.longitude, p.latitude)
    }
}

impl From<geo_types::Point<f64>> for GeoPoint {
    fn from(p: geo_types::Point<f64>) -> GeoPoint {
        GeoPoint::new(p.y(), p.x())
    }
}

impl From<GeoPoint> for geo_types::Coord<f64> {
    fn from(p: GeoPoint) -> geo_types::Coord<f64> {
        geo_types::Coord {
            x: p.longitude,
            y: p.latitude,
        }
    }
}

impl From<geo_types::Coord<f64>> for GeoPoint {
    fn from(c: geo_types::Coord<f64>) -> GeoPoint {
        GeoPoint::new(c.y, c.x)
    }
}
