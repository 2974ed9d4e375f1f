//! Local Cartesian frames anchored at a geographic origin.

use crate::angle::rad_to_deg;
use crate::errors::{GeoconvError, Result};
use crate::great_circle::destination_point;
use crate::point::{GeoPoint, ORIGIN};

/// A local Cartesian frame: planar offsets in meters from a fixed geographic
/// origin, with `x` pointing east and `y` pointing north.
///
/// The [`Default`] frame is anchored at [`ORIGIN`].
///
/// # Example
///
/// ```
/// use geoconv::LocalFrame;
///
/// # fn main() -> geoconv::errors::Result<()> {
/// let end = LocalFrame::default().to_geographic(3.0, 2.0)?;
/// println!("{end}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct LocalFrame {
    origin: GeoPoint,
}

impl LocalFrame {
    /// Constructs a frame anchored at `origin`.
    pub fn new(origin: GeoPoint) -> LocalFrame {
        LocalFrame { origin }
    }

    /// The geographic anchor of this frame.
    pub fn origin(&self) -> GeoPoint {
        self.origin
    }

    /// Converts a Cartesian offset (meters east, meters north) into
    /// geographic coordinates.
    ///
    /// The offset is resolved into a range and an initial course from the
    /// origin, then projected along the great circle with
    /// [`destination_point`].
    ///
    /// # Errors
    /// Returns [`GeoconvError::DegenerateGeometry`] for the zero offset
    /// vector, which has no direction.
    pub fn to_geographic(&self, x: f64, y: f64) -> Result<GeoPoint> {
        let dist = (x * x + y * y).sqrt();
        if dist == 0.0 {
            return Err(GeoconvError::DegenerateGeometry {
                operation: "to_geographic",
                msg: "zero offset vector has no direction".to_string(),
            });
        }
        let bearing = 90.0 - rad_to_deg((y / dist).asin());
        destination_point(&self.origin, bearing, dist)
    }
}

impl Default for LocalFrame {
    fn default() -> LocalFrame {
        LocalFrame::new(ORIGIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_almost_eq;
    use crate::great_circle::distance_meters;

    #[test]
    fn zero_offset_is_degenerate() {
        let err = LocalFrame::default().to_geographic(0.0, 0.0).unwrap_err();
        assert!(err.to_string().contains("to_geographic"));
    }

    #[test]
    fn reference_offset_matches_recorded_output() {
        let end = LocalFrame::default().to_geographic(3.0, 2.0).unwrap();
        assert_almost_eq(end.latitude, 59.39455425853384, 1e-6);
        assert_almost_eq(end.longitude, 24.67185020027226, 1e-6);
    }

    #[test]
    fn forward_and_inverse_agree_on_range() {
        let end = LocalFrame::default().to_geographic(3.0, 2.0).unwrap();
        let range = distance_meters(&ORIGIN, &end);
        assert!(
            (range - 13.0f64.sqrt()).abs() < 0.5,
            "range {range} too far from {}",
            13.0f64.sqrt()
        );
    }

    #[test]
    fn eastward_offset_keeps_latitude() {
        let end = LocalFrame::default().to_geographic(5.0, 0.0).unwrap();
        assert_almost_eq(end.latitude, ORIGIN.latitude, 1e-6);
        assert!(end.longitude > ORIGIN.longitude);
    }

    #[test]
    fn northward_offset_keeps_longitude() {
        let end = LocalFrame::default().to_geographic(0.0, 5.0).unwrap();
        assert!(end.latitude > ORIGIN.latitude);
        assert_almost_eq(end.longitude, ORIGIN.longitude, 1e-4);
    }

    #[test]
    fn frames_can_be_re_anchored() {
        let equator = GeoPoint::new(0.0, 0.0);
        let end = LocalFrame::new(equator).to_geographic(0.0, 111_120.0).unwrap();
        assert_almost_eq(end.latitude, 1.0, 1e-9);
    }
}
