//! Conversion between a local Cartesian frame and geographic coordinates on
//! a spherical earth.
//!
//! A [`LocalFrame`] anchors a planar frame (meters, `x` east, `y` north) at a
//! geographic origin and projects offsets onto latitude/longitude with
//! great-circle formulas. The [`great_circle`] module exposes the underlying
//! distance, course, and destination operations.
//!
//! All angles are degrees; radian conversions go through the full-precision
//! [`std::f64::consts::PI`].
//!
//! ## Use
//!
//! ```
//! use geoconv::{great_circle, LocalFrame, ORIGIN};
//!
//! # fn main() -> geoconv::errors::Result<()> {
//! let end = LocalFrame::default().to_geographic(3.0, 2.0)?;
//! let range = great_circle::distance_meters(&ORIGIN, &end);
//! assert!((range - 13.0f64.sqrt()).abs() < 0.5);
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod great_circle;

mod angle;
mod frame;
mod point;

pub use frame::LocalFrame;
pub use point::{GeoPoint, ORIGIN};

#[cfg(test)]
pub(crate) fn assert_almost_eq(a: f64, b: f64, tolerance: f64) {
    let diff = (b - a).abs();
    assert!(diff < tolerance, "{a} != {b} (difference {diff})");
}
