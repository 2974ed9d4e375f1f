use geoconv::great_circle::{self, distance_meters};
use geoconv::{GeoPoint, LocalFrame, ORIGIN};

fn assert_almost_eq(a: f64, b: f64, tolerance: f64) {
    let diff = (b - a).abs();
    assert!(diff < tolerance, "{a} != {b} (difference {diff})");
}

#[test]
fn default_frame_reference_conversion() {
    // Recorded double-precision output for the (3, 2) offset from ORIGIN.
    let end = LocalFrame::default().to_geographic(3.0, 2.0).unwrap();
    assert_almost_eq(end.latitude, 59.39455425853384, 1e-6);
    assert_almost_eq(end.longitude, 24.67185020027226, 1e-6);

    let range = distance_meters(&ORIGIN, &end);
    assert!((range - 13.0f64.sqrt()).abs() < 0.5);
}

#[test]
fn zero_offset_fails() {
    assert!(LocalFrame::default().to_geographic(0.0, 0.0).is_err());
}

#[test]
fn overridden_origin_matches_default_math() {
    // A frame re-anchored at ORIGIN behaves exactly like the default frame.
    let frame = LocalFrame::new(GeoPoint::new(59.39453626, 24.67179717));
    let a = frame.to_geographic(3.0, 2.0).unwrap();
    let b = LocalFrame::default().to_geographic(3.0, 2.0).unwrap();
    assert_eq!(a, b);
}

#[test]
fn course_between_converted_points() {
    let frame = LocalFrame::default();
    let north = frame.to_geographic(0.0, 50.0).unwrap();
    let bearing = great_circle::initial_bearing(&ORIGIN, &north).unwrap();
    assert!(
        bearing < 1.0 || bearing > 359.0,
        "northward offset should bear roughly north, got {bearing}"
    );
}
