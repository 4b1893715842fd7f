//! Custom assertions for lamp state.

use light_gamut::{Gamut, XyPoint};
use lightmyroom::LightError;

/// Wire quantization moves a boundary point by at most one u16 step per axis.
const WIRE_TOLERANCE: f64 = 1e-4;

/// Assert that `xy` lies inside `gamut`, allowing for wire quantization
pub fn assert_in_gamut(gamut: &Gamut, xy: XyPoint) {
    let distance = xy.distance(gamut.closest_boundary_point(xy));
    assert!(
        gamut.contains(xy) || distance < WIRE_TOLERANCE,
        "({:.6}, {:.6}) lies {distance:.6} outside {gamut:?}",
        xy.x,
        xy.y
    );
}

/// Assert that an operation failed with an exhausted-retry I/O error
pub fn assert_io_error<T: std::fmt::Debug>(result: Result<T, LightError>, expected_attempts: u32) {
    match result {
        Err(LightError::Io { attempts, .. }) => assert_eq!(
            attempts, expected_attempts,
            "Expected I/O error after {expected_attempts} attempts"
        ),
        other => panic!("Expected I/O error, got {other:?}"),
    }
}
