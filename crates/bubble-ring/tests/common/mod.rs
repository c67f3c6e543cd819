//! Helpers shared by the integration tests.

#![allow(dead_code)]

use bubble_ring::physics::Vector;

/// Asserts that two sequences of positions match, point by point, within `tolerance`.
pub fn assert_positions_near(actual: &[Vector], expected: &[Vector], tolerance: f64) {
    assert_eq!(actual.len(), expected.len(), "Number of points mismatch");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        let delta = (a[0] - e[0]).hypot(a[1] - e[1]);
        assert!(delta <= tolerance, "Point {i} is at {a:?}, expected {e:?} (delta {delta})");
    }
}

/// The largest distance of any position from the given center.
pub fn max_radius(positions: &[Vector], center: &Vector) -> f64 {
    positions
        .iter()
        .map(|p| (p[0] - center[0]).hypot(p[1] - center[1]))
        .fold(0.0, f64::max)
}
