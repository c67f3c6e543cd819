//! Arithmetic on 2D vectors stored as `[f64; 2]`.

/// A 2D vector or position.
pub type Vector = [f64; 2];

/// The zero vector.
pub const ZERO: Vector = [0.0; 2];

/// Returns `b - a`, the vector pointing from `a` to `b`.
#[must_use]
pub fn between(a: &Vector, b: &Vector) -> Vector {
    [b[0] - a[0], b[1] - a[1]]
}

/// Returns `a + b`.
#[must_use]
pub fn add(a: &Vector, b: &Vector) -> Vector {
    [a[0] + b[0], a[1] + b[1]]
}

/// Returns `v * s`.
#[must_use]
pub fn scale(v: &Vector, s: f64) -> Vector {
    [v[0] * s, v[1] * s]
}

/// Returns the Euclidean length of `v`.
#[must_use]
pub fn magnitude(v: &Vector) -> f64 {
    v[0].hypot(v[1])
}

/// Returns the unit vector along `v` and the length of `v`.
///
/// A vector of zero length has no direction, so the zero vector is returned in its place. Forces built on this direction then vanish instead of becoming
/// `NaN`.
#[must_use]
pub fn unit_and_magnitude(v: &Vector) -> (Vector, f64) {
    let mag = magnitude(v);
    if mag > f64::EPSILON {
        ([v[0] / mag, v[1] / mag], mag)
    } else {
        (ZERO, mag)
    }
}

/// Returns the unit vector at the given angle, in radians.
#[must_use]
pub fn from_angle(theta: f64) -> Vector {
    let (sin, cos) = theta.sin_cos();
    [cos, sin]
}

/// Returns the arithmetic mean of the given vectors, or the zero vector if there are none.
#[must_use]
#[expect(clippy::cast_precision_loss)]
pub fn mean<'a, I: ExactSizeIterator<Item = &'a Vector>>(vectors: I) -> Vector {
    let n = vectors.len();
    if n == 0 {
        return ZERO;
    }
    let sum = vectors.fold(ZERO, |acc, v| add(&acc, v));
    scale(&sum, 1.0 / n as f64)
}
