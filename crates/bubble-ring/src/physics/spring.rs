//! The springs between neighboring points.

use super::{
    vector::{self, Vector},
    Point,
};

/// A spring in the ring, defined by its:
///
/// - `start`: the index of the `Point` the `Spring` is anchored at,
/// - `end`: the index of the neighbor it reaches to,
/// - spring constant `k`, i.e. the stiffness of the `Spring`,
/// - rest length `l0`, i.e. the length at which the `Spring` exerts no force.
///
/// A `Spring` pulls on both of its ends with equal and opposite forces. The link between two neighbors is made of two `Spring`s, one anchored at each side,
/// so every `Point` of the ring is touched by four `Spring`s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    /// The index of the `Point` this `Spring` is anchored at.
    start: usize,
    /// The index of the other end of the `Spring`.
    end: usize,
    /// The spring constant.
    k: f64,
    /// The rest length.
    l0: f64,
}

impl Spring {
    /// Creates a new `Spring`.
    #[must_use]
    pub const fn new(start: usize, end: usize, k: f64, l0: f64) -> Self {
        Self { start, end, k, l0 }
    }

    /// Returns the index of the `Point` this `Spring` is anchored at.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Returns the index of the other end of the `Spring`.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Returns the indices of both ends of the `Spring`.
    #[must_use]
    pub const fn endpoints(&self) -> (usize, usize) {
        (self.start, self.end)
    }

    /// Returns the spring constant.
    #[must_use]
    pub const fn k(&self) -> f64 {
        self.k
    }

    /// Returns the rest length.
    #[must_use]
    pub const fn l0(&self) -> f64 {
        self.l0
    }

    /// Returns the current length of the `Spring`.
    #[must_use]
    pub fn length(&self, points: &[Point]) -> f64 {
        vector::magnitude(&points[self.start].vector_to(&points[self.end]))
    }

    /// Returns the force this `Spring` exerts on its `start` point.
    ///
    /// The force is `k * (l - l0)` along the direction from `start` to `end`, so a stretched `Spring` pulls the point toward its neighbor and a compressed
    /// one pushes it away. If both ends coincide, the force is zero.
    #[must_use]
    pub fn force(&self, points: &[Point]) -> Vector {
        let d = points[self.start].vector_to(&points[self.end]);
        let (unit, l) = vector::unit_and_magnitude(&d);
        vector::scale(&unit, self.k * (l - self.l0))
    }

    /// Returns the force this `Spring` exerts on the point at index `i`.
    ///
    /// The `end` point feels the opposite of the force on the `start` point. A point that is neither end feels nothing.
    #[must_use]
    pub fn force_on(&self, i: usize, points: &[Point]) -> Vector {
        if i == self.start {
            self.force(points)
        } else if i == self.end {
            vector::scale(&self.force(points), -1.0)
        } else {
            vector::ZERO
        }
    }

    /// Returns the potential energy stored in the `Spring`.
    #[must_use]
    pub fn potential_energy(&self, points: &[Point]) -> f64 {
        0.5 * self.k * (self.length(points) - self.l0).powi(2)
    }
}
