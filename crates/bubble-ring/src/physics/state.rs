//! The mutable state of the ring.

use super::{
    vector::{self, Vector},
    Point,
};

/// The positions and velocities of every point on the ring.
///
/// The order of the points is fixed for the lifetime of the `PhysicsState`, so a renderer can keep per-point data (e.g. colors) in a parallel sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsState {
    /// The points, in ring order.
    points: Vec<Point>,
}

impl PhysicsState {
    /// Creates a `PhysicsState` with all points at rest at the given positions.
    #[must_use]
    pub fn at_rest(positions: Vec<Vector>) -> Self {
        Self {
            points: positions.into_iter().map(Point::at_rest).collect(),
        }
    }

    /// Creates a `PhysicsState` from the given points.
    #[must_use]
    pub const fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Returns the points.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the points as mutable.
    #[must_use]
    pub fn points_mut(&mut self) -> &mut [Point] {
        &mut self.points
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether there are no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the positions of the points, in ring order.
    #[must_use]
    pub fn positions(&self) -> Vec<Vector> {
        self.points.iter().map(|p| *p.position()).collect()
    }

    /// Returns the velocities of the points, in ring order.
    #[must_use]
    pub fn velocities(&self) -> Vec<Vector> {
        self.points.iter().map(|p| *p.velocity()).collect()
    }

    /// Returns the mean of all positions.
    #[must_use]
    pub fn centroid(&self) -> Vector {
        vector::mean(self.points.iter().map(Point::position))
    }

    /// Returns the total kinetic energy of the points, each having mass `m`.
    #[must_use]
    pub fn kinetic_energy(&self, m: f64) -> f64 {
        self.points.iter().map(|p| p.kinetic_energy(m)).sum()
    }
}
