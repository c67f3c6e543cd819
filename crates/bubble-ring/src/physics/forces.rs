//! The forces acting on every point of the ring.

use rayon::prelude::*;

use super::{
    vector::{self, Vector},
    PhysicsState, Point, SpringNetwork,
};

/// Computes the net force on every point from the four springs that touch it and from the centroid-restoring spring.
///
/// The centroid-restoring spring pulls each point toward a distance `radius` from the current centroid of the ring, with stiffness `l`. Since the reference
/// is the centroid rather than a fixed origin, the ring as a whole is free to drift.
///
/// Forces are computed for all points from one consistent snapshot of the `PhysicsState`; nothing here mutates it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceModel {
    /// The stiffness of the centroid-restoring spring.
    l: f64,
    /// The distance from the centroid at which the centroid-restoring spring is at rest.
    radius: f64,
}

impl ForceModel {
    /// Creates a new `ForceModel`.
    ///
    /// # Arguments
    ///
    /// - `l`: The stiffness of the centroid-restoring spring.
    /// - `radius`: The nominal radius of the ring.
    #[must_use]
    pub const fn new(l: f64, radius: f64) -> Self {
        Self { l, radius }
    }

    /// Returns the stiffness of the centroid-restoring spring.
    #[must_use]
    pub const fn l(&self) -> f64 {
        self.l
    }

    /// Returns the nominal radius of the ring.
    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the net force on every point, in ring order.
    #[must_use]
    pub fn compute(&self, state: &PhysicsState, network: &SpringNetwork) -> Vec<Vector> {
        let points = state.points();
        let centroid = state.centroid();
        (0..points.len())
            .map(|i| self.net_force(i, points, network, &centroid))
            .collect()
    }

    /// Parallel version of [`compute`](Self::compute).
    #[must_use]
    pub fn par_compute(&self, state: &PhysicsState, network: &SpringNetwork) -> Vec<Vector> {
        let points = state.points();
        let centroid = state.centroid();
        (0..points.len())
            .into_par_iter()
            .map(|i| self.net_force(i, points, network, &centroid))
            .collect()
    }

    /// The net force on the point at index `i`.
    fn net_force(&self, i: usize, points: &[Point], network: &SpringNetwork, centroid: &Vector) -> Vector {
        let spring_force = network.springs_of(i).fold(vector::ZERO, |acc, s| vector::add(&acc, &s.force_on(i, points)));
        vector::add(&spring_force, &self.centroid_force(&points[i], centroid))
    }

    /// Returns the force of the centroid-restoring spring on a single point.
    ///
    /// The force is `l * (d - radius)` along the direction from the point to the centroid, where `d` is the distance between them. A point sitting exactly
    /// on the centroid feels no force.
    #[must_use]
    pub fn centroid_force(&self, point: &Point, centroid: &Vector) -> Vector {
        let c = vector::between(point.position(), centroid);
        let (unit, d) = vector::unit_and_magnitude(&c);
        vector::scale(&unit, self.l * (d - self.radius))
    }

    /// Returns the potential energy of the whole ring.
    ///
    /// Both springs of a link pull on both neighbors, so every spring's energy counts in full. The centroid-restoring energy is measured against the
    /// current centroid.
    #[must_use]
    pub fn potential_energy(&self, state: &PhysicsState, network: &SpringNetwork) -> f64 {
        let points = state.points();
        let centroid = state.centroid();

        let springs = network.springs().iter().map(|s| s.potential_energy(points)).sum::<f64>();
        let centering = points
            .iter()
            .map(|p| {
                let d = vector::magnitude(&vector::between(p.position(), &centroid));
                0.5 * self.l * (d - self.radius).powi(2)
            })
            .sum::<f64>();

        springs + centering
    }
}
