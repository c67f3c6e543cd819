//! Points on the ring.

use super::vector::{self, Vector};

/// A `Point` on the ring, defined by its:
///
/// - `position`: where the `Point` is, relative to the center of the frame.
/// - `velocity`: how fast the `Point` is moving.
///
/// A `Point` is identified by its index in the ring. All `Point`s share the same mass, so the mass is passed in when the `Point` is moved rather than stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// The position of the `Point`.
    position: Vector,
    /// The velocity of the `Point`.
    velocity: Vector,
}

impl Point {
    /// Creates a `Point` at rest at the given position.
    #[must_use]
    pub const fn at_rest(position: Vector) -> Self {
        Self {
            position,
            velocity: vector::ZERO,
        }
    }

    /// Creates a `Point` with the given position and velocity.
    #[must_use]
    pub const fn new(position: Vector, velocity: Vector) -> Self {
        Self { position, velocity }
    }

    /// Returns the position of the `Point`.
    #[must_use]
    pub const fn position(&self) -> &Vector {
        &self.position
    }

    /// Returns the velocity of the `Point`.
    #[must_use]
    pub const fn velocity(&self) -> &Vector {
        &self.velocity
    }

    /// Sets the position of the `Point`.
    ///
    /// It is the user's responsibility to ensure that the `position` has no `NaN` or infinite values.
    pub fn set_position(&mut self, position: Vector) {
        self.position = position;
    }

    /// Sets the velocity of the `Point`.
    pub fn set_velocity(&mut self, velocity: Vector) {
        self.velocity = velocity;
    }

    /// Returns the vector from this `Point` to another.
    #[must_use]
    pub fn vector_to(&self, other: &Self) -> Vector {
        vector::between(&self.position, &other.position)
    }

    /// Applies a force to the `Point` for one time-step, using semi-implicit Euler.
    ///
    /// The velocity is updated first and the new velocity then moves the position.
    ///
    /// # Arguments
    ///
    /// - `force`: The net force on the `Point`.
    /// - `m`: The mass of the `Point`.
    /// - `dt`: The time-step.
    pub fn apply_force(&mut self, force: &Vector, m: f64, dt: f64) {
        for ((p, v), &f) in self.position.iter_mut().zip(self.velocity.iter_mut()).zip(force.iter()) {
            *v += (f / m) * dt;
            *p += *v * dt;
        }
    }

    /// Returns the kinetic energy of the `Point`.
    #[must_use]
    pub fn kinetic_energy(&self, m: f64) -> f64 {
        0.5 * m * self.velocity.iter().map(|v| v.powi(2)).sum::<f64>()
    }
}
