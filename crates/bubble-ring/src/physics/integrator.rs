//! Advancing the ring by one time-step.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::{vector::Vector, PhysicsState, Point};

/// Walls around the ring.
///
/// The walls form a rectangle centered on the origin. A point is drawn as a disc of radius `point_radius`, so its center is kept at least that far inside
/// the walls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    /// Half of the width of the rectangle.
    pub half_width: f64,
    /// Half of the height of the rectangle.
    pub half_height: f64,
    /// The rendered radius of a point.
    pub point_radius: f64,
}

impl Boundary {
    /// The rendered radius of a point in the reference frame.
    pub const DEFAULT_POINT_RADIUS: f64 = 5.0;

    /// Creates walls at the edges of a frame of the given size.
    #[must_use]
    pub const fn for_canvas(width: f64, height: f64) -> Self {
        Self {
            half_width: width / 2.0,
            half_height: height / 2.0,
            point_radius: Self::DEFAULT_POINT_RADIUS,
        }
    }

    /// Changes the rendered radius of a point.
    #[must_use]
    pub const fn with_point_radius(mut self, point_radius: f64) -> Self {
        self.point_radius = point_radius;
        self
    }

    /// Checks that the walls leave room for a point.
    ///
    /// # Errors
    ///
    /// - If any value is not finite.
    /// - If the point radius is negative.
    /// - If either half extent is not larger than the point radius.
    pub fn validate(&self) -> Result<(), String> {
        if ![self.half_width, self.half_height, self.point_radius].iter().all(|x| x.is_finite()) {
            return Err(format!("Boundary values must be finite, got {self:?}"));
        }
        if self.point_radius < 0.0 {
            return Err(format!("Point radius must be non-negative, got {}", self.point_radius));
        }
        if self.half_width <= self.point_radius || self.half_height <= self.point_radius {
            return Err(format!(
                "Boundary half extents ({}, {}) must exceed the point radius {}",
                self.half_width, self.half_height, self.point_radius
            ));
        }
        Ok(())
    }

    /// Keeps a point inside the walls.
    ///
    /// Each axis is checked on its own. If the point is past a wall on that axis, it is moved back onto the wall (inset by the point radius) and its
    /// velocity along that axis is reversed. A point past a corner is reflected on both axes.
    pub fn resolve(&self, point: &mut Point) {
        debug_assert!(self.validate().is_ok(), "Walls leave no room for a point: {self:?}");
        let limits = [self.half_width - self.point_radius, self.half_height - self.point_radius];
        let mut position = *point.position();
        let mut velocity = *point.velocity();

        for ((p, v), limit) in position.iter_mut().zip(velocity.iter_mut()).zip(limits) {
            if *p > limit {
                *p = limit;
                *v = -*v;
            } else if *p < -limit {
                *p = -limit;
                *v = -*v;
            }
        }

        point.set_position(position);
        point.set_velocity(velocity);
    }
}

/// Semi-implicit Euler integration with a fixed time-step.
///
/// Velocities are updated from the forces first, and positions are then updated from the new velocities. All points are moved with forces computed
/// beforehand from the same snapshot, so the order in which points are moved does not matter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Integrator {
    /// The mass of every point.
    m: f64,
    /// The time-step.
    dt: f64,
    /// Optional walls to keep the points inside.
    boundary: Option<Boundary>,
}

impl Integrator {
    /// Creates a new `Integrator`.
    ///
    /// # Arguments
    ///
    /// - `m`: The mass of every point.
    /// - `dt`: The time-step.
    /// - `boundary`: Optional walls.
    #[must_use]
    pub const fn new(m: f64, dt: f64, boundary: Option<Boundary>) -> Self {
        Self { m, dt, boundary }
    }

    /// Returns the time-step.
    #[must_use]
    pub const fn dt(&self) -> f64 {
        self.dt
    }

    /// Returns the mass of every point.
    #[must_use]
    pub const fn m(&self) -> f64 {
        self.m
    }

    /// Returns the walls, if any.
    #[must_use]
    pub const fn boundary(&self) -> Option<&Boundary> {
        self.boundary.as_ref()
    }

    /// Advances every point by one time-step.
    ///
    /// # Arguments
    ///
    /// - `state`: The points to move.
    /// - `forces`: The net force on each point, in ring order, computed from `state` before this call.
    pub fn step(&self, state: &mut PhysicsState, forces: &[Vector]) {
        debug_assert_eq!(state.len(), forces.len(), "One force is needed per point");
        for (p, f) in state.points_mut().iter_mut().zip(forces) {
            self.advance(p, f);
        }
    }

    /// Parallel version of [`step`](Self::step).
    pub fn par_step(&self, state: &mut PhysicsState, forces: &[Vector]) {
        debug_assert_eq!(state.len(), forces.len(), "One force is needed per point");
        state
            .points_mut()
            .par_iter_mut()
            .zip(forces.par_iter())
            .for_each(|(p, f)| self.advance(p, f));
    }

    /// Moves a single point and keeps it inside the walls.
    fn advance(&self, point: &mut Point, force: &Vector) {
        point.apply_force(force, self.m, self.dt);
        if let Some(boundary) = &self.boundary {
            boundary.resolve(point);
        }
    }
}
