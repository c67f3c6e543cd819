//! Generating the initial, irregular ring.

use core::f64::consts::{PI, TAU};

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    physics::vector::{self, Vector},
    Jitter, Perturbation, SimulationConfig,
};

/// A contiguous range of ring angles over which points are pushed outward.
///
/// A point at ring angle `θ` inside the window is pushed away from the center by `max_offset * sin(u * π * frequency)`, where `u` runs from 0 at
/// `start_angle` to 1 at `end_angle`. With a frequency of 1 the bulge is a single smooth hump that vanishes at both edges.
///
/// Membership is measured around the circle, so a window may extend past `2π` and wrap around to the first points of the ring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngularWindow {
    /// The angle at which the window starts, in radians.
    pub start_angle: f64,
    /// The angle at which the window ends, in radians. Must be greater than `start_angle`.
    pub end_angle: f64,
    /// The largest outward offset.
    pub max_offset: f64,
    /// The number of half-periods of the sine profile across the window.
    pub frequency: f64,
}

impl AngularWindow {
    /// Creates a new `AngularWindow`.
    #[must_use]
    pub const fn new(start_angle: f64, end_angle: f64, max_offset: f64, frequency: f64) -> Self {
        Self {
            start_angle,
            end_angle,
            max_offset,
            frequency,
        }
    }

    /// Returns the angular span of the window.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Checks that the window is well-formed.
    ///
    /// # Errors
    ///
    /// - If any value is not finite.
    /// - If the window is empty or spans more than a full turn.
    pub fn validate(&self) -> Result<(), String> {
        if ![self.start_angle, self.end_angle, self.max_offset, self.frequency].iter().all(|x| x.is_finite()) {
            return Err(format!("Angular window values must be finite, got {self:?}"));
        }
        if self.span() <= 0.0 || self.span() > TAU {
            return Err(format!(
                "Angular window must satisfy start < end <= start + 2π, got [{}, {})",
                self.start_angle, self.end_angle
            ));
        }
        Ok(())
    }

    /// Returns the outward offset of a point at ring angle `theta`, or `None` if the point is outside the window.
    #[must_use]
    pub fn offset_at(&self, theta: f64) -> Option<f64> {
        let span = self.span();
        let relative = (theta - self.start_angle).rem_euclid(TAU);
        (relative < span).then(|| {
            let u = relative / span;
            self.max_offset * (u * PI * self.frequency).sin()
        })
    }

    /// Pushes a point at ring angle `theta` outward, if it lies in the window.
    #[must_use]
    pub fn displace(&self, position: &Vector, theta: f64) -> Vector {
        self.offset_at(theta).map_or(*position, |offset| {
            vector::add(position, &vector::scale(&vector::from_angle(theta), offset))
        })
    }
}

/// Produces the initial positions of the points on the ring.
///
/// The `i`-th of `n` points starts on the circle of the nominal radius at angle `θ_i = 2π i / n`. It is then jittered by a small random offset (see
/// [`Jitter`]) and pushed outward by every angular window that contains `θ_i`. Windows always use the base ring angle, not the angle of the displaced
/// point.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeGenerator {
    /// The number of points.
    num_points: usize,
    /// The nominal radius.
    radius: f64,
    /// Random offsets, if any.
    jitter: Option<Jitter>,
    /// The angular windows.
    perturbation: Perturbation,
}

impl ShapeGenerator {
    /// Creates a `ShapeGenerator` from the relevant fields of the configuration.
    ///
    /// The configuration is expected to have been validated.
    #[must_use]
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            num_points: config.num_points,
            radius: config.radius,
            jitter: config.jitter,
            perturbation: config.perturbation.clone(),
        }
    }

    /// Returns the ring angle of the point at index `i`.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn angle_of(&self, i: usize) -> f64 {
        i as f64 * TAU / self.num_points as f64
    }

    /// Draws the angular windows for one ring.
    ///
    /// Fixed windows are returned as they are; random windows are drawn from `rng`.
    pub fn windows<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<AngularWindow> {
        match &self.perturbation {
            Perturbation::None => Vec::new(),
            Perturbation::Fixed { windows } => windows.clone(),
            &Perturbation::Random {
                min_count,
                max_count,
                min_span,
                max_span,
                max_offset_fraction,
                frequency,
            } => {
                let count = rng.random_range(min_count..=max_count);
                let max_offset = max_offset_fraction * self.radius;
                (0..count)
                    .map(|_| {
                        let start = rng.random_range(0.0..TAU);
                        let span = rng.random_range(min_span..=max_span);
                        let offset = rng.random_range(0.0..=max_offset);
                        AngularWindow::new(start, start + span, offset, frequency)
                    })
                    .collect()
            }
        }
    }

    /// Generates the positions of the points, in ring order.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Vector> {
        let windows = self.windows(rng);
        ftlog::debug!("Generating a ring of {} points with {} windows", self.num_points, windows.len());

        (0..self.num_points)
            .map(|i| {
                let theta = self.angle_of(i);
                let base = vector::scale(&vector::from_angle(theta), self.radius);
                let jittered = self.jitter.map_or(base, |j| self.jitter_point(&base, theta, &j, rng));
                windows.iter().fold(jittered, |p, w| w.displace(&p, theta))
            })
            .collect()
    }

    /// Moves a point by a random offset near its slot on the ring.
    fn jitter_point<R: Rng + ?Sized>(&self, position: &Vector, theta: f64, jitter: &Jitter, rng: &mut R) -> Vector {
        let (max_angle, max_radius) = jitter.bounds(self.num_points, self.radius);
        let offset_angle = draw_below(max_angle, rng);
        let offset_radius = draw_below(max_radius, rng);
        vector::add(position, &vector::scale(&vector::from_angle(theta + offset_angle), offset_radius))
    }
}

/// Draws uniformly from `[0, bound)`, or returns zero if the range is empty.
fn draw_below<R: Rng + ?Sized>(bound: f64, rng: &mut R) -> f64 {
    if bound > 0.0 {
        rng.random_range(0.0..bound)
    } else {
        0.0
    }
}
