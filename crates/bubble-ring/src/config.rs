//! The constants of a simulation.

use core::f64::consts::{FRAC_PI_2, PI, TAU};

use serde::{Deserialize, Serialize};

pub use crate::physics::Boundary;
use crate::AngularWindow;

/// Small random offsets that break the regularity of the initial ring.
///
/// Each point is moved by a random distance in `[0, radius / radius_divisor)` along a direction that deviates from its ring angle by a random angle in
/// `[0, 2π / (n * angle_divisor))`. Larger divisors give smaller offsets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Jitter {
    /// `P`: divides the range of the angular deviation.
    pub angle_divisor: f64,
    /// `Q`: divides the range of the offset distance.
    pub radius_divisor: f64,
}

impl Jitter {
    /// Returns the exclusive upper bounds of the angular deviation and of the offset distance for a ring of `n` points with the given radius.
    ///
    /// Either bound may underflow to zero for extreme divisors, in which case that part of the offset is zero.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn bounds(&self, n: usize, radius: f64) -> (f64, f64) {
        (TAU / (n as f64 * self.angle_divisor), radius / self.radius_divisor)
    }
}

impl Default for Jitter {
    fn default() -> Self {
        Self {
            angle_divisor: 100.0,
            radius_divisor: 20.0,
        }
    }
}

/// The angular windows that bulge the initial ring outward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Perturbation {
    /// No bulges.
    None,
    /// The given windows, applied in order.
    Fixed {
        /// The windows.
        windows: Vec<AngularWindow>,
    },
    /// A random number of windows in `[min_count, max_count]`, drawn anew on every reset.
    ///
    /// Each window starts at a random angle in `[0, 2π)`, spans a random angle in `[min_span, max_span]` (wrapping past `2π` if needed) and has a random
    /// peak offset in `[0, max_offset_fraction * radius]`.
    Random {
        /// The smallest number of windows.
        min_count: usize,
        /// The largest number of windows.
        max_count: usize,
        /// The smallest angular span of a window.
        min_span: f64,
        /// The largest angular span of a window.
        max_span: f64,
        /// The largest peak offset, as a fraction of the nominal radius.
        max_offset_fraction: f64,
        /// The number of half-periods of the sine profile across each window.
        frequency: f64,
    },
}

impl Perturbation {
    /// A single window over the upper-left quarter of the ring, bulging by up to 50 units.
    #[must_use]
    pub fn quarter_bulge() -> Self {
        Self::Fixed {
            windows: vec![AngularWindow::new(FRAC_PI_2, PI, 50.0, 1.0)],
        }
    }

    /// Between 2 and 6 random windows, each spanning between an eighth and a half of a turn.
    #[must_use]
    pub const fn random() -> Self {
        Self::Random {
            min_count: 2,
            max_count: 6,
            min_span: TAU / 8.0,
            max_span: TAU / 2.0,
            max_offset_fraction: 0.25,
            frequency: 1.0,
        }
    }

    /// Checks that the windows are well-formed.
    ///
    /// # Errors
    ///
    /// - If a fixed window is malformed.
    /// - If the ranges of random windows are empty, not finite or wider than a full turn.
    pub fn validate(&self) -> Result<(), String> {
        match self {
            Self::None => Ok(()),
            Self::Fixed { windows } => windows.iter().try_for_each(AngularWindow::validate),
            &Self::Random {
                min_count,
                max_count,
                min_span,
                max_span,
                max_offset_fraction,
                frequency,
            } => {
                if min_count > max_count {
                    return Err(format!("Window count range is empty: [{min_count}, {max_count}]"));
                }
                if ![min_span, max_span, max_offset_fraction, frequency].iter().all(|x| x.is_finite()) {
                    return Err(format!("Random window parameters must be finite, got {self:?}"));
                }
                if min_span <= 0.0 || min_span > max_span || max_span > TAU {
                    return Err(format!("Window span range must satisfy 0 < min <= max <= 2π, got [{min_span}, {max_span}]"));
                }
                if max_offset_fraction < 0.0 {
                    return Err(format!("Maximum offset fraction must be non-negative, got {max_offset_fraction}"));
                }
                Ok(())
            }
        }
    }
}

/// The constants of a simulation.
///
/// The defaults describe a ring of 200 points in an 800x600 frame, with a nominal radius of a quarter of the smaller side, a little jitter and one bulge.
///
/// | field                | symbol | default    |
/// |----------------------|--------|------------|
/// | `num_points`         | `N`    | 200        |
/// | `mass`               | `m`    | 0.1        |
/// | `spring_stiffness`   | `k`    | 0.01       |
/// | `centroid_stiffness` | `l`    | 0.001      |
/// | `radius`             | `R`    | 150        |
/// | `dt`                 |        | 0.1        |
/// | `jitter`             | `P, Q` | 100, 20    |
#[must_use]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// The number of points on the ring.
    pub num_points: usize,
    /// The mass of every point.
    pub mass: f64,
    /// The stiffness of the springs between neighbors.
    pub spring_stiffness: f64,
    /// The stiffness of the spring that keeps every point at `radius` from the centroid.
    pub centroid_stiffness: f64,
    /// The nominal radius of the ring.
    pub radius: f64,
    /// The time-step.
    pub dt: f64,
    /// Random offsets of the initial points, if any.
    pub jitter: Option<Jitter>,
    /// The angular windows that bulge the initial ring.
    pub perturbation: Perturbation,
    /// Walls around the ring, if any.
    pub boundary: Option<Boundary>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::for_canvas(800.0, 600.0)
    }
}

impl SimulationConfig {
    /// The default configuration for a frame of the given size, with a nominal radius of a quarter of the smaller side.
    ///
    /// No walls are placed; see [`with_boundary`](Self::with_boundary) and [`Boundary::for_canvas`].
    pub fn for_canvas(width: f64, height: f64) -> Self {
        Self {
            num_points: 200,
            mass: 0.1,
            spring_stiffness: 0.01,
            centroid_stiffness: 0.001,
            radius: width.min(height) / 4.0,
            dt: 0.1,
            jitter: Some(Jitter::default()),
            perturbation: Perturbation::quarter_bulge(),
            boundary: None,
        }
    }

    /// A perfectly regular ring: no jitter and no bulges.
    pub fn regular(num_points: usize, radius: f64) -> Self {
        Self::default()
            .with_num_points(num_points)
            .with_radius(radius)
            .with_jitter(None)
            .with_perturbation(Perturbation::None)
    }

    /// Changes the number of points.
    pub fn with_num_points(mut self, num_points: usize) -> Self {
        self.num_points = num_points;
        self
    }

    /// Changes the mass of every point.
    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    /// Changes the stiffness of the springs between neighbors.
    pub fn with_spring_stiffness(mut self, k: f64) -> Self {
        self.spring_stiffness = k;
        self
    }

    /// Changes the stiffness of the centroid-restoring spring.
    pub fn with_centroid_stiffness(mut self, l: f64) -> Self {
        self.centroid_stiffness = l;
        self
    }

    /// Changes the nominal radius.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Changes the time-step.
    pub fn with_dt(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    /// Changes the jitter. `None` disables it.
    pub fn with_jitter(mut self, jitter: Option<Jitter>) -> Self {
        self.jitter = jitter;
        self
    }

    /// Changes the angular windows.
    pub fn with_perturbation(mut self, perturbation: Perturbation) -> Self {
        self.perturbation = perturbation;
        self
    }

    /// Changes the walls. `None` removes them.
    pub fn with_boundary(mut self, boundary: Option<Boundary>) -> Self {
        self.boundary = boundary;
        self
    }

    /// Checks that the configuration describes a physically meaningful ring.
    ///
    /// # Errors
    ///
    /// - If there are fewer than 3 points.
    /// - If the mass, radius or time-step is not finite and positive.
    /// - If a stiffness is negative or not finite.
    /// - If a jitter divisor is not finite and positive.
    /// - If the angular windows or the walls are malformed.
    pub fn validate(&self) -> Result<(), String> {
        if self.num_points < 3 {
            return Err(format!("A ring needs at least 3 points, got {}", self.num_points));
        }

        for (name, value) in [("Mass", self.mass), ("Radius", self.radius), ("Time-step", self.dt)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{name} must be finite and positive, got {value}"));
            }
        }

        for (name, value) in [("Spring stiffness", self.spring_stiffness), ("Centroid stiffness", self.centroid_stiffness)] {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{name} must be finite and non-negative, got {value}"));
            }
        }

        if let Some(jitter) = &self.jitter {
            for (name, value) in [("angle", jitter.angle_divisor), ("radius", jitter.radius_divisor)] {
                if !value.is_finite() || value <= 0.0 {
                    return Err(format!("Jitter {name} divisor must be finite and positive, got {value}"));
                }
            }
            let (max_angle, max_radius) = jitter.bounds(self.num_points, self.radius);
            if !max_angle.is_finite() || !max_radius.is_finite() {
                return Err(format!("Jitter divisors {jitter:?} are too small for {} points of radius {}", self.num_points, self.radius));
            }
        }

        self.perturbation.validate()?;
        if let Perturbation::Random { max_offset_fraction, .. } = self.perturbation {
            if !(max_offset_fraction * self.radius).is_finite() {
                return Err(format!("Maximum window offset {max_offset_fraction} * {} overflows", self.radius));
            }
        }

        if let Some(boundary) = &self.boundary {
            boundary.validate()?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::{Boundary, Jitter, Perturbation, SimulationConfig};
    use crate::AngularWindow;

    #[test]
    fn defaults() -> Result<(), String> {
        let config = SimulationConfig::default();
        config.validate()?;
        assert_eq!(config.num_points, 200);
        assert_eq!(config.radius, 150.0);
        assert_eq!(config.boundary, None);
        Ok(())
    }

    #[test_case(SimulationConfig::default().with_num_points(2); "too few points")]
    #[test_case(SimulationConfig::default().with_mass(-0.1); "negative mass")]
    #[test_case(SimulationConfig::default().with_mass(0.0); "zero mass")]
    #[test_case(SimulationConfig::default().with_spring_stiffness(-1.0); "negative k")]
    #[test_case(SimulationConfig::default().with_centroid_stiffness(f64::NAN); "nan l")]
    #[test_case(SimulationConfig::default().with_radius(0.0); "zero radius")]
    #[test_case(SimulationConfig::default().with_dt(f64::INFINITY); "infinite dt")]
    #[test_case(SimulationConfig::default().with_jitter(Some(Jitter { angle_divisor: 0.0, radius_divisor: 10.0 })); "zero P")]
    #[test_case(SimulationConfig::default().with_jitter(Some(Jitter { angle_divisor: 10.0, radius_divisor: -1.0 })); "negative Q")]
    #[test_case(SimulationConfig::default().with_jitter(Some(Jitter { angle_divisor: 1e-320, radius_divisor: 10.0 })); "vanishing P")]
    #[test_case(SimulationConfig::default().with_radius(1e300).with_jitter(Some(Jitter { angle_divisor: 10.0, radius_divisor: 1e-300 })); "vanishing Q")]
    #[test_case(SimulationConfig::default().with_perturbation(Perturbation::Fixed { windows: vec![AngularWindow::new(1.0, 1.0, 5.0, 1.0)] }); "empty window")]
    #[test_case(SimulationConfig::default().with_perturbation(Perturbation::Random { min_count: 3, max_count: 2, min_span: 0.5, max_span: 1.0, max_offset_fraction: 0.1, frequency: 1.0 }); "empty count range")]
    #[test_case(SimulationConfig::default().with_perturbation(Perturbation::Random { min_count: 1, max_count: 2, min_span: 0.0, max_span: 1.0, max_offset_fraction: 0.1, frequency: 1.0 }); "zero span")]
    #[test_case(SimulationConfig::default().with_boundary(Some(Boundary::for_canvas(6.0, 6.0))); "cramped walls")]
    fn rejects_malformed(config: SimulationConfig) {
        assert!(config.validate().is_err(), "{config:?}");
    }

    #[test]
    fn accepts_variants() -> Result<(), String> {
        SimulationConfig::regular(3, 1.0).validate()?;
        SimulationConfig::default()
            .with_centroid_stiffness(0.01)
            .with_spring_stiffness(0.0)
            .with_perturbation(Perturbation::random())
            .with_boundary(Some(Boundary::for_canvas(800.0, 600.0)))
            .validate()
    }

    #[test]
    fn serde_keeps_everything() -> Result<(), String> {
        let config = SimulationConfig::default()
            .with_perturbation(Perturbation::random())
            .with_boundary(Some(Boundary::for_canvas(800.0, 600.0)));
        let json = serde_json::to_string(&config).map_err(|e| e.to_string())?;
        let back: SimulationConfig = serde_json::from_str(&json).map_err(|e| e.to_string())?;
        assert_eq!(config, back);

        // Missing fields fall back to the defaults.
        let partial: SimulationConfig = serde_json::from_str(r#"{"num_points": 12}"#).map_err(|e| e.to_string())?;
        assert_eq!(partial, SimulationConfig::default().with_num_points(12));
        Ok(())
    }
}
