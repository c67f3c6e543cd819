//! A closed ring of point masses connected by springs.
//!
//! The ring starts out as an irregular "bubble": a circle that has been jittered and bulged outward over a few angular windows. Under the neighbor springs
//! and a spring that pulls every point toward a fixed distance from the current centroid, the outline relaxes back toward a circle.
//!
//! ## Components
//!
//! - [`SimulationConfig`]: the constants of a simulation, with defaults matching an 800x600 reference frame.
//! - [`ShapeGenerator`]: the initial ring of positions.
//! - [`physics`]: points, springs, the force model and the semi-implicit Euler integrator.
//! - [`SimulationController`]: the Stopped/Running state machine that a renderer or input layer drives.
//!
//! ## Example
//!
//! ```
//! use bubble_ring::{SimulationConfig, SimulationController};
//!
//! let config = SimulationConfig::default().with_num_points(64);
//! let mut sim = SimulationController::new(config, Some(42))?;
//! sim.toggle();
//! for _ in 0..10 {
//!     sim.tick();
//! }
//! assert_eq!(sim.state().positions().len(), 64);
//! # Ok::<(), String>(())
//! ```

mod config;
mod controller;
pub mod physics;
mod shape;

pub use config::{Boundary, Jitter, Perturbation, SimulationConfig};
pub use controller::{RunState, SimulationController};
pub use shape::{AngularWindow, ShapeGenerator};
