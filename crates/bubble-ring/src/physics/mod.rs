//! The physics for the mass-spring ring.

mod forces;
mod integrator;
mod network;
mod point;
mod spring;
mod state;
pub mod vector;

pub use forces::ForceModel;
pub use integrator::{Boundary, Integrator};
pub use network::SpringNetwork;
pub use point::Point;
pub use spring::Spring;
pub use state::PhysicsState;
pub use vector::Vector;
