//! Driving the simulation from a frame loop.

use rand::prelude::*;

use crate::{
    physics::{ForceModel, Integrator, PhysicsState, SpringNetwork, Vector},
    ShapeGenerator, SimulationConfig,
};

/// Whether the simulation advances on every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    /// Ticks leave the ring untouched.
    #[default]
    Stopped,
    /// Every tick advances the ring by one time-step.
    Running,
}

/// Owns the ring and advances it, one tick per frame.
///
/// The controller is a two-state machine driven by [`toggle`](Self::toggle):
///
/// - `Stopped` → `Running`: a fresh irregular ring is generated and the simulation starts.
/// - `Running` → `Stopped`: the simulation pauses where it is.
///
/// A renderer calls [`tick`](Self::tick) once per frame and reads the returned [`PhysicsState`].
///
/// While running, the controller logs the kinetic, potential and total energy of the ring after each step.
#[derive(Debug, Clone)]
pub struct SimulationController {
    /// The validated configuration.
    config: SimulationConfig,
    /// The source of randomness for the initial shapes.
    rng: StdRng,
    /// Produces the initial positions on every reset.
    generator: ShapeGenerator,
    /// The springs between neighbors.
    network: SpringNetwork,
    /// Computes the forces on every tick.
    force_model: ForceModel,
    /// Moves the points on every tick.
    integrator: Integrator,
    /// The points.
    state: PhysicsState,
    /// Whether ticks advance the simulation.
    run_state: RunState,
    /// The kinetic, potential and total energy after each step.
    logs: Vec<[f64; 3]>,
}

impl SimulationController {
    /// Creates a stopped simulation with a freshly generated ring.
    ///
    /// # Arguments
    ///
    /// - `config`: The constants of the simulation.
    /// - `seed`: The seed for the shape generation. If `None`, the seed is taken from the operating system.
    ///
    /// # Errors
    ///
    /// - If the configuration is malformed. See [`SimulationConfig::validate`].
    pub fn new(config: SimulationConfig, seed: Option<u64>) -> Result<Self, String> {
        config.validate()?;
        ftlog::info!(
            "Creating a simulation of {} points with radius {} and seed {seed:?}",
            config.num_points,
            config.radius
        );

        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let generator = ShapeGenerator::from_config(&config);
        let network = SpringNetwork::ring(config.num_points, config.spring_stiffness, config.radius);
        let force_model = ForceModel::new(config.centroid_stiffness, config.radius);
        let integrator = Integrator::new(config.mass, config.dt, config.boundary);

        let mut sim = Self {
            config,
            rng,
            generator,
            network,
            force_model,
            integrator,
            state: PhysicsState::at_rest(Vec::new()),
            run_state: RunState::Stopped,
            logs: Vec::new(),
        };
        sim.reset(RunState::Stopped);

        Ok(sim)
    }

    /// Discards the current ring, generates a new one at rest and sets the run state.
    ///
    /// The springs depend only on the configuration, so the same network is reused. The energy logs are cleared.
    pub fn reset(&mut self, run_state: RunState) {
        let positions = self.generator.generate(&mut self.rng);
        self.state = PhysicsState::at_rest(positions);
        self.run_state = run_state;
        self.logs.clear();
        ftlog::info!("Reset the ring of {} points, now {run_state:?}", self.state.len());
    }

    /// Starts a fresh simulation if stopped, and pauses it if running.
    ///
    /// Returns the new run state.
    pub fn toggle(&mut self) -> RunState {
        match self.run_state {
            RunState::Stopped => self.reset(RunState::Running),
            RunState::Running => {
                self.run_state = RunState::Stopped;
                ftlog::info!("Stopped the simulation");
            }
        }
        self.run_state
    }

    /// Advances the simulation by one time-step if it is running.
    ///
    /// All forces are computed from the current positions before any point is moved. Returns the state for rendering.
    pub fn tick(&mut self) -> &PhysicsState {
        if self.is_running() {
            let forces = self.force_model.compute(&self.state, &self.network);
            self.integrator.step(&mut self.state, &forces);
            self.update_logs();
        }
        &self.state
    }

    /// Parallel version of [`tick`](Self::tick).
    pub fn par_tick(&mut self) -> &PhysicsState {
        if self.is_running() {
            let forces = self.force_model.par_compute(&self.state, &self.network);
            self.integrator.par_step(&mut self.state, &forces);
            self.update_logs();
        }
        &self.state
    }

    /// Runs the given number of ticks.
    pub fn evolve(&mut self, steps: usize) -> &PhysicsState {
        ftlog::debug!("Evolving for {steps} steps while {:?}", self.run_state);
        for _ in 0..steps {
            self.tick();
        }
        &self.state
    }

    /// Parallel version of [`evolve`](Self::evolve).
    pub fn par_evolve(&mut self, steps: usize) -> &PhysicsState {
        ftlog::debug!("Evolving in parallel for {steps} steps while {:?}", self.run_state);
        for _ in 0..steps {
            self.par_tick();
        }
        &self.state
    }

    /// Appends the current energies to the `logs`.
    fn update_logs(&mut self) {
        let kinetic_energy = self.kinetic_energy();
        let potential_energy = self.potential_energy();
        self.logs.push([kinetic_energy, potential_energy, kinetic_energy + potential_energy]);
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Returns the points.
    #[must_use]
    pub const fn state(&self) -> &PhysicsState {
        &self.state
    }

    /// Returns the springs.
    #[must_use]
    pub const fn network(&self) -> &SpringNetwork {
        &self.network
    }

    /// Returns the force model.
    #[must_use]
    pub const fn force_model(&self) -> &ForceModel {
        &self.force_model
    }

    /// Returns the integrator.
    #[must_use]
    pub const fn integrator(&self) -> &Integrator {
        &self.integrator
    }

    /// Returns the run state.
    #[must_use]
    pub const fn run_state(&self) -> RunState {
        self.run_state
    }

    /// Whether ticks advance the simulation.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    /// Returns the centroid of the ring.
    #[must_use]
    pub fn centroid(&self) -> Vector {
        self.state.centroid()
    }

    /// Returns the kinetic, potential and total energy recorded after each step since the last reset.
    #[must_use]
    pub fn logs(&self) -> &[[f64; 3]] {
        &self.logs
    }

    /// Clears the energy logs.
    pub fn clear_logs(&mut self) {
        self.logs.clear();
    }

    /// Returns the total kinetic energy of the ring.
    #[must_use]
    pub fn kinetic_energy(&self) -> f64 {
        self.state.kinetic_energy(self.config.mass)
    }

    /// Returns the total potential energy of the ring.
    #[must_use]
    pub fn potential_energy(&self) -> f64 {
        self.force_model.potential_energy(&self.state, &self.network)
    }

    /// Returns the total energy of the ring.
    #[must_use]
    pub fn total_energy(&self) -> f64 {
        self.kinetic_energy() + self.potential_energy()
    }
}
