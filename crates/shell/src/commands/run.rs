//! Running a simulation without a renderer.

use std::path::Path;

use bubble_ring::{physics::PhysicsState, SimulationConfig, SimulationController};
use serde::Serialize;

/// A single point in a saved snapshot.
#[derive(Debug, Serialize)]
struct PointRecord {
    /// The tick after which the snapshot was taken.
    step: usize,
    /// The index of the point in the ring.
    index: usize,
    /// The position of the point.
    x: f64,
    /// The position of the point.
    y: f64,
    /// The velocity of the point.
    vx: f64,
    /// The velocity of the point.
    vy: f64,
}

/// The energies of the ring after a tick.
#[derive(Debug, Serialize)]
struct EnergyRecord {
    /// The tick.
    step: usize,
    /// Kinetic energy.
    kinetic: f64,
    /// Potential energy.
    potential: f64,
    /// Total energy.
    total: f64,
}

/// Starts a fresh ring and runs the simulation for the given number of ticks.
///
/// Two files are written to `out_dir`:
///
/// - `positions.csv`: the position and velocity of every point, before the first tick, every `save_every` ticks, and after the last tick.
/// - `energy.csv`: the kinetic, potential and total energy before the first tick and after every tick.
///
/// # Arguments
///
/// * `config` - The configuration of the simulation.
/// * `seed` - The seed for generating the initial ring.
/// * `steps` - The number of ticks to run.
/// * `save_every` - How often to save the positions.
/// * `parallel` - Whether to use the parallel tick.
/// * `out_dir` - The directory to write to. It is created if needed.
///
/// # Errors
///
/// * If `save_every` is zero.
/// * If the configuration is malformed.
/// * If the output files cannot be written.
pub fn run_simulation<P: AsRef<Path>>(
    config: SimulationConfig,
    seed: Option<u64>,
    steps: usize,
    save_every: usize,
    parallel: bool,
    out_dir: P,
) -> Result<(), String> {
    if save_every == 0 {
        return Err("Cannot save every 0 steps".to_string());
    }

    let out_dir = out_dir.as_ref();
    if !out_dir.exists() {
        std::fs::create_dir_all(out_dir).map_err(|e| format!("Failed to create output directory {}: {e}", out_dir.display()))?;
    }

    let mut sim = SimulationController::new(config, seed)?;
    sim.toggle();
    let initial = EnergyRecord {
        step: 0,
        kinetic: sim.kinetic_energy(),
        potential: sim.potential_energy(),
        total: sim.total_energy(),
    };

    let positions_path = out_dir.join("positions.csv");
    let mut positions = csv::Writer::from_path(&positions_path).map_err(|e| format!("Failed to create {}: {e}", positions_path.display()))?;
    write_snapshot(&mut positions, 0, sim.state())?;

    for step in 1..=steps {
        let state = if parallel { sim.par_tick() } else { sim.tick() };
        if step % save_every == 0 || step == steps {
            ftlog::info!("Saving step {step}/{steps}");
            write_snapshot(&mut positions, step, state)?;
        }
    }
    positions.flush().map_err(|e| format!("Failed to flush {}: {e}", positions_path.display()))?;

    let energy_path = out_dir.join("energy.csv");
    let mut energy = csv::Writer::from_path(&energy_path).map_err(|e| format!("Failed to create {}: {e}", energy_path.display()))?;
    energy.serialize(initial).map_err(|e| e.to_string())?;
    for (i, &[kinetic, potential, total]) in sim.logs().iter().enumerate() {
        let record = EnergyRecord {
            step: i + 1,
            kinetic,
            potential,
            total,
        };
        energy.serialize(record).map_err(|e| e.to_string())?;
    }
    energy.flush().map_err(|e| format!("Failed to flush {}: {e}", energy_path.display()))?;

    ftlog::info!("Finished {steps} steps, final total energy {}", sim.total_energy());

    Ok(())
}

/// Writes one row per point.
fn write_snapshot<W: std::io::Write>(writer: &mut csv::Writer<W>, step: usize, state: &PhysicsState) -> Result<(), String> {
    for (index, p) in state.points().iter().enumerate() {
        let &[x, y] = p.position();
        let &[vx, vy] = p.velocity();
        let record = PointRecord {
            step,
            index,
            x,
            y,
            vx,
            vy,
        };
        writer.serialize(record).map_err(|e| format!("Failed to write step {step}: {e}"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use bubble_ring::SimulationConfig;
    use tempdir::TempDir;

    use super::run_simulation;

    /// Reads a CSV file, checks its header and returns the `step` column.
    fn read_steps(path: &Path, header: &[&str]) -> Result<Vec<usize>, String> {
        let mut reader = csv::Reader::from_path(path).map_err(|e| e.to_string())?;
        let found = reader.headers().map_err(|e| e.to_string())?.iter().map(String::from).collect::<Vec<_>>();
        assert_eq!(found, header);

        reader
            .records()
            .map(|r| {
                let r = r.map_err(|e| e.to_string())?;
                r[0].parse::<usize>().map_err(|e| e.to_string())
            })
            .collect()
    }

    #[test]
    fn writes_snapshots_and_energies() -> Result<(), String> {
        let n = 12;
        let tmp_dir = TempDir::new("bubble-run").map_err(|e| e.to_string())?;
        let out_dir = tmp_dir.path().join("out");

        run_simulation(SimulationConfig::regular(n, 50.0), Some(42), 7, 3, false, &out_dir)?;

        let steps = read_steps(&out_dir.join("positions.csv"), &["step", "index", "x", "y", "vx", "vy"])?;
        assert_eq!(steps.len(), 4 * n);
        let mut saved = steps.clone();
        saved.dedup();
        assert_eq!(saved, vec![0, 3, 6, 7]);
        for s in saved {
            assert_eq!(steps.iter().filter(|&&t| t == s).count(), n, "Step {s}");
        }

        let energies = read_steps(&out_dir.join("energy.csv"), &["step", "kinetic", "potential", "total"])?;
        assert_eq!(energies, (0..=7).collect::<Vec<_>>());

        Ok(())
    }

    #[test]
    fn parallel_run_writes_the_same_files() -> Result<(), String> {
        let tmp_dir = TempDir::new("bubble-run").map_err(|e| e.to_string())?;
        let config = SimulationConfig::default().with_num_points(30);

        let sequential = tmp_dir.path().join("sequential");
        let parallel = tmp_dir.path().join("parallel");
        run_simulation(config.clone(), Some(7), 20, 5, false, &sequential)?;
        run_simulation(config, Some(7), 20, 5, true, &parallel)?;

        for name in ["positions.csv", "energy.csv"] {
            let a = std::fs::read_to_string(sequential.join(name)).map_err(|e| e.to_string())?;
            let b = std::fs::read_to_string(parallel.join(name)).map_err(|e| e.to_string())?;
            assert_eq!(a, b, "{name}");
        }
        Ok(())
    }

    #[test]
    fn rejects_zero_save_interval() -> Result<(), String> {
        let tmp_dir = TempDir::new("bubble-run").map_err(|e| e.to_string())?;
        let out_dir = tmp_dir.path().join("out");

        assert!(run_simulation(SimulationConfig::default(), None, 10, 0, false, &out_dir).is_err());
        assert!(!out_dir.exists());
        Ok(())
    }
}
