//! Tests for driving whole simulations through the `SimulationController`.

use bubble_ring::{physics::Boundary, Perturbation, RunState, SimulationConfig, SimulationController};
use test_case::test_case;

mod common;

#[test_case(SimulationConfig::default(); "quarter bulge")]
#[test_case(SimulationConfig::default().with_centroid_stiffness(0.01).with_perturbation(Perturbation::random()); "random bulges")]
fn bulged_ring_stays_bounded(config: SimulationConfig) -> Result<(), String> {
    let radius = config.radius;
    let mut sim = SimulationController::new(config, Some(42))?;
    assert_eq!(sim.toggle(), RunState::Running);

    let initial_max = common::max_radius(&sim.state().positions(), &sim.centroid());
    assert!(initial_max > radius, "The ring should start out bulged");

    for _ in 0..20 {
        sim.evolve(100);
        let positions = sim.state().positions();
        assert!(positions.iter().flatten().all(|x| x.is_finite()), "Positions diverged");
        let max = common::max_radius(&positions, &sim.centroid());
        assert!(max < 4.0 * radius, "The ring blew up to radius {max}");
    }

    let logs = sim.logs();
    assert_eq!(logs.len(), 2000);
    for &[kinetic, potential, total] in logs {
        assert!(kinetic >= 0.0 && potential >= 0.0, "{kinetic}, {potential}");
        assert!((kinetic + potential - total).abs() < 1e-9);
    }

    Ok(())
}

#[test]
fn parallel_matches_sequential() -> Result<(), String> {
    let config = SimulationConfig::default().with_perturbation(Perturbation::random());
    let mut sequential = SimulationController::new(config.clone(), Some(7))?;
    let mut parallel = SimulationController::new(config, Some(7))?;
    assert_eq!(sequential.state(), parallel.state());

    sequential.toggle();
    parallel.toggle();
    sequential.evolve(50);
    parallel.par_evolve(50);

    assert_eq!(sequential.state(), parallel.state());
    assert_eq!(sequential.logs(), parallel.logs());

    Ok(())
}

#[test]
fn walls_contain_the_ring() -> Result<(), String> {
    // A small frame that the bulge and the jitter push the ring against.
    let boundary = Boundary::for_canvas(340.0, 300.0);
    let config = SimulationConfig::default()
        .with_spring_stiffness(0.05)
        .with_centroid_stiffness(0.01)
        .with_boundary(Some(boundary));
    let mut sim = SimulationController::new(config, Some(3))?;
    sim.toggle();

    let (x_limit, y_limit) = (boundary.half_width - boundary.point_radius, boundary.half_height - boundary.point_radius);
    for _ in 0..500 {
        for p in sim.tick().positions() {
            assert!(p[0].abs() <= x_limit && p[1].abs() <= y_limit, "{p:?} escaped");
        }
    }

    Ok(())
}

#[test]
fn resets_draw_new_shapes() -> Result<(), String> {
    let mut sim = SimulationController::new(SimulationConfig::default(), Some(5))?;
    let first = sim.state().clone();

    sim.reset(RunState::Stopped);
    assert_eq!(sim.run_state(), RunState::Stopped);
    assert_ne!(sim.state(), &first);
    assert_eq!(sim.state().len(), first.len());

    sim.reset(RunState::Running);
    assert!(sim.is_running());

    Ok(())
}
