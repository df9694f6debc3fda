//! Driver runs against analytic solutions of state-dependent fields.

use approx::assert_relative_eq;

use ballistic_core::{State, VectorN};
use ballistic_solvers::simulation::{Config, Simulation, Status};

/// Unit-mass springs with stiffness 1 on X and 4 on Y.
fn springs(axis: usize, _time: f64, state: &State) -> f64 {
    let stiffness = if axis == 0 { 1.0 } else { 4.0 };
    -stiffness * state.p
}

fn spring_config(timestep: f64) -> Config {
    Config {
        timestep,
        duration: 2.0,
        initial_position: VectorN::from([1.0, 0.5]),
        initial_velocity: VectorN::zeros(2),
        acceleration: VectorN::zeros(2),
    }
}

/// Position error on each axis against `p0 * cos(omega * t)`.
fn errors(timestep: f64) -> [f64; 2] {
    let solution = Simulation::with_field(spring_config(timestep), springs)
        .unwrap()
        .run_unobserved()
        .expect("should run");

    assert_eq!(solution.status, Status::Complete);

    let t = solution.elapsed;
    [
        (solution.states[0].p - (1.0 * t).cos()).abs(),
        (solution.states[1].p - 0.5 * (2.0 * t).cos()).abs(),
    ]
}

#[test]
fn springs_oscillate_at_their_own_frequency() {
    let [x, y] = errors(0.001);

    assert!(x < 1e-10, "x error {x}");
    assert!(y < 1e-10, "y error {y}");
}

#[test]
fn halving_the_step_cuts_error_sixteenfold() {
    let coarse = errors(0.1);
    let fine = errors(0.05);

    for axis in 0..2 {
        let ratio = coarse[axis] / fine[axis];
        assert!(
            (12.0..20.0).contains(&ratio),
            "axis {axis}: expected ~16x, got {ratio}"
        );
    }
}

#[test]
fn energy_is_nearly_conserved() {
    let solution = Simulation::with_field(spring_config(0.01), springs)
        .unwrap()
        .run_unobserved()
        .unwrap();

    let x = solution.states[0];
    assert_relative_eq!(0.5 * x.v * x.v + 0.5 * x.p * x.p, 0.5, epsilon = 1e-9);
}
