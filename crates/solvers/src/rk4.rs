//! Classical 4th-order Runge-Kutta step for a single axis.
//!
//! The second-order system `p'' = a` is integrated as the first-order pair
//! `(p, v)' = (v, a)`. One step samples the derivative four times and combines
//! the samples with weights 1:2:2:1:
//!
//! ```text
//! k1 = f(t,        s)
//! k2 = f(t + dt/2, s + k1 * dt/2)
//! k3 = f(t + dt/2, s + k2 * dt/2)
//! k4 = f(t + dt,   s + k3 * dt)
//!
//! s_{n+1} = s_n + (k1 + 2*(k2 + k3) + k4) / 6 * dt
//! ```
//!
//! All arithmetic is plain `f64`. Nothing is validated: a non-finite input
//! propagates into the state without an error.

use ballistic_core::{Derivative, State, StepIntegrable};

/// Samples the derivative at a trial state.
///
/// The trial state is `initial + prior * dt`. The returned derivative carries
/// the trial velocity as `dp` and `acceleration` as `dv`.
#[must_use]
pub fn evaluate(initial: &State, acceleration: f64, dt: f64, prior: &Derivative) -> Derivative {
    sample(initial, 0.0, dt, prior, &mut |_: f64, _: &State| acceleration)
}

/// Advances `state` by one RK4 step of size `dt` under a constant acceleration.
///
/// The acceleration is held fixed across all four stages.
///
/// # Examples
///
/// ```
/// use ballistic_core::State;
/// use ballistic_solvers::rk4_step;
///
/// let mut state = State::new(9.81, 0.0);
/// rk4_step(&mut state, -9.81, 0.1);
///
/// assert!((state.v + 0.981).abs() < 1e-12);
/// ```
pub fn rk4_step(state: &mut State, acceleration: f64, dt: f64) {
    rk4_step_with(state, 0.0, dt, |_, _| acceleration);
}

/// Advances `state` by one RK4 step, sampling `acceleration` at every stage.
///
/// `acceleration` is called with the stage time and the trial state, at
/// `time`, `time + dt/2` (twice), and `time + dt`. A law that ignores both
/// arguments reproduces [`rk4_step`] exactly.
pub fn rk4_step_with<F>(state: &mut State, time: f64, dt: f64, mut acceleration: F)
where
    F: FnMut(f64, &State) -> f64,
{
    let half = dt * 0.5;

    let k1 = sample(state, time, dt, &Derivative::default(), &mut acceleration);
    let k2 = sample(state, time + half, half, &k1, &mut acceleration);
    let k3 = sample(state, time + half, half, &k2, &mut acceleration);
    let k4 = sample(state, time + dt, dt, &k3, &mut acceleration);

    let weighted = Derivative::new(
        (k1.dp + 2.0 * (k2.dp + k3.dp) + k4.dp) / 6.0,
        (k1.dv + 2.0 * (k2.dv + k3.dv) + k4.dv) / 6.0,
    );

    *state = state.step(&weighted, dt);
}

fn sample<F>(
    initial: &State,
    time: f64,
    dt: f64,
    prior: &Derivative,
    acceleration: &mut F,
) -> Derivative
where
    F: FnMut(f64, &State) -> f64,
{
    let trial = initial.step(prior, dt);
    Derivative::new(trial.v, acceleration(time, &trial))
}
