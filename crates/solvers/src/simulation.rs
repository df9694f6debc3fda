//! Per-axis simulation driver.
//!
//! The driver owns a [`Config`], builds one [`State`] per axis from the
//! initial position and velocity, and advances every axis with one RK4 step
//! per tick:
//!
//! ```text
//! for tick in 1..=trunc(duration / timestep):
//!     for axis in axes:
//!         rk4_step(state[axis], acceleration[axis], timestep)
//! ```
//!
//! Axes never read each other's state, so their order within a tick does not
//! affect the result. Ticks are strictly sequential.
//!
//! # Example
//!
//! ```
//! use ballistic_solvers::simulation::{Config, Simulation, Status};
//!
//! let simulation = Simulation::new(Config::default()).unwrap();
//! let solution = simulation.run_unobserved().unwrap();
//!
//! assert_eq!(solution.status, Status::Complete);
//! assert!((solution.states[1].v + 19.6).abs() < 1e-9);
//! println!("{}", solution.report());
//! ```
//!
//! [`State`]: ballistic_core::State

mod action;
mod config;
mod error;
mod event;
mod field;
mod report;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use field::{AccelerationField, ConstantField};
pub use report::Report;
pub use solution::{Solution, Status};

use ballistic_core::{Observer, StateVector};
use log::{debug, info};

use crate::rk4_step_with;

/// A fixed-step simulation of independent axes under an acceleration field.
///
/// [`Simulation::new`] uses the constant acceleration from the config.
/// [`Simulation::with_field`] replaces it with any [`AccelerationField`].
#[derive(Debug, Clone)]
pub struct Simulation<F = ConstantField> {
    config: Config,
    field: F,
}

impl Simulation {
    /// Creates a simulation driven by the config's constant acceleration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the config fails validation.
    pub fn new(config: Config) -> Result<Self, Error> {
        let field = ConstantField(config.acceleration.clone());
        Self::with_field(config, field)
    }
}

impl<F: AccelerationField> Simulation<F> {
    /// Creates a simulation driven by a custom acceleration field.
    ///
    /// The config is validated in full, including its `acceleration` vector,
    /// but only `field` is sampled during the run.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the config fails validation.
    pub fn with_field(config: Config, field: F) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self { config, field })
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn field(&self) -> &F {
        &self.field
    }

    /// Runs the simulation to completion or until the observer stops it.
    ///
    /// # Algorithm
    ///
    /// 1. Build the per-axis states from the initial position and velocity.
    /// 2. Emit tick 0 to the observer.
    /// 3. For each tick, advance every axis by one RK4 step, then emit the
    ///    tick to the observer.
    /// 4. If the observer returns [`Action::StopEarly`], return immediately.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InitialState`] if the initial vectors cannot be zipped.
    pub fn run<Obs>(&self, mut observer: Obs) -> Result<Solution, Error>
    where
        Obs: for<'a> Observer<Event<'a>, Action>,
    {
        let dt = self.config.timestep;
        let ticks = self.config.ticks();

        let mut states =
            StateVector::from_vectors(&self.config.initial_position, &self.config.initial_velocity)?;

        debug!(
            "starting simulation: {} axes, {ticks} ticks of {dt} s",
            states.len()
        );

        let event = Event {
            tick: 0,
            time: 0.0,
            states: &states,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Self::stopped(states, 0, dt));
        }

        for tick in 1..=ticks {
            let time = (tick - 1) as f64 * dt;

            for (axis, state) in states.iter_mut().enumerate() {
                rk4_step_with(state, time, dt, |t, trial| {
                    self.field.acceleration(axis, t, trial)
                });
            }

            let event = Event {
                tick,
                time: tick as f64 * dt,
                states: &states,
            };
            if let Some(Action::StopEarly) = observer.observe(&event) {
                return Ok(Self::stopped(states, tick, dt));
            }
        }

        info!(
            "simulation complete after {ticks} ticks ({} s)",
            self.config.duration
        );

        Ok(Solution {
            status: Status::Complete,
            states,
            ticks,
            elapsed: self.config.duration,
        })
    }

    /// Runs the simulation to completion without observation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InitialState`] if the initial vectors cannot be zipped.
    pub fn run_unobserved(&self) -> Result<Solution, Error> {
        self.run(())
    }

    fn stopped(states: StateVector, ticks: usize, dt: f64) -> Solution {
        let elapsed = ticks as f64 * dt;
        info!("simulation stopped by observer at tick {ticks} ({elapsed} s)");

        Solution {
            status: Status::StoppedByObserver,
            states,
            ticks,
            elapsed,
        }
    }
}
