//! Capability traits for cross-driver observers.
//!
//! These traits abstract over driver-specific event and action types, so an
//! observer can be written once and reused.
//!
//! # Example
//!
//! ```rust
//! use ballistic_core::Observer;
//! use ballistic_observers::traits::{CanStopEarly, HasTime};
//!
//! struct TimeLimit(f64);
//!
//! impl<E: HasTime, A: CanStopEarly> Observer<E, A> for TimeLimit {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.time() >= self.0).then(A::stop_early)
//!     }
//! }
//! ```

use ballistic_core::StateVector;
use ballistic_solvers::simulation;

/// An event that carries the simulated time.
pub trait HasTime {
    /// Returns the simulated time of this event, in seconds.
    fn time(&self) -> f64;
}

/// An event that carries per-axis states.
pub trait HasStates {
    /// Returns the per-axis states at this event.
    fn states(&self) -> &StateVector;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the driver early.
    fn stop_early() -> Self;
}

impl HasTime for simulation::Event<'_> {
    fn time(&self) -> f64 {
        self.time
    }
}

impl HasStates for simulation::Event<'_> {
    fn states(&self) -> &StateVector {
        self.states
    }
}

impl CanStopEarly for simulation::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
