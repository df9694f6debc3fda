use ballistic_core::StateVector;

use super::Report;

/// Indicates how the simulation terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Completed all requested ticks.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// How the simulation terminated.
    pub status: Status,

    /// Final per-axis state.
    pub states: StateVector,

    /// Number of ticks completed.
    pub ticks: usize,

    /// Simulated time covered, in seconds.
    ///
    /// This is the configured duration when the run completes, and
    /// `ticks * timestep` when an observer stops it early.
    pub elapsed: f64,
}

impl Solution {
    /// Returns a human-readable report of the final state.
    #[must_use]
    pub fn report(&self) -> Report<'_> {
        Report::new(&self.states, self.elapsed)
    }
}
