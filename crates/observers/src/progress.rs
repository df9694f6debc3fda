use ballistic_core::Observer;
use log::debug;

use crate::traits::{HasStates, HasTime};

/// Logs the per-axis state every `every` events at debug level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogProgress {
    every: usize,
    seen: usize,
}

impl LogProgress {
    /// Creates an observer that logs every `every` events.
    ///
    /// An interval of zero is treated as one.
    #[must_use]
    pub fn new(every: usize) -> Self {
        Self {
            every: every.max(1),
            seen: 0,
        }
    }

    /// Returns how many events have been observed.
    #[must_use]
    pub fn seen(&self) -> usize {
        self.seen
    }

    /// Returns `true` if the next observed event will be logged.
    fn due(&self) -> bool {
        self.seen % self.every == 0
    }
}

impl<E: HasTime + HasStates, A> Observer<E, A> for LogProgress {
    fn observe(&mut self, event: &E) -> Option<A> {
        if self.due() {
            let states = event.states();
            debug!(
                "t = {} s: position {} m, velocity {} m/s",
                event.time(),
                states.positions(),
                states.velocities()
            );
        }
        self.seen += 1;
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ballistic_solvers::simulation::{Action, Config, Event, Simulation, Status};

    #[test]
    fn counts_events_and_never_stops() {
        let mut progress = LogProgress::new(25);
        let mut logged = 0;

        let solution = Simulation::new(Config::default())
            .unwrap()
            .run(|event: &Event<'_>| {
                if progress.due() {
                    logged += 1;
                }
                let action: Option<Action> = progress.observe(event);
                action
            })
            .expect("should run");

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(progress.seen(), 201);
        // Events 0, 25, ..., 200.
        assert_eq!(logged, 9);
    }

    #[test]
    fn zero_interval_logs_every_event() {
        let progress = LogProgress::new(0);
        assert!(progress.due());
        assert_eq!(progress, LogProgress::new(1));
    }
}
