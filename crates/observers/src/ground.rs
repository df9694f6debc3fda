use ballistic_core::Observer;
use log::info;

use crate::traits::{CanStopEarly, HasStates, HasTime};

/// Stops a run once an axis position drops below a level.
///
/// The integrator itself has no notion of ground and keeps accelerating an
/// object through it; attach this observer to end the run at impact instead.
/// The final state is the first one observed below `level`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundContact {
    axis: usize,
    level: f64,
}

impl GroundContact {
    #[must_use]
    pub fn new(axis: usize, level: f64) -> Self {
        Self { axis, level }
    }

    #[must_use]
    pub fn axis(&self) -> usize {
        self.axis
    }

    #[must_use]
    pub fn level(&self) -> f64 {
        self.level
    }
}

impl<E: HasTime + HasStates, A: CanStopEarly> Observer<E, A> for GroundContact {
    fn observe(&mut self, event: &E) -> Option<A> {
        let state = event.states().get(self.axis)?;
        if state.p < self.level {
            info!(
                "axis {} crossed {} m at t = {} s (v = {} m/s)",
                self.axis,
                self.level,
                event.time(),
                state.v
            );
            return Some(A::stop_early());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ballistic_solvers::simulation::{Config, Simulation, Status};

    #[test]
    fn stops_at_first_tick_below_ground() {
        let solution = Simulation::new(Config::default())
            .unwrap()
            .run(GroundContact::new(1, 0.0))
            .expect("should run");

        assert_eq!(solution.status, Status::StoppedByObserver);

        // Impact from 9.8 m under 9.8 m/s² happens at sqrt(2) s.
        let impact = 2.0_f64.sqrt();
        assert!(solution.elapsed > impact);
        assert!(solution.elapsed < impact + 0.01 + 1e-12);
        assert!(solution.states[1].p < 0.0);
        assert_relative_eq!(solution.states[1].v, -9.8 * solution.elapsed, epsilon = 1e-9);
    }

    #[test]
    fn runs_to_completion_when_level_is_never_reached() {
        let solution = Simulation::new(Config::default())
            .unwrap()
            .run(GroundContact::new(1, -100.0))
            .expect("should run");

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.ticks, 200);
    }

    #[test]
    fn ignores_missing_axis() {
        let solution = Simulation::new(Config::free_fall_1d())
            .unwrap()
            .run(GroundContact::new(2, 0.0))
            .expect("should run");

        assert_eq!(solution.status, Status::Complete);
    }
}
