use ballistic_core::{Observer, VectorN};

use crate::traits::{HasStates, HasTime};

/// Positions and velocities captured at one event.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub time: f64,
    pub positions: VectorN,
    pub velocities: VectorN,
}

/// Records a [`Sample`] for every observed event.
///
/// Pass `&mut trajectory` to the driver so the samples remain available
/// after the run:
///
/// ```
/// use ballistic_observers::Trajectory;
/// use ballistic_solvers::simulation::{Config, Simulation};
///
/// let mut trajectory = Trajectory::default();
/// Simulation::new(Config::default())
///     .unwrap()
///     .run(&mut trajectory)
///     .unwrap();
///
/// assert_eq!(trajectory.samples().len(), 201);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Trajectory {
    samples: Vec<Sample>,
}

impl Trajectory {
    /// Records the time and states of an event.
    pub fn record<E: HasTime + HasStates>(&mut self, event: &E) {
        let states = event.states();
        self.samples.push(Sample {
            time: event.time(),
            positions: states.positions(),
            velocities: states.velocities(),
        });
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Returns the `(time, position)` series for one axis.
    ///
    /// Samples that lack the axis are skipped.
    #[must_use]
    pub fn positions(&self, axis: usize) -> Vec<[f64; 2]> {
        self.series(axis, |sample| &sample.positions)
    }

    /// Returns the `(time, velocity)` series for one axis.
    ///
    /// Samples that lack the axis are skipped.
    #[must_use]
    pub fn velocities(&self, axis: usize) -> Vec<[f64; 2]> {
        self.series(axis, |sample| &sample.velocities)
    }

    #[must_use]
    pub fn into_samples(self) -> Vec<Sample> {
        self.samples
    }

    fn series(&self, axis: usize, field: impl Fn(&Sample) -> &VectorN) -> Vec<[f64; 2]> {
        self.samples
            .iter()
            .filter_map(|sample| {
                let values = field(sample);
                (axis < values.len()).then(|| [sample.time, values[axis]])
            })
            .collect()
    }
}

impl<E: HasTime + HasStates, A> Observer<E, A> for &mut Trajectory {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ballistic_solvers::simulation::{Config, Simulation};

    #[test]
    fn records_every_tick() {
        let config = Config {
            timestep: 0.5,
            duration: 2.0,
            ..Config::default()
        };

        let mut trajectory = Trajectory::default();
        let solution = Simulation::new(config)
            .unwrap()
            .run(&mut trajectory)
            .expect("should run");

        let samples = trajectory.samples();
        assert_eq!(samples.len(), solution.ticks + 1);
        assert_relative_eq!(samples[0].time, 0.0);
        assert_relative_eq!(samples[4].time, 2.0);
        assert_eq!(samples[4].positions, solution.states.positions());
        assert_eq!(samples[4].velocities, solution.states.velocities());
    }

    #[test]
    fn axis_series() {
        let config = Config {
            timestep: 1.0,
            duration: 2.0,
            ..Config::default()
        };

        let mut trajectory = Trajectory::default();
        Simulation::new(config)
            .unwrap()
            .run(&mut trajectory)
            .expect("should run");

        let heights = trajectory.positions(1);
        assert_eq!(heights.len(), 3);
        assert_relative_eq!(heights[0][1], 9.8);
        assert_relative_eq!(heights[1][1], 9.8 - 4.9, epsilon = 1e-12);

        let speeds = trajectory.velocities(1);
        assert_relative_eq!(speeds[2][0], 2.0);
        assert_relative_eq!(speeds[2][1], -19.6, epsilon = 1e-12);

        assert!(trajectory.positions(7).is_empty());
    }
}
