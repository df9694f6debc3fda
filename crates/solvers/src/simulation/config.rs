use ballistic_core::VectorN;
use thiserror::Error;

/// Configuration for a simulation run.
///
/// Every vector holds one component per axis and all three must share the
/// same length. Use [`Config::validate`] to check a hand-built or deserialized
/// config; [`Simulation`] validates on construction.
///
/// [`Simulation`]: super::Simulation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// Step size, in seconds.
    pub timestep: f64,

    /// Total simulated time, in seconds.
    pub duration: f64,

    /// Initial position per axis, in meters.
    pub initial_position: VectorN,

    /// Initial velocity per axis, in meters per second.
    pub initial_velocity: VectorN,

    /// Constant acceleration per axis, in meters per second squared.
    pub acceleration: VectorN,
}

/// Errors that can occur when validating a simulation config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("timestep must be finite and positive")]
    Timestep,

    #[error("duration must be finite and non-negative")]
    Duration,

    #[error("duration / timestep does not fit in a tick count")]
    TickCount,

    #[error("at least one axis is required")]
    NoAxes,

    #[error("initial_velocity has {actual} components, expected {expected}")]
    Velocity { expected: usize, actual: usize },

    #[error("acceleration has {actual} components, expected {expected}")]
    Acceleration { expected: usize, actual: usize },
}

impl Default for Config {
    /// An object dropped from rest at 9.8 m on the Y axis under Earth gravity.
    fn default() -> Self {
        Self {
            timestep: 0.01,
            duration: 2.0,
            initial_position: VectorN::from([0.0, 9.8, 0.0]),
            initial_velocity: VectorN::zeros(3),
            acceleration: VectorN::from([0.0, -9.8, 0.0]),
        }
    }
}

impl Config {
    /// A single-axis drop from rest at 9.81 m for one second.
    #[must_use]
    pub fn free_fall_1d() -> Self {
        Self {
            timestep: 0.01,
            duration: 1.0,
            initial_position: VectorN::from([9.81]),
            initial_velocity: VectorN::from([0.0]),
            acceleration: VectorN::from([-9.81]),
        }
    }

    /// Returns the number of axes.
    #[must_use]
    pub fn dimensions(&self) -> usize {
        self.initial_position.len()
    }

    /// Returns the number of ticks to run.
    ///
    /// This is `duration / timestep` truncated toward zero, so a duration that
    /// is not a whole multiple of the timestep stops short of it.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn ticks(&self) -> usize {
        (self.duration / self.timestep) as usize
    }

    /// Validates the timing parameters and axis counts.
    ///
    /// # Errors
    ///
    /// Returns an error if the timestep is not finite and positive, the
    /// duration is not finite and non-negative, the tick count overflows,
    /// there are no axes, or the vectors disagree on the number of axes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.timestep.is_finite() || self.timestep <= 0.0 {
            return Err(ConfigError::Timestep);
        }
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(ConfigError::Duration);
        }
        #[allow(clippy::cast_precision_loss)]
        let max_ticks = usize::MAX as f64;
        if self.duration / self.timestep >= max_ticks {
            return Err(ConfigError::TickCount);
        }

        let expected = self.dimensions();
        if expected == 0 {
            return Err(ConfigError::NoAxes);
        }
        if self.initial_velocity.len() != expected {
            return Err(ConfigError::Velocity {
                expected,
                actual: self.initial_velocity.len(),
            });
        }
        if self.acceleration.len() != expected {
            return Err(ConfigError::Acceleration {
                expected,
                actual: self.acceleration.len(),
            });
        }

        Ok(())
    }
}
