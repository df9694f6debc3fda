use std::{fs, path::PathBuf};

use ballistic_solvers::simulation::Config;
use clap::{Parser, ValueEnum};

use crate::error::CliError;

/// Fixed-step RK4 simulation of motion under constant acceleration.
///
/// Prints the final position and velocity of every axis.
/// Set `RUST_LOG=debug` to see progress.
#[derive(Debug, Parser)]
#[command(name = "ballistic", version)]
pub struct Args {
    /// TOML file with `timestep`, `duration`, `initial_position`,
    /// `initial_velocity`, and `acceleration`.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Built-in scenario used when no config file is given.
    #[arg(long, value_enum, default_value_t = Preset::Drop3d)]
    pub preset: Preset,

    /// Override the step size, in seconds.
    #[arg(long, value_name = "SECONDS")]
    pub timestep: Option<f64>,

    /// Override the simulated duration, in seconds.
    #[arg(long, value_name = "SECONDS")]
    pub duration: Option<f64>,

    /// Stop once this axis drops below the ground level.
    #[arg(long, value_name = "AXIS")]
    pub stop_at_ground: Option<usize>,

    /// Ground level used by `--stop-at-ground`, in meters.
    #[arg(long, value_name = "METERS", default_value_t = 0.0, allow_negative_numbers = true)]
    pub ground_level: f64,

    /// Log the state every N ticks at debug level.
    #[arg(long, value_name = "N")]
    pub log_every: Option<usize>,

    /// Decimal places for reported positions and velocities.
    #[arg(long, default_value_t = 6)]
    pub precision: usize,
}

/// Built-in scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Drop from 9.8 m on the Y axis of a 3D space for 2 s.
    #[value(name = "3d")]
    Drop3d,

    /// Drop from 9.81 m on a single axis for 1 s.
    #[value(name = "1d")]
    Drop1d,
}

impl Preset {
    #[must_use]
    pub fn config(self) -> Config {
        match self {
            Self::Drop3d => Config::default(),
            Self::Drop1d => Config::free_fall_1d(),
        }
    }
}

impl Args {
    /// Resolves the simulation config from the file or preset, then applies
    /// any command-line overrides.
    ///
    /// The result is not validated; the simulation does that.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed.
    pub fn resolve_config(&self) -> Result<Config, CliError> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path).map_err(|source| CliError::Read {
                    path: path.clone(),
                    source,
                })?;
                parse_config(&text).map_err(|source| CliError::Parse {
                    path: path.clone(),
                    source,
                })?
            }
            None => self.preset.config(),
        };

        if let Some(timestep) = self.timestep {
            config.timestep = timestep;
        }
        if let Some(duration) = self.duration {
            config.duration = duration;
        }

        Ok(config)
    }
}

/// Parses a config from TOML text.
///
/// # Errors
///
/// Returns an error if the text is not valid TOML or is missing a field.
pub fn parse_config(text: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(text)
}
