use std::{io, path::PathBuf};

use ballistic_solvers::simulation;
use thiserror::Error;

/// Errors that can occur when running the command-line tool.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("cannot watch axis {axis} for ground contact: simulation has {dimensions} axes")]
    GroundAxis { axis: usize, dimensions: usize },

    #[error(transparent)]
    Simulation(#[from] simulation::Error),
}
