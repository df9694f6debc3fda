use ballistic_core::VectorError;
use thiserror::Error;

use super::ConfigError;

/// Errors that can occur when setting up or running a simulation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("invalid initial state: {0}")]
    InitialState(#[from] VectorError),
}
