//! Fixed-step integration of position/velocity under an acceleration field.
//!
//! # Modules
//!
//! - [`rk4`] — the classical 4th-order Runge-Kutta step for a single axis
//! - [`simulation`] — a driver that advances every axis of a [`StateVector`]
//!   once per tick for a fixed number of ticks
//!
//! [`StateVector`]: ballistic_core::StateVector

pub mod rk4;
pub mod simulation;

pub use rk4::{rk4_step, rk4_step_with};
pub use simulation::Simulation;
