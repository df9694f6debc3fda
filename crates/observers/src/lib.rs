//! Reusable observers for the ballistic simulation driver.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with any event carrying a time and per-axis states.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for events ([`HasTime`], [`HasStates`])
//!   and actions ([`CanStopEarly`])
//!
//! # Observers
//!
//! - [`Trajectory`] — records positions and velocities at every event
//! - [`GroundContact`] — stops a run once an axis drops below a level
//! - [`LogProgress`] — logs the state every N events
//!
//! [`Observer`]: ballistic_core::Observer
//! [`HasTime`]: traits::HasTime
//! [`HasStates`]: traits::HasStates
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod ground;
mod progress;
mod trajectory;

pub use ground::GroundContact;
pub use progress::LogProgress;
pub use trajectory::{Sample, Trajectory};
