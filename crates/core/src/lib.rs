//! Core types for fixed-step kinematic integration.
//!
//! This crate defines the value types that integrators and drivers build on:
//!
//! - [`VectorN`] — an N-dimensional vector with checked elementwise arithmetic
//! - [`State`] — position and velocity for a single axis
//! - [`Derivative`] — velocity and acceleration for a single axis
//! - [`StateVector`] — one independent [`State`] per axis
//! - [`StepIntegrable`] — a value that can be advanced by `derivative * delta`
//! - [`Observer`] — receives driver events and optionally returns control actions

mod observer;
mod state;
mod step;
mod vector;

pub use observer::Observer;
pub use state::{Derivative, State, StateVector};
pub use step::{DerivativeOf, StepIntegrable};
pub use vector::{VectorError, VectorN};
