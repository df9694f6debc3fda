use ballistic_core::{State, VectorN};

/// Supplies the acceleration of each axis during a simulation.
///
/// The driver samples the field at every RK4 stage with the stage time and the
/// trial state of the axis being advanced. A field may depend on neither,
/// either, or both.
///
/// Closures of the form `Fn(axis, time, state) -> f64` implement this trait:
///
/// ```
/// use ballistic_core::State;
/// use ballistic_solvers::simulation::AccelerationField;
///
/// // Linear drag on every axis.
/// let drag = |_axis: usize, _time: f64, state: &State| -0.1 * state.v;
/// assert_eq!(drag.acceleration(0, 0.0, &State::new(0.0, 10.0)), -1.0);
/// ```
pub trait AccelerationField {
    /// Returns the acceleration of `axis` at `time` for the given state.
    fn acceleration(&self, axis: usize, time: f64, state: &State) -> f64;
}

/// A field with a fixed acceleration per axis.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantField(pub VectorN);

impl AccelerationField for ConstantField {
    fn acceleration(&self, axis: usize, _time: f64, _state: &State) -> f64 {
        self.0[axis]
    }
}

impl<F> AccelerationField for F
where
    F: Fn(usize, f64, &State) -> f64,
{
    fn acceleration(&self, axis: usize, time: f64, state: &State) -> f64 {
        self(axis, time, state)
    }
}
