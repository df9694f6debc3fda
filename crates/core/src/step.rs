/// A trait for types that can be stepped using their derivative.
///
/// Implementing this trait lets an integrator advance the type via
/// `value + derivative * delta`, where the derivative is taken with respect to
/// `Delta`. For kinematics `Delta` is a time increment in seconds.
pub trait StepIntegrable<Delta> {
    /// The derivative of the type with respect to `Delta`.
    type Derivative;

    /// Returns the value after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: &Self::Derivative, delta: Delta) -> Self;
}

/// Type alias for the derivative of a `StepIntegrable` type.
///
/// This is a convenience for accessing the [`StepIntegrable::Derivative`]
/// associated type without writing out the fully qualified syntax.
pub type DerivativeOf<T, Delta> = <T as StepIntegrable<Delta>>::Derivative;

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::{Derivative, State};

    #[test]
    fn step_state_by_derivative() {
        let state = State::new(1.0, 2.0);
        let derivative = Derivative::new(2.0, -4.0);

        let next = state.step(&derivative, 0.5);

        assert_relative_eq!(next.p, 2.0);
        assert_relative_eq!(next.v, 0.0);
    }

    #[test]
    fn zero_delta_leaves_state_unchanged() {
        let state = State::new(-3.5, 7.25);
        let derivative: DerivativeOf<State, f64> = Derivative::new(100.0, 100.0);

        assert_eq!(state.step(&derivative, 0.0), state);
    }
}
