use std::{ops::Index, slice};

use crate::{StepIntegrable, VectorError, VectorN};

/// Position and velocity of a single degree of freedom.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct State {
    /// Position, in meters.
    pub p: f64,
    /// Velocity, in meters per second.
    pub v: f64,
}

impl State {
    #[must_use]
    pub fn new(p: f64, v: f64) -> Self {
        Self { p, v }
    }
}

/// Rate of change of a [`State`] at a sampled point in time.
///
/// `dp` is the velocity and `dv` is the acceleration.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Derivative {
    pub dp: f64,
    pub dv: f64,
}

impl Derivative {
    #[must_use]
    pub fn new(dp: f64, dv: f64) -> Self {
        Self { dp, dv }
    }
}

impl StepIntegrable<f64> for State {
    type Derivative = Derivative;

    fn step(&self, derivative: &Derivative, dt: f64) -> Self {
        Self {
            p: self.p + derivative.dp * dt,
            v: self.v + derivative.dv * dt,
        }
    }
}

/// One independent [`State`] per spatial axis.
///
/// Axes carry no coupling; each is advanced on its own.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateVector(Vec<State>);

impl StateVector {
    /// Builds a state vector by zipping positions with velocities.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if the vectors have
    /// different lengths.
    pub fn from_vectors(position: &VectorN, velocity: &VectorN) -> Result<Self, VectorError> {
        if position.len() != velocity.len() {
            return Err(VectorError::DimensionMismatch {
                left: position.len(),
                right: velocity.len(),
            });
        }

        Ok(Self(
            position
                .iter()
                .zip(velocity)
                .map(|(&p, &v)| State::new(p, v))
                .collect(),
        ))
    }

    /// Returns the number of axes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, axis: usize) -> Option<&State> {
        self.0.get(axis)
    }

    pub fn iter(&self) -> slice::Iter<'_, State> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, State> {
        self.0.iter_mut()
    }

    /// Collects every axis position into a vector.
    #[must_use]
    pub fn positions(&self) -> VectorN {
        self.0.iter().map(|s| s.p).collect()
    }

    /// Collects every axis velocity into a vector.
    #[must_use]
    pub fn velocities(&self) -> VectorN {
        self.0.iter().map(|s| s.v).collect()
    }
}

impl From<Vec<State>> for StateVector {
    fn from(states: Vec<State>) -> Self {
        Self(states)
    }
}

impl Index<usize> for StateVector {
    type Output = State;

    fn index(&self, axis: usize) -> &State {
        &self.0[axis]
    }
}

impl<'a> IntoIterator for &'a StateVector {
    type Item = &'a State;
    type IntoIter = slice::Iter<'a, State>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zips_position_and_velocity() {
        let position = VectorN::from([0.0, 9.8, -1.0]);
        let velocity = VectorN::from([1.0, 0.0, 2.0]);

        let states = StateVector::from_vectors(&position, &velocity).unwrap();

        assert_eq!(states.len(), 3);
        assert_eq!(states[1], State::new(9.8, 0.0));
        assert_eq!(states.get(2), Some(&State::new(-1.0, 2.0)));
        assert_eq!(states.get(3), None);
        assert_eq!(states.positions(), position);
        assert_eq!(states.velocities(), velocity);
    }

    #[test]
    fn rejects_mismatched_lengths() {
        let position = VectorN::zeros(3);
        let velocity = VectorN::zeros(1);

        assert_eq!(
            StateVector::from_vectors(&position, &velocity),
            Err(VectorError::DimensionMismatch { left: 3, right: 1 })
        );
    }

    #[test]
    fn axes_are_mutated_independently() {
        let mut states =
            StateVector::from_vectors(&VectorN::zeros(2), &VectorN::zeros(2)).unwrap();

        if let Some(first) = states.iter_mut().next() {
            first.p = 5.0;
        }

        assert_eq!(states[0], State::new(5.0, 0.0));
        assert_eq!(states[1], State::default());
    }
}
