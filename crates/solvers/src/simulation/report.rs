use std::fmt;

use ballistic_core::StateVector;

/// Human-readable summary of a final state.
///
/// Formats one line per axis:
///
/// ```text
/// Axis 0 Position: 0.000000 m, Velocity: 0.000000 m/s after 2 second(s)
/// ```
///
/// Positions and velocities use six decimal places unless the formatter
/// specifies a precision, as in `format!("{report:.3}")`.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    states: &'a StateVector,
    elapsed: f64,
}

impl<'a> Report<'a> {
    #[must_use]
    pub fn new(states: &'a StateVector, elapsed: f64) -> Self {
        Self { states, elapsed }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(6);

        for (axis, state) in self.states.iter().enumerate() {
            if axis > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "Axis {axis} Position: {p:.precision$} m, Velocity: {v:.precision$} m/s after {elapsed} second(s)",
                p = state.p,
                v = state.v,
                elapsed = self.elapsed,
            )?;
        }

        Ok(())
    }
}
