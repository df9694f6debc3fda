use ballistic_core::StateVector;

/// Event emitted by the simulation driver.
///
/// Tick 0 is the initial state before any integration.
/// Ticks 1..N are emitted after every axis has been advanced.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The tick number (0 for initial, 1..N for integration ticks).
    pub tick: usize,

    /// Simulated time at this tick, in seconds.
    pub time: f64,

    /// Per-axis state at this tick.
    pub states: &'a StateVector,
}
