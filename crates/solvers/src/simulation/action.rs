/// Control actions supported by the simulation driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the simulation early and return the state so far.
    StopEarly,
}
