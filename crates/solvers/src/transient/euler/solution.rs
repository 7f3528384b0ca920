use crate::transient::Trajectory;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Status {
    /// Completed all planned steps.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of an Euler integration.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Solution<S> {
    /// How the solver terminated.
    pub status: Status,

    /// Samples from each step, starting with the initial condition.
    pub trajectory: Trajectory<S>,

    /// Number of integration steps completed.
    pub steps: usize,
}
