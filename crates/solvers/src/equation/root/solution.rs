/// Indicates how the root finder terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Status {
    /// Met the residual or bracket-width tolerance.
    Converged,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a root search.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Root {
    /// How the solver terminated.
    pub status: Status,

    /// Best estimate of the root.
    pub x: f64,

    /// Residual at `x`.
    pub residual: f64,

    /// Number of bracket iterations performed.
    pub iters: usize,

    /// Number of residual evaluations, including endpoints and search points.
    pub evals: usize,

    /// Final bracket around the root.
    ///
    /// Both ends equal `x` when the starting point already met the residual
    /// tolerance.
    pub bracket: [f64; 2],
}
