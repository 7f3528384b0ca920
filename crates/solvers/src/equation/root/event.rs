/// How an iterate was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum StepKind {
    /// Midpoint of the bracket.
    Bisection,
    /// Secant through the two most recent points.
    Secant,
    /// Inverse quadratic interpolation through three points.
    InverseQuadratic,
}

/// Event emitted after each residual evaluation inside the bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration number, starting at 1.
    pub iter: usize,
    /// Point just evaluated.
    pub x: f64,
    /// Residual at `x`.
    pub residual: f64,
    /// Bracket known to contain a root after this evaluation.
    pub bracket: [f64; 2],
    /// How `x` was chosen.
    pub kind: StepKind,
}
