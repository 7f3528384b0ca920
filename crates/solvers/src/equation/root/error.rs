use thiserror::Error;

use crate::equation::ResidualError;

use super::bracket::BracketError;

/// Errors that can occur while finding a root.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error("guess must be finite, got {value}")]
    NonFiniteGuess { value: f64 },

    #[error("no sign change found around {guess} after {attempts} expansions")]
    NoSignChangeFound { guess: f64, attempts: usize },

    #[error("no convergence after {iters} iterations, bracket is {bracket:?}")]
    NoConvergence { iters: usize, bracket: [f64; 2] },

    #[error(transparent)]
    Residual(#[from] ResidualError),
}
