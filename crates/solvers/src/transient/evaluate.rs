use std::error::Error as StdError;

use thiserror::Error;

use strand_core::{RateFunction, State};

/// A rate function failure, with the time and state it was evaluated at.
#[derive(Debug, Error)]
#[error("rate evaluation failed at t = {time}: {kind}")]
pub struct RateError {
    /// Time passed to the rate function.
    pub time: f64,
    /// Components of the state passed to the rate function.
    pub state: Vec<f64>,
    /// What went wrong.
    #[source]
    pub kind: RateErrorKind,
}

/// Ways a rate evaluation can fail.
#[derive(Debug, Error)]
pub enum RateErrorKind {
    /// The rate function returned an error.
    #[error("rate function returned an error")]
    Failed(#[source] Box<dyn StdError + Send + Sync>),

    /// The rate has a different number of components than the state.
    #[error("rate has {found} components but the state has {expected}")]
    ShapeMismatch { expected: usize, found: usize },

    /// A rate component is NaN or infinite.
    #[error("rate component {index} is not finite ({value})")]
    NonFinite { index: usize, value: f64 },
}

impl RateErrorKind {
    /// Returns true if the rate was computed but has non-finite components.
    #[must_use]
    pub fn is_non_finite(&self) -> bool {
        matches!(self, Self::NonFinite { .. })
    }
}

/// Evaluates a rate function and checks the shape and finiteness of its output.
///
/// # Errors
///
/// Returns a [`RateError`] carrying `time` and `state` if the rate function
/// fails, returns the wrong number of components, or returns a non-finite value.
pub(crate) fn evaluate<S, R>(rate: &R, time: f64, state: &S) -> Result<S, RateError>
where
    S: State,
    R: RateFunction<S>,
{
    let fail = |kind| RateError {
        time,
        state: state.components().to_vec(),
        kind,
    };

    let derivative = rate
        .rate(time, state)
        .map_err(|e| fail(RateErrorKind::Failed(Box::new(e))))?;

    if derivative.dim() != state.dim() {
        return Err(fail(RateErrorKind::ShapeMismatch {
            expected: state.dim(),
            found: derivative.dim(),
        }));
    }

    if let Some((index, &value)) = derivative
        .components()
        .iter()
        .enumerate()
        .find(|(_, v)| !v.is_finite())
    {
        return Err(fail(RateErrorKind::NonFinite { index, value }));
    }

    Ok(derivative)
}
