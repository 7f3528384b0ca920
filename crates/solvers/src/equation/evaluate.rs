use std::error::Error as StdError;

use thiserror::Error;

use strand_core::ResidualFunction;

/// A residual function failure, with the `x` it was evaluated at.
#[derive(Debug, Error)]
#[error("residual evaluation failed at x = {x}: {kind}")]
pub struct ResidualError {
    /// Point passed to the residual function.
    pub x: f64,
    /// What went wrong.
    #[source]
    pub kind: ResidualErrorKind,
}

/// Ways a residual evaluation can fail.
#[derive(Debug, Error)]
pub enum ResidualErrorKind {
    /// The residual function returned an error.
    #[error("residual function returned an error")]
    Failed(#[source] Box<dyn StdError + Send + Sync>),

    /// The residual is NaN or infinite.
    #[error("residual is not finite ({value})")]
    NonFinite { value: f64 },
}

/// Evaluates a residual function and checks that its output is finite.
///
/// # Errors
///
/// Returns a [`ResidualError`] carrying `x` if the residual function fails or
/// returns a non-finite value.
pub(crate) fn evaluate<R>(residual: &R, x: f64) -> Result<f64, ResidualError>
where
    R: ResidualFunction,
{
    let value = residual.residual(x).map_err(|e| ResidualError {
        x,
        kind: ResidualErrorKind::Failed(Box::new(e)),
    })?;

    if !value.is_finite() {
        return Err(ResidualError {
            x,
            kind: ResidualErrorKind::NonFinite { value },
        });
    }

    Ok(value)
}
