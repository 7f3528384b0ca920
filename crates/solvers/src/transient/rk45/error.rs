use thiserror::Error;

use crate::transient::RateError;

/// Errors that can occur during adaptive integration.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid time span [{start}, {end}]: bounds must be finite with start < end")]
    InvalidSpan { start: f64, end: f64 },

    #[error("step size {step} at t = {time} is below the smallest usable step")]
    StepSizeUnderflow {
        time: f64,
        step: f64,
        state: Vec<f64>,
    },

    #[error("exceeded {max_steps} step attempts at t = {time}")]
    TooManySteps { max_steps: usize, time: f64 },

    #[error(transparent)]
    Rate(#[from] RateError),
}
