use thiserror::Error;

use crate::transient::RateError;

/// Errors that can occur during Euler integration.
#[derive(Debug, Error)]
pub enum Error {
    #[error("step size must be positive, finite and able to advance time, got {dt}")]
    InvalidStep { dt: f64 },

    #[error("end time {end} is before start time {start}")]
    EndBeforeStart { start: f64, end: f64 },

    #[error("time {value} is not finite")]
    NonFiniteTime { value: f64 },

    #[error("reaching the end time takes {steps:e} steps, more than a usize can count")]
    TooManySteps { steps: f64 },

    #[error(transparent)]
    Rate(#[from] RateError),
}
