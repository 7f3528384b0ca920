//! Adaptive Runge–Kutta solver using the Dormand–Prince 5(4) pair.
//!
//! # Algorithm
//!
//! Each step evaluates the rate function at six intermediate stages and
//! combines them two ways: a fifth-order solution and an embedded
//! fourth-order solution. Their difference estimates the local error, scaled
//! per component by `abs_tol + rel_tol * |y|` and reduced to an RMS norm.
//!
//! - If the scaled error is at most 1, the fifth-order solution is accepted,
//!   time advances, and the next step grows by `safety * error^(-1/5)`
//!   (capped at `max_factor`).
//! - Otherwise the step is rejected and retried from the same point with a
//!   smaller step (floored at `min_factor` of the old one).
//!
//! The rate at the end of an accepted step is the first stage of the next one,
//! so a step costs six evaluations. The last step is clipped so the
//! trajectory ends exactly at the end of the span.
//!
//! A trial step whose stages overflow to non-finite values is rejected like a
//! step with infinite error. If the step has to shrink below a few units of
//! floating-point resolution at the current time, the solver gives up with
//! [`Error::StepSizeUnderflow`]; this usually means the problem is stiff or
//! the rate function is singular or discontinuous there.
//!
//! # Observer Events
//!
//! The solver emits [`Event::Accepted`] or [`Event::Rejected`] for every
//! attempted step. Observers can return [`Action::StopEarly`] after an
//! accepted step to end the integration with the trajectory so far.

mod action;
mod config;
mod control;
mod error;
mod event;
mod initial;
mod solution;
mod step;
mod tableau;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Stats, Status};

use strand_core::{Observer, RateFunction, State};

use crate::transient::{Trajectory, evaluate::evaluate};

use initial::initial_step;
use step::{Trial, attempt};

/// Steps within this fraction of the remaining span are stretched to finish it.
const FINISH_STRETCH: f64 = 1.1;

/// Smallest usable step, in multiples of machine epsilon times `max(|t|, 1)`.
const MIN_STEP_ULPS: f64 = 16.0;

/// Integrates `dy/dt = rate(t, y)` over `span` starting from `initial`.
///
/// See the [module docs](self) for the algorithm and observer events.
///
/// # Errors
///
/// Returns an error if the span is invalid, the rate function fails or
/// returns a value of the wrong shape (or a non-finite value at an accepted
/// point), the step size underflows, or the step limit is exceeded.
pub fn solve<S, R, Obs>(
    rate: &R,
    span: [f64; 2],
    initial: S,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<S>, Error>
where
    S: State,
    R: RateFunction<S>,
    Obs: Observer<Event<S>, Action>,
{
    let [start, end] = span;
    if !start.is_finite() || !end.is_finite() || end <= start {
        return Err(Error::InvalidSpan { start, end });
    }

    let mut stats = Stats::default();

    stats.evaluations += 1;
    let initial_rate = evaluate(rate, start, &initial)?;

    let max_step = config.max_step_for(end - start);
    let mut h = match config.initial_step() {
        Some(h) => h,
        None => initial_step(
            rate,
            start,
            &initial,
            &initial_rate,
            config,
            max_step,
            &mut stats.evaluations,
        )?,
    }
    .min(max_step);

    let mut trajectory = Trajectory::start(start, initial, 0);
    let mut rates = vec![initial_rate];
    let mut after_rejection = false;
    let mut attempts = 0;

    loop {
        let current = trajectory.last();
        let (t, y) = (current.time, &current.state);
        if t >= end {
            break;
        }

        let min_step = MIN_STEP_ULPS * f64::EPSILON * t.abs().max(1.0);
        if h < min_step {
            return Err(Error::StepSizeUnderflow {
                time: t,
                step: h,
                state: y.components().to_vec(),
            });
        }

        if attempts >= config.max_steps() {
            return Err(Error::TooManySteps {
                max_steps: config.max_steps(),
                time: t,
            });
        }
        attempts += 1;

        let finishes = FINISH_STRETCH * h >= end - t;
        if finishes {
            h = end - t;
        }

        let k1 = &rates[rates.len() - 1];
        let trial = attempt(rate, t, y, k1, h, config, &mut stats.evaluations)?;

        match trial {
            Trial::Completed(step) if step.error <= 1.0 => {
                let next_time = if finishes { end } else { t + h };

                stats.accepted += 1;
                let event = Event::Accepted {
                    step: stats.accepted,
                    time: next_time,
                    size: h,
                    error: step.error,
                    state: step.state.clone(),
                };

                trajectory.push(next_time, step.state);
                rates.push(step.rate);

                h = (h * control::grow(config, step.error, after_rejection)).min(max_step);
                after_rejection = false;

                if let Some(Action::StopEarly) = observer.observe(&event) {
                    return Ok(Solution {
                        status: Status::StoppedByObserver,
                        trajectory,
                        rates,
                        stats,
                    });
                }
            }
            Trial::Completed(step) => {
                stats.rejected += 1;
                observer.observe(&Event::Rejected {
                    time: t,
                    size: h,
                    error: step.error,
                });
                h *= control::shrink(config, step.error);
                after_rejection = true;
            }
            Trial::Overflowed => {
                stats.rejected += 1;
                observer.observe(&Event::Rejected {
                    time: t,
                    size: h,
                    error: f64::INFINITY,
                });
                h *= control::shrink(config, f64::INFINITY);
                after_rejection = true;
            }
        }
    }

    Ok(Solution {
        status: Status::Complete,
        trajectory,
        rates,
        stats,
    })
}

/// Integrates adaptively without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<S, R>(
    rate: &R,
    span: [f64; 2],
    initial: S,
    config: &Config,
) -> Result<Solution<S>, Error>
where
    S: State,
    R: RateFunction<S>,
{
    solve(rate, span, initial, config, ())
}
