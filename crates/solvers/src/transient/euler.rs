//! Forward Euler solver for initial value problems.
//!
//! Steps a state forward in time with a fixed step size using explicit Euler:
//!
//! ```text
//! t_{n+1} = t_n + dt
//! y_{n+1} = y_n + f(t_n, y_n) * dt
//! ```
//!
//! There is no error control. Forward Euler is first order, so the global
//! error shrinks in proportion to `dt`: the usual convergence check is to
//! halve `dt`, integrate again, and confirm the difference roughly halves.
//!
//! # Example
//!
//! ```
//! use strand_core::Pure;
//! use strand_solvers::transient::euler::{self, Plan};
//!
//! let growth = Pure(|_t: f64, y: &f64| 0.2 * y);
//! let solution = euler::solve_unobserved(&growth, 0.0, 5.0, 0.1, Plan::Until(4.0))?;
//!
//! assert_eq!(solution.trajectory.len(), 41);
//! # Ok::<(), euler::Error>(())
//! ```

mod action;
mod error;
mod event;
mod plan;
mod solution;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use plan::Plan;
pub use solution::{Solution, Status};

use strand_core::{Observer, RateFunction, State};

use crate::transient::{Trajectory, evaluate::evaluate};

/// Integrates `dy/dt = rate(t, y)` from `(start, initial)` using forward Euler.
///
/// # Algorithm
///
/// 1. Resolve the [`Plan`] into a step count `n`.
/// 2. Emit the initial condition as step 0.
/// 3. For each step `i` in `1..=n`:
///    - Evaluate the rate at the previous sample.
///    - Step the state: `y + rate * dt`.
///    - Set the time to `start + i * dt`.
///    - Emit an [`Event`]; stop if the observer returns [`Action::StopEarly`].
/// 4. Return the trajectory of `n + 1` samples.
///
/// Times are computed from the step index rather than accumulated, so the
/// final time of a whole-number span is exact.
///
/// # Errors
///
/// Returns an error if `dt` is not positive and finite, if `start + i * dt`
/// fails to advance past the previous sample (a step below floating-point
/// resolution), if the plan's end time is invalid or needs more steps than
/// fit in a `usize`, or if the rate function fails, returns a state of the
/// wrong shape, or returns a non-finite value.
pub fn solve<S, R, Obs>(
    rate: &R,
    start: f64,
    initial: S,
    dt: f64,
    plan: Plan,
    mut observer: Obs,
) -> Result<Solution<S>, Error>
where
    S: State,
    R: RateFunction<S>,
    Obs: Observer<Event<S>, Action>,
{
    if !start.is_finite() {
        return Err(Error::NonFiniteTime { value: start });
    }
    #[allow(clippy::float_cmp)]
    if !dt.is_finite() || dt <= 0.0 || start + dt == start {
        return Err(Error::InvalidStep { dt });
    }

    let steps = plan.steps(start, dt)?;

    let mut trajectory = Trajectory::start(start, initial, steps.saturating_add(1));

    let event = Event {
        step: 0,
        time: start,
        state: trajectory.first().state.clone(),
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(Solution {
            status: Status::StoppedByObserver,
            trajectory,
            steps: 0,
        });
    }

    for step in 1..=steps {
        #[allow(clippy::cast_precision_loss)]
        let next_time = start + step as f64 * dt;

        let current = trajectory.last();
        if next_time <= current.time {
            return Err(Error::InvalidStep { dt });
        }

        let derivative = evaluate(rate, current.time, &current.state)?;
        let next_state = current.state.scaled_add(dt, &derivative);

        let event = Event {
            step,
            time: next_time,
            state: next_state.clone(),
        };
        trajectory.push(next_time, next_state);

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                trajectory,
                steps: step,
            });
        }
    }

    Ok(Solution {
        status: Status::Complete,
        trajectory,
        steps,
    })
}

/// Integrates using forward Euler without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<S, R>(
    rate: &R,
    start: f64,
    initial: S,
    dt: f64,
    plan: Plan,
) -> Result<Solution<S>, Error>
where
    S: State,
    R: RateFunction<S>,
{
    solve(rate, start, initial, dt, plan, ())
}
