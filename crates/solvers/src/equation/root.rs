//! Scalar root finder combining bracketing with fast interpolation.
//!
//! # Algorithm
//!
//! Brent's method keeps a bracket `[b, c]` whose residuals differ in sign,
//! with `b` the best point found so far. Each iteration proposes a new point:
//!
//! - inverse quadratic interpolation through three distinct points,
//! - the secant through two points when only two are distinct,
//! - or the bracket midpoint when interpolation would land too close to the
//!   bracket ends or is not shrinking the step fast enough.
//!
//! The new point replaces whichever end preserves the sign change. Bisection
//! fallbacks guarantee convergence; interpolation makes it superlinear for
//! smooth residuals.
//!
//! The solver converges when `|g(b)| <= residual_tol` or the bracket is
//! narrower than `x_abs_tol + x_rel_tol * |b|` (plus a few units of
//! floating-point resolution at `b`).
//!
//! # Starting Points
//!
//! A [`Start::Bracket`] must have finite, distinct ends whose residuals
//! differ in sign, in either order. An end that already meets the residual
//! tolerance is returned without iterating.
//!
//! A [`Start::Guess`] is returned immediately if it meets the residual
//! tolerance. Otherwise the solver searches outward for a sign change, then
//! proceeds as if given that bracket.
//!
//! # Observer Events
//!
//! The solver emits an [`Event`] after each bracket iteration. Observers can
//! return [`Action::StopEarly`] to end with the best point found so far.
//!
//! # Example
//!
//! ```
//! use strand_core::Pure;
//! use strand_solvers::equation::root::{self, Config};
//!
//! let quadratic = Pure(|x: f64| x * x - 2.0 * x - 3.0);
//! let root = root::solve_unobserved(&quadratic, [2.0, 4.0], &Config::default())?;
//!
//! assert!((root.x - 3.0).abs() < 1e-12);
//! # Ok::<(), root::Error>(())
//! ```

mod action;
mod bracket;
mod brent;
mod config;
mod error;
mod event;
mod search;
mod solution;


pub use action::Action;
pub use bracket::BracketError;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::{Event, StepKind};
pub use solution::{Root, Status};

use strand_core::{Observer, ResidualFunction};

use crate::equation::evaluate::evaluate;

use bracket::{Bounds, Bracket, Point};
use brent::Brent;
use search::Expansion;

/// Where the root search begins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Start {
    /// A single point near the root.
    Guess(f64),
    /// Two points whose residuals differ in sign.
    Bracket([f64; 2]),
}

impl From<f64> for Start {
    fn from(guess: f64) -> Self {
        Self::Guess(guess)
    }
}

impl From<[f64; 2]> for Start {
    fn from(bracket: [f64; 2]) -> Self {
        Self::Bracket(bracket)
    }
}

/// Finds a root of `residual` from a guess or a bracket.
///
/// See the [module docs](self) for the algorithm and observer events.
///
/// # Errors
///
/// Returns an error if the guess or bracket is invalid, no sign change can be
/// found around a guess, the residual function fails or returns a
/// non-finite value, or the iteration limit is reached.
pub fn solve<R, Obs>(
    residual: &R,
    start: impl Into<Start>,
    config: &Config,
    mut observer: Obs,
) -> Result<Root, Error>
where
    R: ResidualFunction,
    Obs: Observer<Event, Action>,
{
    let mut evals = 0;

    let bracket = match start.into() {
        Start::Bracket(bracket) => {
            let [left, right] = Bounds::new(bracket)?.as_array();

            evals += 1;
            let left = Point::new(left, evaluate(residual, left)?);
            if left.residual.abs() <= config.residual_tol() {
                return Ok(immediate(left, evals, [left.x, right]));
            }

            evals += 1;
            let right = Point::new(right, evaluate(residual, right)?);
            if right.residual.abs() <= config.residual_tol() {
                return Ok(immediate(right, evals, [left.x, right.x]));
            }

            Bracket::new(left, right)?
        }
        Start::Guess(guess) => {
            if !guess.is_finite() {
                return Err(Error::NonFiniteGuess { value: guess });
            }

            evals += 1;
            let guess = Point::new(guess, evaluate(residual, guess)?);
            if guess.residual.abs() <= config.residual_tol() {
                return Ok(immediate(guess, evals, [guess.x, guess.x]));
            }

            match search::expand(residual, guess, config, &mut evals)? {
                Expansion::Root(point) => {
                    let [left, right] = [point.x.min(guess.x), point.x.max(guess.x)];
                    return Ok(immediate(point, evals, [left, right]));
                }
                Expansion::Bracket(bracket) => bracket,
            }
        }
    };

    let mut brent = Brent::new(bracket);
    let mut iters = 0;

    loop {
        if brent.is_converged(config) {
            return Ok(finish(&brent, brent.current(), Status::Converged, iters, evals));
        }

        if iters >= config.max_iters() {
            return Err(Error::NoConvergence {
                iters,
                bracket: brent.bracket(),
            });
        }

        let (x, kind) = brent.propose(config);
        evals += 1;
        let point = Point::new(x, evaluate(residual, x)?);
        iters += 1;

        brent.advance(point);

        let event = Event {
            iter: iters,
            x,
            residual: point.residual,
            bracket: brent.bracket(),
            kind,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            let best = brent.best();
            return Ok(finish(&brent, best, Status::StoppedByObserver, iters, evals));
        }
    }
}

/// Finds a root without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<R>(
    residual: &R,
    start: impl Into<Start>,
    config: &Config,
) -> Result<Root, Error>
where
    R: ResidualFunction,
{
    solve(residual, start, config, ())
}

/// Builds a root for a point that met the residual tolerance before iterating.
fn immediate(point: Point, evals: usize, bracket: [f64; 2]) -> Root {
    Root {
        status: Status::Converged,
        x: point.x,
        residual: point.residual,
        iters: 0,
        evals,
        bracket,
    }
}

fn finish(brent: &Brent, point: Point, status: Status, iters: usize, evals: usize) -> Root {
    Root {
        status,
        x: point.x,
        residual: point.residual,
        iters,
        evals,
        bracket: brent.bracket(),
    }
}
