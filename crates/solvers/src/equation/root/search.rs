use std::f64::consts::SQRT_2;

use strand_core::ResidualFunction;

use crate::equation::evaluate::evaluate;

use super::{
    Config, Error,
    bracket::{Bracket, Point},
};

/// Outcome of searching outward from a guess.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum Expansion {
    /// A trial point already met the residual tolerance.
    Root(Point),
    /// A sign change was found.
    Bracket(Bracket),
}

/// Searches outward from `guess` for a sign change.
///
/// Trial points sit at `guess ± dx`, starting from `dx = |guess| / 50`
/// (or `1 / 50` at zero) and growing by `√2` per attempt. Each trial is
/// compared against the sign at the guess, so the returned bracket has the
/// guess as one end.
///
/// # Errors
///
/// Returns [`Error::NoSignChangeFound`] if no sign change appears within
/// the configured number of expansions or a trial point overflows, and
/// [`Error::Residual`] if an evaluation fails.
pub(super) fn expand<R>(
    residual: &R,
    guess: Point,
    config: &Config,
    evals: &mut usize,
) -> Result<Expansion, Error>
where
    R: ResidualFunction,
{
    #[allow(clippy::float_cmp)]
    let mut dx = if guess.x == 0.0 {
        1.0 / 50.0
    } else {
        guess.x.abs() / 50.0
    };

    for attempt in 1..=config.max_expansions() {
        for x in [guess.x - dx, guess.x + dx] {
            if !x.is_finite() {
                return Err(Error::NoSignChangeFound {
                    guess: guess.x,
                    attempts: attempt,
                });
            }

            *evals += 1;
            let point = Point::new(x, evaluate(residual, x)?);

            if point.residual.abs() <= config.residual_tol() {
                return Ok(Expansion::Root(point));
            }

            if point.sign() != guess.sign() {
                let (left, right) = if x < guess.x {
                    (point, guess)
                } else {
                    (guess, point)
                };
                return Ok(Expansion::Bracket(Bracket::new(left, right)?));
            }
        }

        dx *= SQRT_2;
    }

    Err(Error::NoSignChangeFound {
        guess: guess.x,
        attempts: config.max_expansions(),
    })
}
