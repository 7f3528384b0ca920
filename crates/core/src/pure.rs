use std::convert::Infallible;

use crate::{RateFunction, ResidualFunction};

/// Adapts an infallible closure into a [`RateFunction`] or [`ResidualFunction`].
///
/// ```
/// use strand_core::{Pure, RateFunction, ResidualFunction};
///
/// let growth = Pure(|_t: f64, y: &f64| 0.2 * y);
/// assert_eq!(growth.rate(0.0, &5.0), Ok(1.0));
///
/// let quadratic = Pure(|x: f64| x * x - 2.0 * x - 3.0);
/// assert_eq!(quadratic.residual(3.0), Ok(0.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Pure<F>(pub F);

impl<S, F> RateFunction<S> for Pure<F>
where
    F: Fn(f64, &S) -> S,
{
    type Error = Infallible;

    fn rate(&self, time: f64, state: &S) -> Result<S, Self::Error> {
        Ok((self.0)(time, state))
    }
}

impl<F> ResidualFunction for Pure<F>
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn residual(&self, x: f64) -> Result<f64, Self::Error> {
        Ok((self.0)(x))
    }
}
