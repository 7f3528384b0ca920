/// A rate function defining an ordinary differential equation.
///
/// Given a time and the current state, a rate function returns the time
/// derivative of the state. The rate has the same type (and, for vector
/// states, the same number of components) as the state itself.
///
/// Solvers take rate functions by reference and call them as often as the
/// method requires, so implementations should be free of side effects that
/// change the result for identical inputs.
///
/// Closures `Fn(f64, &S) -> Result<S, E>` implement this trait directly.
/// Wrap an infallible closure `Fn(f64, &S) -> S` in [`Pure`](crate::Pure).
pub trait RateFunction<S> {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Computes the rate of change of `state` at `time`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the rate cannot be computed.
    fn rate(&self, time: f64, state: &S) -> Result<S, Self::Error>;
}

impl<S, E, F> RateFunction<S> for F
where
    F: Fn(f64, &S) -> Result<S, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn rate(&self, time: f64, state: &S) -> Result<S, Self::Error> {
        self(time, state)
    }
}
