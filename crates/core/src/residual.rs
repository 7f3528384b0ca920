/// A scalar function whose zero a root finder searches for.
///
/// Closures `Fn(f64) -> Result<f64, E>` implement this trait directly.
/// Wrap an infallible closure `Fn(f64) -> f64` in [`Pure`](crate::Pure).
pub trait ResidualFunction {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the residual at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the residual cannot be computed at `x`.
    fn residual(&self, x: f64) -> Result<f64, Self::Error>;
}

impl<E, F> ResidualFunction for F
where
    F: Fn(f64) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn residual(&self, x: f64) -> Result<f64, Self::Error> {
        self(x)
    }
}
