use thiserror::Error;

/// Configuration for the root finder.
///
/// The default allows 400 bracket iterations. Brent's method falls back to
/// bisection on residuals that vary over many orders of magnitude, and each
/// bisection gains one bit, so brackets spanning hundreds of decades (such
/// as `[0, 1e100]`) may need a larger `max_iters`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Config {
    max_iters: usize,
    x_abs_tol: f64,
    x_rel_tol: f64,
    residual_tol: f64,
    max_expansions: usize,
}

/// Errors that can occur when validating a root finder config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("x_abs_tol must be finite and non-negative")]
    XAbs,

    #[error("x_rel_tol must be finite and non-negative")]
    XRel,

    #[error("residual_tol must be finite and non-negative")]
    Residual,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 400,
            x_abs_tol: 1e-12,
            x_rel_tol: 4.0 * f64::EPSILON,
            residual_tol: 1e-12,
            max_expansions: 64,
        }
    }
}

impl Config {
    /// Creates a new config with validated tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if any tolerance is negative or non-finite.
    pub fn new(
        max_iters: usize,
        x_abs_tol: f64,
        x_rel_tol: f64,
        residual_tol: f64,
    ) -> Result<Self, ConfigError> {
        if !x_abs_tol.is_finite() || x_abs_tol < 0.0 {
            return Err(ConfigError::XAbs);
        }
        if !x_rel_tol.is_finite() || x_rel_tol < 0.0 {
            return Err(ConfigError::XRel);
        }
        if !residual_tol.is_finite() || residual_tol < 0.0 {
            return Err(ConfigError::Residual);
        }

        Ok(Self {
            max_iters,
            x_abs_tol,
            x_rel_tol,
            residual_tol,
            ..Self::default()
        })
    }

    /// Sets how many times the guess search may widen before giving up.
    #[must_use]
    pub fn with_max_expansions(self, max_expansions: usize) -> Self {
        Self {
            max_expansions,
            ..self
        }
    }

    /// Returns the maximum number of bracket iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the absolute tolerance for x convergence.
    #[must_use]
    pub fn x_abs_tol(&self) -> f64 {
        self.x_abs_tol
    }

    /// Returns the relative tolerance for x convergence.
    #[must_use]
    pub fn x_rel_tol(&self) -> f64 {
        self.x_rel_tol
    }

    /// Returns the residual magnitude accepted as a root.
    #[must_use]
    pub fn residual_tol(&self) -> f64 {
        self.residual_tol
    }

    /// Returns the maximum number of guess search expansions.
    #[must_use]
    pub fn max_expansions(&self) -> usize {
        self.max_expansions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.max_iters(), 400);
        assert_relative_eq!(config.x_abs_tol(), 1e-12);
        assert_relative_eq!(config.x_rel_tol(), 4.0 * f64::EPSILON);
        assert_relative_eq!(config.residual_tol(), 1e-12);
        assert_eq!(config.max_expansions(), 64);
    }

    #[test]
    fn rejects_bad_tolerances() {
        assert_eq!(Config::new(10, -1.0, 0.0, 0.0), Err(ConfigError::XAbs));
        assert_eq!(Config::new(10, 0.0, f64::NAN, 0.0), Err(ConfigError::XRel));
        assert_eq!(
            Config::new(10, 0.0, 0.0, f64::INFINITY),
            Err(ConfigError::Residual)
        );
    }

    #[test]
    fn zero_tolerances_are_allowed() {
        let config = Config::new(10, 0.0, 0.0, 0.0)
            .expect("valid config")
            .with_max_expansions(3);
        assert_eq!(config.max_iters(), 10);
        assert_eq!(config.max_expansions(), 3);
    }
}
