use thiserror::Error;

/// Configuration for the adaptive solver.
///
/// Defaults follow the conventions of general-purpose 4(5) solvers:
/// relative tolerance `1e-3`, absolute tolerance `1e-6`, safety factor `0.9`,
/// step changes limited to `[0.2, 5]` per step, at most 100 000 attempts,
/// and a maximum step of one tenth of the span.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Config {
    rel_tol: f64,
    abs_tol: f64,
    safety: f64,
    min_factor: f64,
    max_factor: f64,
    max_steps: usize,
    initial_step: Option<f64>,
    max_step: Option<f64>,
}

/// Errors that can occur when building an adaptive solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("rel_tol must be finite and non-negative")]
    RelTol,

    #[error("abs_tol must be finite and non-negative")]
    AbsTol,

    #[error("rel_tol and abs_tol cannot both be zero")]
    ZeroTolerance,

    #[error("safety must be in (0, 1]")]
    Safety,

    #[error("min_factor must be in (0, 1)")]
    MinFactor,

    #[error("max_factor must be finite and greater than 1")]
    MaxFactor,

    #[error("initial_step must be finite and positive")]
    InitialStep,

    #[error("max_step must be finite and positive")]
    MaxStep,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rel_tol: 1e-3,
            abs_tol: 1e-6,
            safety: 0.9,
            min_factor: 0.2,
            max_factor: 5.0,
            max_steps: 100_000,
            initial_step: None,
            max_step: None,
        }
    }
}

impl Config {
    /// Creates a config with the given tolerances and default step control.
    ///
    /// # Errors
    ///
    /// Returns an error if either tolerance is negative or non-finite, or if
    /// both are zero.
    pub fn new(rel_tol: f64, abs_tol: f64) -> Result<Self, ConfigError> {
        if !rel_tol.is_finite() || rel_tol < 0.0 {
            return Err(ConfigError::RelTol);
        }
        if !abs_tol.is_finite() || abs_tol < 0.0 {
            return Err(ConfigError::AbsTol);
        }
        if rel_tol == 0.0 && abs_tol == 0.0 {
            return Err(ConfigError::ZeroTolerance);
        }

        Ok(Self {
            rel_tol,
            abs_tol,
            ..Self::default()
        })
    }

    /// Sets the safety factor applied to predicted step sizes.
    ///
    /// # Errors
    ///
    /// Returns an error unless `0 < safety <= 1`.
    pub fn with_safety(self, safety: f64) -> Result<Self, ConfigError> {
        if !(safety > 0.0 && safety <= 1.0) {
            return Err(ConfigError::Safety);
        }
        Ok(Self { safety, ..self })
    }

    /// Sets the bounds on how much the step may shrink or grow at once.
    ///
    /// # Errors
    ///
    /// Returns an error unless `0 < min_factor < 1 < max_factor < inf`.
    pub fn with_factors(self, min_factor: f64, max_factor: f64) -> Result<Self, ConfigError> {
        if !(min_factor > 0.0 && min_factor < 1.0) {
            return Err(ConfigError::MinFactor);
        }
        if !max_factor.is_finite() || max_factor <= 1.0 {
            return Err(ConfigError::MaxFactor);
        }
        Ok(Self {
            min_factor,
            max_factor,
            ..self
        })
    }

    /// Sets the maximum number of step attempts, accepted or rejected.
    #[must_use]
    pub fn with_max_steps(self, max_steps: usize) -> Self {
        Self { max_steps, ..self }
    }

    /// Sets the size of the first attempted step instead of estimating it.
    ///
    /// # Errors
    ///
    /// Returns an error if `step` is not finite and positive.
    pub fn with_initial_step(self, step: f64) -> Result<Self, ConfigError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(ConfigError::InitialStep);
        }
        Ok(Self {
            initial_step: Some(step),
            ..self
        })
    }

    /// Sets the largest step the solver may take.
    ///
    /// # Errors
    ///
    /// Returns an error if `step` is not finite and positive.
    pub fn with_max_step(self, step: f64) -> Result<Self, ConfigError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(ConfigError::MaxStep);
        }
        Ok(Self {
            max_step: Some(step),
            ..self
        })
    }

    /// Returns the relative tolerance.
    #[must_use]
    pub fn rel_tol(&self) -> f64 {
        self.rel_tol
    }

    /// Returns the absolute tolerance.
    #[must_use]
    pub fn abs_tol(&self) -> f64 {
        self.abs_tol
    }

    /// Returns the safety factor.
    #[must_use]
    pub fn safety(&self) -> f64 {
        self.safety
    }

    /// Returns the smallest per-step shrink factor.
    #[must_use]
    pub fn min_factor(&self) -> f64 {
        self.min_factor
    }

    /// Returns the largest per-step growth factor.
    #[must_use]
    pub fn max_factor(&self) -> f64 {
        self.max_factor
    }

    /// Returns the maximum number of step attempts.
    #[must_use]
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// Returns the configured first step, if any.
    #[must_use]
    pub fn initial_step(&self) -> Option<f64> {
        self.initial_step
    }

    /// Returns the largest step for a span of the given length.
    #[must_use]
    pub fn max_step_for(&self, span: f64) -> f64 {
        self.max_step.unwrap_or(0.1 * span)
    }
}
