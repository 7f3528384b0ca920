use super::Config;

/// Exponent of the step-size update, one over the order of the error estimate plus one.
const EXPONENT: f64 = 1.0 / 5.0;

/// Returns the factor to apply to the step after an accepted step.
///
/// The factor is `safety * error^(-1/5)` capped at `max_factor`. It never
/// exceeds 1 when the previous attempt was rejected.
pub(super) fn grow(config: &Config, error: f64, after_rejection: bool) -> f64 {
    let factor = if error > 0.0 {
        (config.safety() * error.powf(-EXPONENT)).min(config.max_factor())
    } else {
        config.max_factor()
    };

    if after_rejection {
        factor.min(1.0)
    } else {
        factor.max(1.0)
    }
}

/// Returns the factor to apply to the step after a rejected step.
///
/// The factor is `safety * error^(-1/5)` floored at `min_factor`.
/// Non-finite errors shrink by `min_factor`.
pub(super) fn shrink(config: &Config, error: f64) -> f64 {
    if !error.is_finite() {
        return config.min_factor();
    }
    (config.safety() * error.powf(-EXPONENT)).clamp(config.min_factor(), 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn zero_error_grows_by_max_factor() {
        assert_relative_eq!(grow(&Config::default(), 0.0, false), 5.0);
    }

    #[test]
    fn growth_after_rejection_is_capped() {
        assert_relative_eq!(grow(&Config::default(), 1e-6, true), 1.0);
    }

    #[test]
    fn accepted_step_never_shrinks() {
        // 0.9 * 1^(-1/5) = 0.9 would shrink; accepted steps keep their size.
        assert_relative_eq!(grow(&Config::default(), 1.0, false), 1.0);
    }

    #[test]
    fn moderate_error_follows_formula() {
        let error = 0.01_f64;
        let expected = 0.9 * error.powf(-0.2);
        assert_relative_eq!(grow(&Config::default(), error, false), expected);
    }

    #[test]
    fn shrink_is_floored() {
        assert_relative_eq!(shrink(&Config::default(), 1e12), 0.2);
        assert_relative_eq!(shrink(&Config::default(), f64::INFINITY), 0.2);
    }

    #[test]
    fn shrink_follows_formula() {
        let error = 2.0_f64;
        assert_relative_eq!(shrink(&Config::default(), error), 0.9 * error.powf(-0.2));
    }
}
