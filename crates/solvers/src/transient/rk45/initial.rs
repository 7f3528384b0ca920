use strand_core::{RateFunction, State};

use crate::transient::{RateError, evaluate::evaluate};

use super::Config;

/// Estimates a first step size from the initial state and rate.
///
/// Follows the usual starting-step heuristic for explicit Runge–Kutta
/// methods: a first guess from `|y0| / |f0|`, refined by one explicit Euler
/// probe that estimates the second derivative. Norms are scaled by the
/// tolerances. The result never exceeds `max_step`.
///
/// # Errors
///
/// Returns a [`RateError`] if the probe evaluation fails or has the wrong
/// shape. A non-finite probe falls back to the first guess.
pub(super) fn initial_step<S, R>(
    rate: &R,
    t0: f64,
    y0: &S,
    f0: &S,
    config: &Config,
    max_step: f64,
    evaluations: &mut usize,
) -> Result<f64, RateError>
where
    S: State,
    R: RateFunction<S>,
{
    let scale: Vec<f64> = y0
        .components()
        .iter()
        .map(|y| config.abs_tol() + config.rel_tol() * y.abs())
        .collect();

    let d0 = scaled_norm(y0.components(), &scale);
    let d1 = scaled_norm(f0.components(), &scale);

    let h0 = if d0 < 1e-5 || d1 < 1e-5 {
        1e-6
    } else {
        0.01 * d0 / d1
    }
    .min(max_step);

    let y1 = y0.scaled_add(h0, f0);
    *evaluations += 1;
    let f1 = match evaluate(rate, t0 + h0, &y1) {
        Ok(f1) => f1,
        Err(err) if err.kind.is_non_finite() => return Ok(h0),
        Err(err) => return Err(err),
    };

    let change: Vec<f64> = f1
        .components()
        .iter()
        .zip(f0.components())
        .map(|(a, b)| a - b)
        .collect();
    let d2 = scaled_norm(&change, &scale) / h0;

    let h1 = if d1.max(d2) <= 1e-15 {
        (h0 * 1e-3).max(1e-6)
    } else {
        (0.01 / d1.max(d2)).powf(1.0 / 5.0)
    };

    Ok((100.0 * h0).min(h1).min(max_step))
}

/// RMS norm of `values / scale`.
fn scaled_norm(values: &[f64], scale: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let sum: f64 = values
        .iter()
        .zip(scale)
        .map(|(v, s)| (v / s).powi(2))
        .sum();

    #[allow(clippy::cast_precision_loss)]
    let n = values.len() as f64;
    (sum / n).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    use strand_core::Pure;

    #[test]
    fn step_is_positive_and_bounded() {
        let rate = Pure(|_t: f64, y: &f64| 0.2 * y);
        let mut evaluations = 0;

        let h = initial_step(&rate, 0.0, &5.0, &1.0, &Config::default(), 0.4, &mut evaluations)
            .expect("valid rate");

        assert!(h > 0.0);
        assert!(h <= 0.4);
        assert_eq!(evaluations, 1);
    }

    #[test]
    fn fast_dynamics_give_smaller_steps() {
        let slow = Pure(|_t: f64, y: &f64| -y);
        let fast = Pure(|_t: f64, y: &f64| -1000.0 * y);
        let mut evaluations = 0;
        let config = Config::default();

        let h_slow =
            initial_step(&slow, 0.0, &1.0, &-1.0, &config, 10.0, &mut evaluations).expect("valid");
        let h_fast = initial_step(&fast, 0.0, &1.0, &-1000.0, &config, 10.0, &mut evaluations)
            .expect("valid");

        assert!(h_fast < h_slow);
    }

    #[test]
    fn zero_state_and_rate_use_floor() {
        let rate = Pure(|_t: f64, _y: &f64| 0.0);
        let mut evaluations = 0;

        let h = initial_step(&rate, 0.0, &0.0, &0.0, &Config::default(), 1.0, &mut evaluations)
            .expect("valid");

        // h0 = 1e-6, no curvature: h1 = max(1e-9, 1e-6) = 1e-6, so min(1e-4, 1e-6).
        assert!((h - 1e-6).abs() < 1e-18);
    }
}
