use strand_core::{RateFunction, State};

use crate::transient::{RateError, evaluate::evaluate};

use super::{Config, tableau::*};

/// A completed trial step.
#[derive(Debug, Clone)]
pub(super) struct Step<S> {
    /// Fifth-order state at the end of the step.
    pub(super) state: S,
    /// Rate at the end of the step, reused as the first stage of the next.
    pub(super) rate: S,
    /// RMS of the local error scaled by the tolerances; accept when `<= 1`.
    pub(super) error: f64,
}

/// Outcome of a trial step.
pub(super) enum Trial<S> {
    /// All stages evaluated; the step carries its error estimate.
    Completed(Step<S>),
    /// A stage produced non-finite values, so the step was too large.
    Overflowed,
}

/// Attempts one Dormand–Prince step of size `h` from `(t, y)`.
///
/// `k1` is the rate at `(t, y)`. Six further rate evaluations are made; the
/// last one, at the fifth-order solution, becomes `k1` of the next step.
///
/// # Errors
///
/// Returns a [`RateError`] if a stage evaluation fails or has the wrong shape.
/// Non-finite stage rates are reported as [`Trial::Overflowed`] instead.
pub(super) fn attempt<S, R>(
    rate: &R,
    t: f64,
    y: &S,
    k1: &S,
    h: f64,
    config: &Config,
    evaluations: &mut usize,
) -> Result<Trial<S>, RateError>
where
    S: State,
    R: RateFunction<S>,
{
    let mut stage = |time: f64, state: S| -> Result<Option<S>, RateError> {
        *evaluations += 1;
        match evaluate(rate, time, &state) {
            Ok(k) => Ok(Some(k)),
            Err(err) if err.kind.is_non_finite() => Ok(None),
            Err(err) => Err(err),
        }
    };

    macro_rules! stage {
        ($time:expr, $state:expr) => {
            match stage($time, $state)? {
                Some(k) => k,
                None => return Ok(Trial::Overflowed),
            }
        };
    }

    let k2 = stage!(t + C2 * h, combine(y, h, &[(A21, k1)]));
    let k3 = stage!(t + C3 * h, combine(y, h, &[(A31, k1), (A32, &k2)]));
    let k4 = stage!(
        t + C4 * h,
        combine(y, h, &[(A41, k1), (A42, &k2), (A43, &k3)])
    );
    let k5 = stage!(
        t + C5 * h,
        combine(y, h, &[(A51, k1), (A52, &k2), (A53, &k3), (A54, &k4)])
    );
    let k6 = stage!(
        t + h,
        combine(
            y,
            h,
            &[(A61, k1), (A62, &k2), (A63, &k3), (A64, &k4), (A65, &k5)]
        )
    );

    let y5 = combine(
        y,
        h,
        &[(B1, k1), (B3, &k3), (B4, &k4), (B5, &k5), (B6, &k6)],
    );
    if y5.components().iter().any(|v| !v.is_finite()) {
        return Ok(Trial::Overflowed);
    }

    let k7 = stage!(t + h, y5.clone());

    let stages = [
        (E1, k1.components()),
        (E3, k3.components()),
        (E4, k4.components()),
        (E5, k5.components()),
        (E6, k6.components()),
        (E7, k7.components()),
    ];
    let error = scaled_rms(y.components(), y5.components(), config, |i| {
        h * stages.iter().map(|(e, k)| e * k[i]).sum::<f64>()
    });

    Ok(Trial::Completed(Step {
        state: y5,
        rate: k7,
        error,
    }))
}

/// Returns `y + h * sum(a_j * k_j)`.
fn combine<S: State>(y: &S, h: f64, terms: &[(f64, &S)]) -> S {
    terms
        .iter()
        .fold(y.clone(), |acc, (a, k)| acc.scaled_add(h * a, k))
}

/// RMS of `error(i) / (abs_tol + rel_tol * max(|y_i|, |y_new_i|))`.
///
/// An empty state has zero error.
fn scaled_rms<F>(y: &[f64], y_new: &[f64], config: &Config, error: F) -> f64
where
    F: Fn(usize) -> f64,
{
    if y.is_empty() {
        return 0.0;
    }

    let sum: f64 = y
        .iter()
        .zip(y_new)
        .enumerate()
        .map(|(i, (old, new))| {
            let scale = config.abs_tol() + config.rel_tol() * old.abs().max(new.abs());
            (error(i) / scale).powi(2)
        })
        .sum();

    #[allow(clippy::cast_precision_loss)]
    let n = y.len() as f64;
    let rms = (sum / n).sqrt();

    if rms.is_nan() { f64::INFINITY } else { rms }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use strand_core::Pure;

    fn complete<S>(trial: Trial<S>) -> Step<S> {
        match trial {
            Trial::Completed(step) => step,
            Trial::Overflowed => panic!("step should complete"),
        }
    }

    #[test]
    fn exact_for_quartic_polynomial() {
        // dy/dt = 4t^3 has solution t^4, which a fifth-order step reproduces.
        let rate = Pure(|t: f64, _y: &f64| 4.0 * t.powi(3));
        let mut evaluations = 0;

        let step = complete(
            attempt(&rate, 1.0, &1.0, &4.0, 0.5, &Config::default(), &mut evaluations)
                .expect("rate is valid"),
        );

        assert_relative_eq!(step.state, 1.5_f64.powi(4), epsilon = 1e-12);
        assert_relative_eq!(step.rate, 4.0 * 1.5_f64.powi(3), epsilon = 1e-12);
        assert_eq!(evaluations, 6);
    }

    #[test]
    fn error_estimate_is_small_for_smooth_problem() {
        let rate = Pure(|_t: f64, y: &f64| -y);
        let mut evaluations = 0;

        let step = complete(
            attempt(&rate, 0.0, &1.0, &-1.0, 0.1, &Config::default(), &mut evaluations)
                .expect("rate is valid"),
        );

        assert_relative_eq!(step.state, (-0.1_f64).exp(), epsilon = 1e-7);
        assert!(step.error >= 0.0);
        assert!(step.error < 1.0);
    }

    #[test]
    fn error_estimate_grows_with_step() {
        let rate = Pure(|_t: f64, y: &f64| -y);
        let mut evaluations = 0;
        let config = Config::default();

        let small = complete(
            attempt(&rate, 0.0, &1.0, &-1.0, 0.1, &config, &mut evaluations).expect("valid"),
        );
        let large = complete(
            attempt(&rate, 0.0, &1.0, &-1.0, 1.0, &config, &mut evaluations).expect("valid"),
        );

        assert!(large.error > small.error);
    }

    #[test]
    fn non_finite_stage_overflows() {
        let rate = Pure(|t: f64, _y: &f64| if t > 0.0 { f64::INFINITY } else { 1.0 });
        let mut evaluations = 0;

        let trial = attempt(&rate, 0.0, &0.0, &1.0, 0.1, &Config::default(), &mut evaluations)
            .expect("overflow is not an error");

        assert!(matches!(trial, Trial::Overflowed));
    }

    #[test]
    fn combine_applies_weights() {
        let y = [1.0, 2.0];
        let k = [1.0, -1.0];
        let next = combine(&y, 0.5, &[(2.0, &k), (1.0, &k)]);
        assert_relative_eq!(next.as_slice(), [2.5, 0.5].as_slice());
    }

    #[test]
    fn scaled_rms_of_empty_state_is_zero() {
        assert_relative_eq!(scaled_rms(&[], &[], &Config::default(), |_| 1.0), 0.0);
    }
}
