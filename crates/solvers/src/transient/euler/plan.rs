use super::Error;

/// How far a fixed-step integration runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Plan {
    /// Take exactly this many steps.
    Steps(usize),

    /// Step until the end time is reached or passed.
    ///
    /// The step count is `ceil((end - start) / dt)`, so the final sample
    /// lands at or just past `end` unless the span is a whole number of steps.
    Until(f64),
}

/// Ratios this close to an integer are treated as that integer, so that
/// rounding in `(end - start) / dt` does not add a spurious step.
const WHOLE_STEP_SLACK: f64 = 1e-9;

impl Plan {
    /// Resolves the plan into a step count for the given start and step size.
    ///
    /// # Errors
    ///
    /// Returns an error if the end time is non-finite, before `start`, or
    /// more steps away than a `usize` can count.
    pub(super) fn steps(self, start: f64, dt: f64) -> Result<usize, Error> {
        match self {
            Plan::Steps(n) => Ok(n),
            Plan::Until(end) => {
                if !end.is_finite() {
                    return Err(Error::NonFiniteTime { value: end });
                }
                if end < start {
                    return Err(Error::EndBeforeStart { start, end });
                }

                let ratio = (end - start) / dt;
                let nearest = ratio.round();
                let steps = if (ratio - nearest).abs() <= WHOLE_STEP_SLACK * nearest.max(1.0) {
                    nearest
                } else {
                    ratio.ceil()
                };

                #[allow(clippy::cast_precision_loss)]
                if steps >= usize::MAX as f64 {
                    return Err(Error::TooManySteps { steps });
                }

                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let steps = steps as usize;
                Ok(steps)
            }
        }
    }
}

impl From<usize> for Plan {
    fn from(steps: usize) -> Self {
        Plan::Steps(steps)
    }
}
