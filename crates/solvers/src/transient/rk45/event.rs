/// Events emitted by the adaptive solver, one per attempted step.
#[derive(Debug, Clone)]
pub enum Event<S> {
    /// A step met the tolerance and was added to the trajectory.
    Accepted {
        /// Number of accepted steps so far, including this one.
        step: usize,
        /// Time at the end of the step.
        time: f64,
        /// Size of the step.
        size: f64,
        /// Scaled error estimate (at most 1 for accepted steps).
        error: f64,
        /// State at the end of the step.
        state: S,
    },

    /// A step exceeded the tolerance and will be retried with a smaller size.
    Rejected {
        /// Time at the start of the rejected step.
        time: f64,
        /// Size of the rejected step.
        size: f64,
        /// Scaled error estimate (infinite if the trial overflowed).
        error: f64,
    },
}

impl<S> Event<S> {
    /// Returns the time the solver has reached.
    #[must_use]
    pub fn time(&self) -> f64 {
        match self {
            Event::Accepted { time, .. } | Event::Rejected { time, .. } => *time,
        }
    }

    /// Returns the size of the attempted step.
    #[must_use]
    pub fn size(&self) -> f64 {
        match self {
            Event::Accepted { size, .. } | Event::Rejected { size, .. } => *size,
        }
    }

    /// Returns the scaled error estimate of the attempted step.
    #[must_use]
    pub fn error(&self) -> f64 {
        match self {
            Event::Accepted { error, .. } | Event::Rejected { error, .. } => *error,
        }
    }
}
