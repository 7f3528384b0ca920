use strand_core::State;

use crate::transient::Trajectory;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Status {
    /// Reached the end of the time span.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// Work counters for an adaptive integration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Stats {
    /// Number of rate function evaluations.
    pub evaluations: usize,

    /// Number of accepted steps.
    pub accepted: usize,

    /// Number of rejected steps.
    pub rejected: usize,
}

/// The result of an adaptive integration.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Solution<S> {
    /// How the solver terminated.
    pub status: Status,

    /// Accepted samples, starting with the initial condition.
    pub trajectory: Trajectory<S>,

    /// Rate at each sample of the trajectory, in the same order.
    pub rates: Vec<S>,

    /// Work counters.
    pub stats: Stats,
}

impl<S: State> Solution<S> {
    /// Returns the state at `time`, interpolated between samples.
    ///
    /// Uses cubic Hermite interpolation from the states and rates at the two
    /// samples around `time`, which keeps the interpolation error well below
    /// the integration tolerance for the step sizes the solver accepts.
    ///
    /// Returns `None` if `time` is outside the integrated span.
    #[must_use]
    pub fn state_at(&self, time: f64) -> Option<S> {
        let samples = self.trajectory.samples();
        let first = self.trajectory.first();
        let last = self.trajectory.last();

        if !(first.time..=last.time).contains(&time) {
            return None;
        }

        let upper = samples.partition_point(|s| s.time < time);
        let right = &samples[upper];
        #[allow(clippy::float_cmp)]
        if right.time == time || upper == 0 {
            return Some(right.state.clone());
        }

        let left = &samples[upper - 1];
        let h = right.time - left.time;
        let theta = (time - left.time) / h;

        // Hermite basis, written relative to the left state.
        let h01 = theta * theta * (3.0 - 2.0 * theta);
        let h10 = theta * (1.0 - theta) * (1.0 - theta);
        let h11 = theta * theta * (theta - 1.0);

        let change = right.state.scaled_add(-1.0, &left.state);
        let state = left
            .state
            .scaled_add(h01, &change)
            .scaled_add(h10 * h, &self.rates[upper - 1])
            .scaled_add(h11 * h, &self.rates[upper]);

        Some(state)
    }
}
