/// A single `(time, state)` point of a trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Sample<S> {
    pub time: f64,
    pub state: S,
}

impl<S> Sample<S> {
    /// Creates a new sample.
    pub fn new(time: f64, state: S) -> Self {
        Self { time, state }
    }
}

/// An ordered sequence of samples produced by an integrator.
///
/// Times are strictly increasing, and the first sample is exactly the
/// initial condition the integrator was given. Solvers are the only
/// producers, so a trajectory is never empty.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Trajectory<S> {
    samples: Vec<Sample<S>>,
}

/// Upper bound on the samples reserved up front; longer runs grow as they go.
const MAX_RESERVED: usize = 1 << 16;

impl<S> Trajectory<S> {
    /// Starts a trajectory at the initial condition.
    ///
    /// `capacity` is only a hint and is capped at `MAX_RESERVED`.
    pub(crate) fn start(time: f64, state: S, capacity: usize) -> Self {
        let mut samples = Vec::with_capacity(capacity.clamp(1, MAX_RESERVED));
        samples.push(Sample::new(time, state));
        Self { samples }
    }

    /// Appends a sample later than the current last sample.
    pub(crate) fn push(&mut self, time: f64, state: S) {
        debug_assert!(time > self.last().time, "trajectory times must increase");
        self.samples.push(Sample::new(time, state));
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false; a trajectory holds at least its initial condition.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns the initial condition.
    #[must_use]
    pub fn first(&self) -> &Sample<S> {
        &self.samples[0]
    }

    /// Returns the final sample.
    #[must_use]
    pub fn last(&self) -> &Sample<S> {
        &self.samples[self.samples.len() - 1]
    }

    /// Returns all samples in time order.
    #[must_use]
    pub fn samples(&self) -> &[Sample<S>] {
        &self.samples
    }

    /// Iterates over the samples in time order.
    pub fn iter(&self) -> std::slice::Iter<'_, Sample<S>> {
        self.samples.iter()
    }

    /// Returns the sample times.
    #[must_use]
    pub fn times(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.time).collect()
    }

    /// Returns references to the sampled states.
    #[must_use]
    pub fn states(&self) -> Vec<&S> {
        self.samples.iter().map(|s| &s.state).collect()
    }

    /// Consumes the trajectory, returning its samples.
    #[must_use]
    pub fn into_samples(self) -> Vec<Sample<S>> {
        self.samples
    }
}

impl<'a, S> IntoIterator for &'a Trajectory<S> {
    type Item = &'a Sample<S>;
    type IntoIter = std::slice::Iter<'a, Sample<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn starts_with_initial_condition() {
        let trajectory = Trajectory::start(1.5, 4.0, 0);

        assert_eq!(trajectory.len(), 1);
        assert!(!trajectory.is_empty());
        assert_eq!(trajectory.first(), trajectory.last());
        assert_relative_eq!(trajectory.first().time, 1.5);
        assert_relative_eq!(trajectory.first().state, 4.0);
    }

    #[test]
    fn capacity_hint_is_capped() {
        let trajectory = Trajectory::start(0.0, 1.0, usize::MAX);

        assert_eq!(trajectory.len(), 1);
        assert!(trajectory.samples.capacity() <= MAX_RESERVED);
    }

    #[test]
    fn push_appends_in_order() {
        let mut trajectory = Trajectory::start(0.0, [0.0, 1.0], 3);
        trajectory.push(0.5, [1.0, 1.0]);
        trajectory.push(1.0, [2.0, 1.0]);

        assert_eq!(trajectory.times(), vec![0.0, 0.5, 1.0]);
        assert_eq!(trajectory.states()[2], &[2.0, 1.0]);
        assert_eq!((&trajectory).into_iter().count(), 3);
        assert_eq!(trajectory.into_samples()[1], Sample::new(0.5, [1.0, 1.0]));
    }
}
