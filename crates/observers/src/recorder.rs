//! Observers that collect solver output for later inspection or rendering.
//!
//! Recorders never stop a solver. Pass `&mut recorder` so the collected
//! points are available after the solve returns.

use strand_core::Observer;
use strand_solvers::transient::Sample;

use crate::traits::{HasResidual, HasState, HasTime};

/// Collects `(time, state)` samples from integrator events.
///
/// Events without a state, such as rejected adaptive steps, are skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeRecorder<S> {
    samples: Vec<Sample<S>>,
}

impl<S> TimeRecorder<S> {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
        }
    }

    /// Returns the recorded samples in event order.
    #[must_use]
    pub fn samples(&self) -> &[Sample<S>] {
        &self.samples
    }

    /// Consumes the recorder, returning its samples.
    #[must_use]
    pub fn into_samples(self) -> Vec<Sample<S>> {
        self.samples
    }
}

impl<S> Default for TimeRecorder<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, E, A> Observer<E, A> for TimeRecorder<S>
where
    S: Clone,
    E: HasTime + HasState<S>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(state) = event.state() {
            self.samples.push(Sample::new(event.time(), state.clone()));
        }
        None
    }
}

impl<S, E, A> Observer<E, A> for &mut TimeRecorder<S>
where
    S: Clone,
    E: HasTime + HasState<S>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}

/// Collects `[x, residual]` points from root finder events.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResidualRecorder {
    points: Vec<[f64; 2]>,
}

impl ResidualRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded `[x, residual]` points in event order.
    #[must_use]
    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }
}

impl<E: HasResidual, A> Observer<E, A> for ResidualRecorder {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.points.push([event.x(), event.residual()]);
        None
    }
}

impl<E: HasResidual, A> Observer<E, A> for &mut ResidualRecorder {
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
