//! Observers that stop a solver early.
//!
//! Each observer works with any solver whose action type implements
//! [`CanStopEarly`]. Pass one by value, or pass `&mut` to inspect it after
//! the solve.
//!
//! The adaptive integrator only acts on actions returned for accepted steps,
//! so a limit reached on a rejected step takes effect at the next accepted
//! one.

use strand_core::Observer;

use crate::traits::{CanStopEarly, HasResidual, HasTime};

/// Stops a solver after a fixed number of events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventLimit {
    max_events: usize,
    seen: usize,
}

impl EventLimit {
    /// Creates a limit that stops on the `max_events`-th event.
    #[must_use]
    pub fn new(max_events: usize) -> Self {
        Self {
            max_events,
            seen: 0,
        }
    }

    /// Returns the number of events observed so far.
    #[must_use]
    pub fn seen(&self) -> usize {
        self.seen
    }
}

impl<E, A: CanStopEarly> Observer<E, A> for EventLimit {
    fn observe(&mut self, _event: &E) -> Option<A> {
        self.seen += 1;
        (self.seen >= self.max_events).then(A::stop_early)
    }
}

impl<E, A: CanStopEarly> Observer<E, A> for &mut EventLimit {
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}

/// Stops an integrator once it reaches a simulation time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeLimit {
    until: f64,
}

impl TimeLimit {
    /// Creates a limit that stops at the first event at or after `until`.
    #[must_use]
    pub fn new(until: f64) -> Self {
        Self { until }
    }
}

impl<E: HasTime, A: CanStopEarly> Observer<E, A> for TimeLimit {
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.time() >= self.until).then(A::stop_early)
    }
}

/// Stops a root finder once the residual is small enough.
///
/// Unlike the solver's own `residual_tol`, this can require a minimum number
/// of iterations before stopping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResidualBelow {
    tolerance: f64,
    min_iters: usize,
    iter: usize,
}

impl ResidualBelow {
    /// Creates an observer that stops when `|residual| < tolerance` after at
    /// least `min_iters` events.
    #[must_use]
    pub fn new(tolerance: f64, min_iters: usize) -> Self {
        Self {
            tolerance,
            min_iters,
            iter: 0,
        }
    }
}

impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for ResidualBelow {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.iter += 1;
        (self.iter >= self.min_iters && event.residual().abs() < self.tolerance)
            .then(A::stop_early)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use strand_core::Pure;
    use strand_solvers::{
        equation::root,
        transient::{euler, rk45},
    };

    #[test]
    fn event_limit_stops_euler() {
        let velocity = Pure(|_t: f64, _y: &f64| 1.0);
        let mut limit = EventLimit::new(3);

        let solution = euler::solve(&velocity, 0.0, 0.0, 0.1, euler::Plan::Steps(10), &mut limit)
            .expect("should solve");

        assert_eq!(solution.status, euler::Status::StoppedByObserver);
        // The initial condition is the first event.
        assert_eq!(solution.trajectory.len(), 3);
        assert_eq!(limit.seen(), 3);
    }

    #[test]
    fn event_limit_stops_root() {
        let quadratic = Pure(|x: f64| x * x - 2.0 * x - 3.0);

        let root = root::solve(&quadratic, [2.0, 4.0], &root::Config::default(), EventLimit::new(1))
            .expect("should stop");

        assert_eq!(root.status, root::Status::StoppedByObserver);
        assert_eq!(root.iters, 1);
    }

    #[test]
    fn time_limit_stops_rk45() {
        let growth = Pure(|_t: f64, y: &f64| 0.2 * y);

        let solution = rk45::solve(
            &growth,
            [0.0, 4.0],
            5.0,
            &rk45::Config::default(),
            TimeLimit::new(1.0),
        )
        .expect("should solve");

        assert_eq!(solution.status, rk45::Status::StoppedByObserver);
        let last = solution.trajectory.last();
        assert!(last.time >= 1.0 && last.time < 4.0);
    }

    #[test]
    fn time_limit_stops_euler() {
        let velocity = Pure(|_t: f64, _y: &f64| 2.0);

        let solution = euler::solve(
            &velocity,
            0.0,
            0.0,
            0.25,
            euler::Plan::Until(10.0),
            TimeLimit::new(1.0),
        )
        .expect("should solve");

        let last = solution.trajectory.last();
        assert_relative_eq!(last.time, 1.0);
        assert_relative_eq!(last.state, 2.0);
    }

    #[test]
    fn residual_below_respects_min_iters() {
        let quadratic = Pure(|x: f64| x * x - 2.0 * x - 3.0);

        let root = root::solve(
            &quadratic,
            [2.0, 4.0],
            &root::Config::default(),
            ResidualBelow::new(1e-2, 1),
        )
        .expect("should stop");

        assert_eq!(root.status, root::Status::StoppedByObserver);
        assert!(root.residual.abs() < 1e-2);

        let late = root::solve(
            &quadratic,
            [2.0, 4.0],
            &root::Config::default(),
            ResidualBelow::new(1.0e6, root.iters + 1),
        )
        .expect("should stop");

        assert_eq!(late.iters, root.iters + 1);
    }
}
