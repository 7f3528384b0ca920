//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasTime`] — integrator events that carry a simulation time
//! - [`HasState`] — integrator events that may carry a state
//! - [`HasResidual`] — root finder events that carry a point and its residual
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use strand_core::Observer;
//! use strand_observers::traits::{CanStopEarly, HasTime};
//!
//! struct StopAfter {
//!     time: f64,
//! }
//!
//! impl<E: HasTime, A: CanStopEarly> Observer<E, A> for StopAfter {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.time() >= self.time).then(A::stop_early)
//!     }
//! }
//! ```

use strand_solvers::{
    equation::root,
    transient::{euler, rk45},
};

/// An event that carries a simulation time.
pub trait HasTime {
    /// Returns the time the integrator has reached.
    fn time(&self) -> f64;
}

/// An event that may carry a state.
pub trait HasState<S> {
    /// Returns the state for this event, or `None` if the event has none
    /// (such as a rejected adaptive step).
    fn state(&self) -> Option<&S>;
}

/// An event that carries a point and its residual.
pub trait HasResidual {
    /// Returns the point that was evaluated.
    fn x(&self) -> f64;

    /// Returns the residual at [`x`](HasResidual::x).
    fn residual(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- euler::Event ---

impl<S> HasTime for euler::Event<S> {
    fn time(&self) -> f64 {
        self.time
    }
}

impl<S> HasState<S> for euler::Event<S> {
    fn state(&self) -> Option<&S> {
        Some(&self.state)
    }
}

// --- rk45::Event ---

impl<S> HasTime for rk45::Event<S> {
    fn time(&self) -> f64 {
        rk45::Event::time(self)
    }
}

impl<S> HasState<S> for rk45::Event<S> {
    fn state(&self) -> Option<&S> {
        match self {
            rk45::Event::Accepted { state, .. } => Some(state),
            rk45::Event::Rejected { .. } => None,
        }
    }
}

// --- root::Event ---

impl HasResidual for root::Event {
    fn x(&self) -> f64 {
        self.x
    }

    fn residual(&self) -> f64 {
        self.residual
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for euler::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for rk45::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for root::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
