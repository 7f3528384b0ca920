//! Solvers for initial value problems `dy/dt = f(t, y)`.
//!
//! A [`RateFunction`] supplies the derivative, a [`State`] carries the
//! solution, and each solver returns a [`Trajectory`] of `(time, state)`
//! samples whose first sample is the initial condition.
//!
//! # Solvers
//!
//! - [`euler`] — forward Euler with a fixed step
//! - [`rk45`] — adaptive Dormand–Prince 5(4)
//!
//! [`RateFunction`]: strand_core::RateFunction
//! [`State`]: strand_core::State

mod evaluate;
mod trajectory;

pub use evaluate::{RateError, RateErrorKind};
pub use trajectory::{Sample, Trajectory};

pub mod euler;
pub mod rk45;
