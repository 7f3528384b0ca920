//! Core traits and types for the Strand toolkit.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`RateFunction`] — a callable `(time, state) -> rate` driving an ODE
//! - [`ResidualFunction`] — a callable `x -> residual` whose zero is sought
//! - [`Pure`] — adapts infallible closures to either callable trait
//! - [`State`] — a value with scalar components that can be stepped
//! - [`Observer`] — receives solver events and optionally returns control actions

mod observer;
mod pure;
mod rate;
mod residual;
mod state;

pub use observer::Observer;
pub use pure::Pure;
pub use rate::RateFunction;
pub use residual::ResidualFunction;
pub use state::State;
