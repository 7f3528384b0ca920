//! Numerical solvers for the Strand toolkit.
//!
//! - [`transient`] — initial value problems: fixed-step [`transient::euler`]
//!   and adaptive [`transient::rk45`]
//! - [`equation`] — scalar root finding with [`equation::root`]
//!
//! Every solver comes as a `solve` / `solve_unobserved` pair. The observed
//! form takes an [`Observer`](strand_core::Observer) that receives one event
//! per step or evaluation and may stop the solver early.

pub mod equation;
pub mod transient;
