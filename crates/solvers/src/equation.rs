//! Solvers for scalar equations `g(x) = 0`.
//!
//! A [`ResidualFunction`] maps `x` to a residual. Solvers in this module drive
//! that residual toward zero.
//!
//! # Solvers
//!
//! - [`root`] — Brent's method on a bracket, with an outward search when
//!   starting from a single guess
//!
//! [`ResidualFunction`]: strand_core::ResidualFunction

mod evaluate;

pub use evaluate::{ResidualError, ResidualErrorKind};

pub mod root;
