//! Reusable observers for the Strand toolkit.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the solvers in `strand-solvers`.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasTime`], [`HasState`], [`HasResidual`], [`CanStopEarly`])
//! - [`limits`] — Observers that stop a solver early
//!   ([`EventLimit`], [`TimeLimit`], [`ResidualBelow`])
//! - [`recorder`] — Observers that collect points for later inspection
//!   ([`TimeRecorder`], [`ResidualRecorder`])
//!
//! [`Observer`]: strand_core::Observer
//! [`HasTime`]: traits::HasTime
//! [`HasState`]: traits::HasState
//! [`HasResidual`]: traits::HasResidual
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod limits;
pub mod recorder;
pub mod traits;

pub use limits::{EventLimit, ResidualBelow, TimeLimit};
pub use recorder::{ResidualRecorder, TimeRecorder};
