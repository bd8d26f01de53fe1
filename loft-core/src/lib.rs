//! Core traits and types for the Loft trajectory framework.
//!
//! This crate defines the shared abstractions that solvers and models build
//! on:
//!
//! - [`Derivative`] — one rate-of-change function per state component
//! - [`StopCondition`] and [`Control`] — per-step early-termination test
//! - [`Trajectory`], [`Sample`], [`Status`] — the recorded state history
//!   returned by a solver

mod derivative;
mod stop;
mod trajectory;

pub use derivative::{Derivative, DynError};
pub use stop::{Control, StopCondition};
pub use trajectory::{Sample, Status, Trajectory};
