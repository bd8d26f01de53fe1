//! Transient (initial-value) solvers.

pub mod rk4;
