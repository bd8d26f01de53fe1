//! Numerical solvers for the Loft trajectory framework.
//!
//! - [`transient`] — fixed-step time integration of coupled ODE systems
//! - [`equation`] — scalar root finding

pub mod equation;
pub mod transient;
