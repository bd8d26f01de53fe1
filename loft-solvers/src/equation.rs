//! Scalar equation (root-finding) solvers.

pub mod bisection;
