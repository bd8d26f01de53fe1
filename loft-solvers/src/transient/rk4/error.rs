use loft_core::DynError;
use thiserror::Error;

/// Errors that can occur during RK4 integration.
///
/// The first three variants are input-validation failures reported before
/// any stepping begins; the rest abort the run at the step where they are
/// detected.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no derivative functions were provided")]
    EmptySystem,

    #[error("system has {derivatives} derivative functions but the initial state has {state} components")]
    DimensionMismatch { derivatives: usize, state: usize },

    #[error("step count must be at least 1")]
    ZeroStepCount,

    #[error("derivative {component} returned a non-finite value ({value}) at x = {x}")]
    NonFiniteDerivative { component: usize, x: f64, value: f64 },

    #[error("state component {component} became non-finite at x = {x}")]
    NonFiniteState { component: usize, x: f64 },

    #[error("derivative {component} failed at x = {x}")]
    Derivative {
        component: usize,
        x: f64,
        #[source]
        source: DynError,
    },

    #[error("stop condition failed at x = {x}")]
    Stop {
        x: f64,
        #[source]
        source: DynError,
    },
}
