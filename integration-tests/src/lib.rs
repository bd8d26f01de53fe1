//! Cross-crate integration tests for the Loft workspace.
//!
//! Scenarios live under `tests/` and exercise the solver crates through the
//! ballistics components.
