//! Pitched-baseball components for the Loft trajectory framework.
//!
//! - [`projectile`] — equations of motion for a ball under gravity and air
//!   drag, plus the ground-contact stop condition
//! - [`pitch`] — the shooting problem: solve for the release speed that puts
//!   the ball in the strike zone

pub mod pitch;
pub mod projectile;
