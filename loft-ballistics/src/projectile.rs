//! Equations of motion for a pitched ball under gravity and air drag.
//!
//! The state vector is `[x, vx, y, vy]`: horizontal position and velocity,
//! then vertical position and velocity. Drag follows the standard
//! low-speed sphere model with a linear and a quadratic term,
//!
//! ```text
//! F_drag = (b·d + c·d²·|v|) · |v|
//! ```
//!
//! directed against the velocity, where `d` is the ball diameter and `b`,
//! `c` are air-resistance coefficients.

use loft_core::Control;
use serde::{Deserialize, Serialize};
use uom::si::{
    acceleration::meter_per_second_squared,
    f64::{Acceleration, Length, Mass},
    length::meter,
    mass::kilogram,
};

/// Index of the horizontal position in the state vector.
pub const RX: usize = 0;

/// Index of the horizontal velocity in the state vector.
pub const VX: usize = 1;

/// Index of the vertical position in the state vector.
pub const RY: usize = 2;

/// Index of the vertical velocity in the state vector.
pub const VY: usize = 3;

/// Physical parameters of the ball and its environment.
///
/// Shared read-only by every derivative evaluation during an integration
/// run. Defaults describe a regulation baseball in air at sea level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub gravity: Acceleration,
    pub mass: Mass,
    pub diameter: Length,

    /// Linear drag coefficient `b` in N·s/m², applied per diameter.
    pub linear_drag: f64,

    /// Quadratic drag coefficient `c` in N·s²/m⁴, applied per diameter squared.
    pub quadratic_drag: f64,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            gravity: Acceleration::new::<meter_per_second_squared>(9.81),
            mass: Mass::new::<kilogram>(0.145),
            diameter: Length::new::<meter>(0.075),
            linear_drag: 1.6e-4,
            quadratic_drag: 0.25,
        }
    }
}

impl Ball {
    /// Sets gravity from a `uom::Acceleration`.
    #[must_use]
    pub fn gravity(mut self, gravity: Acceleration) -> Self {
        self.gravity = gravity;
        self
    }

    /// Sets gravity in SI units (m/s²).
    #[must_use]
    pub fn gravity_si(self, gravity: f64) -> Self {
        self.gravity(Acceleration::new::<meter_per_second_squared>(gravity))
    }

    /// Sets mass from a `uom::Mass`.
    #[must_use]
    pub fn mass(mut self, mass: Mass) -> Self {
        self.mass = mass;
        self
    }

    /// Sets mass in SI units (kg).
    #[must_use]
    pub fn mass_si(self, mass: f64) -> Self {
        self.mass(Mass::new::<kilogram>(mass))
    }

    /// Sets diameter from a `uom::Length`.
    #[must_use]
    pub fn diameter(mut self, diameter: Length) -> Self {
        self.diameter = diameter;
        self
    }

    /// Sets diameter in SI units (m).
    #[must_use]
    pub fn diameter_si(self, diameter: f64) -> Self {
        self.diameter(Length::new::<meter>(diameter))
    }

    /// Sets the linear drag coefficient `b`.
    #[must_use]
    pub fn linear_drag(mut self, b: f64) -> Self {
        self.linear_drag = b;
        self
    }

    /// Sets the quadratic drag coefficient `c`.
    #[must_use]
    pub fn quadratic_drag(mut self, c: f64) -> Self {
        self.quadratic_drag = c;
        self
    }

    /// Removes air resistance entirely.
    #[must_use]
    pub fn in_vacuum(self) -> Self {
        self.linear_drag(0.0).quadratic_drag(0.0)
    }

    /// Drag deceleration per unit velocity component at the given speed.
    ///
    /// Multiplying by a velocity component gives that component's drag
    /// deceleration in m/s².
    fn drag_factor(&self, speed: f64) -> f64 {
        let d = self.diameter.value;
        (self.linear_drag * d + self.quadratic_drag * d * d * speed) / self.mass.value
    }
}

/// A derivative function of the ball system.
pub type BallDerivative = fn(f64, &[f64], &Ball) -> f64;

/// The four derivative functions in state order `[x, vx, y, vy]`.
#[must_use]
pub fn equations_of_motion() -> [BallDerivative; 4] {
    [
        horizontal_position,
        horizontal_velocity,
        vertical_position,
        vertical_velocity,
    ]
}

/// Rate of change of horizontal position: the horizontal velocity.
pub fn horizontal_position(_t: f64, y: &[f64], _ball: &Ball) -> f64 {
    y[VX]
}

/// Rate of change of horizontal velocity: drag deceleration along x.
pub fn horizontal_velocity(_t: f64, y: &[f64], ball: &Ball) -> f64 {
    let speed = (y[VX] * y[VX] + y[VY] * y[VY]).sqrt();
    -ball.drag_factor(speed) * y[VX]
}

/// Rate of change of vertical position: the vertical velocity.
pub fn vertical_position(_t: f64, y: &[f64], _ball: &Ball) -> f64 {
    y[VY]
}

/// Rate of change of vertical velocity: drag deceleration along y plus
/// gravity.
pub fn vertical_velocity(_t: f64, y: &[f64], ball: &Ball) -> f64 {
    let speed = (y[VX] * y[VX] + y[VY] * y[VY]).sqrt();
    -ball.drag_factor(speed) * y[VY] - ball.gravity.value
}

/// Stop condition: halt once the ball drops below ground level.
pub fn below_ground(_t: f64, y: &[f64], _ball: &Ball) -> Control {
    if y[RY] < 0.0 {
        Control::Halt
    } else {
        Control::Continue
    }
}
