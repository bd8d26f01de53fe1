//! The pitch shooting problem.
//!
//! Given the distance to the plate, the release height and angle, and a
//! target height in the strike zone, find the release speed whose trajectory
//! passes the plate at the target height. The trajectory itself comes from
//! the RK4 solver; the speed search wraps it in a bisection root find whose
//! residual is the height error at the plate.

use loft_core::{Control, DynError, Trajectory};
use loft_solvers::{equation::bisection, transient::rk4};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uom::si::{
    angle::degree,
    f64::{Angle, Length},
    length::meter,
};

use crate::projectile::{self, Ball, RX, RY};

/// Steps used for each trajectory integration inside the speed search.
const STEPS: usize = 2000;

/// Geometry of one pitch.
///
/// Defaults are the textbook setup: 18.5 m to the plate, release 1.4 m above
/// the ground at 1 degree above horizontal, aiming for the strike zone at
/// 0.9 m.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pitch {
    pub plate_distance: Length,
    pub release_height: Length,
    pub release_angle: Angle,
    pub strike_height: Length,
}

impl Default for Pitch {
    fn default() -> Self {
        Self {
            plate_distance: Length::new::<meter>(18.5),
            release_height: Length::new::<meter>(1.4),
            release_angle: Angle::new::<degree>(1.0),
            strike_height: Length::new::<meter>(0.9),
        }
    }
}

impl Pitch {
    /// Sets the plate distance in SI units (m).
    #[must_use]
    pub fn plate_distance_si(mut self, distance: f64) -> Self {
        self.plate_distance = Length::new::<meter>(distance);
        self
    }

    /// Sets the release height in SI units (m).
    #[must_use]
    pub fn release_height_si(mut self, height: f64) -> Self {
        self.release_height = Length::new::<meter>(height);
        self
    }

    /// Sets the release angle in degrees above horizontal.
    #[must_use]
    pub fn release_angle_deg(mut self, angle: f64) -> Self {
        self.release_angle = Angle::new::<degree>(angle);
        self
    }

    /// Sets the target strike height in SI units (m).
    #[must_use]
    pub fn strike_height_si(mut self, height: f64) -> Self {
        self.strike_height = Length::new::<meter>(height);
        self
    }
}

/// Errors that can occur while solving for the pitch speed.
#[derive(Debug, Error)]
pub enum Error {
    #[error("ball never reached the plate at {distance} m (release speed {speed} m/s)")]
    PlateNotReached { distance: f64, speed: f64 },

    #[error("speed search failed")]
    Search(#[from] bisection::Error),
}

/// Integrates one pitched trajectory at the given release speed.
///
/// The run starts at `(0, release_height)` with the speed split along the
/// release angle, and halts once the ball passes the plate distance or drops
/// below the ground. The time budget is twice the level-flight time to the
/// plate, so the trajectory always ends at one of the two stop events for
/// any positive speed.
///
/// # Errors
///
/// Returns an error if the integration fails; see [`rk4::solve`].
pub fn simulate(
    ball: &Ball,
    pitch: &Pitch,
    speed: f64,
    steps: usize,
) -> Result<Trajectory, rk4::Error> {
    let theta = pitch.release_angle.value;
    let distance = pitch.plate_distance.value;

    let initial = [
        0.0,
        speed * theta.cos(),
        pitch.release_height.value,
        speed * theta.sin(),
    ];
    let t_end = 2.0 * distance / (speed * theta.cos());

    let past_plate_or_grounded = |t: f64, y: &[f64], ball: &Ball| {
        if y[RX] >= distance {
            Control::Halt
        } else {
            projectile::below_ground(t, y, ball)
        }
    };

    rk4::solve(
        &projectile::equations_of_motion(),
        &initial,
        steps,
        0.0,
        t_end,
        ball,
        past_plate_or_grounded,
    )
}

/// Height of the trajectory where it crosses the plate distance.
///
/// Linearly interpolates between the two samples bracketing the crossing.
/// Returns `None` if the trajectory never reaches the plate (the ball hit
/// the ground short of it).
#[must_use]
pub fn height_at_plate(trajectory: &Trajectory, distance: f64) -> Option<f64> {
    let samples = &trajectory.samples;
    if samples[0].y[RX] >= distance {
        return Some(samples[0].y[RY]);
    }

    samples.windows(2).find_map(|pair| {
        let (before, after) = (&pair[0], &pair[1]);
        if after.y[RX] < distance {
            return None;
        }
        let span = after.y[RX] - before.y[RX];
        let frac = if span > 0.0 {
            (distance - before.y[RX]) / span
        } else {
            1.0
        };
        Some(before.y[RY] + frac * (after.y[RY] - before.y[RY]))
    })
}

/// Solves for the release speed that puts the ball at the strike height.
///
/// `bracket` bounds the speed search in m/s; both endpoints must be positive
/// and must straddle the solution (too slow on one side, too fast on the
/// other).
///
/// # Errors
///
/// Returns an error if the search bracket is invalid, a trajectory inside
/// the search fails to reach the plate, or the root find fails.
pub fn solve_speed(
    ball: &Ball,
    pitch: &Pitch,
    bracket: [f64; 2],
    config: &bisection::Config,
) -> Result<f64, Error> {
    let distance = pitch.plate_distance.value;
    let strike = pitch.strike_height.value;

    let residual = |speed: f64| -> Result<f64, DynError> {
        let trajectory = simulate(ball, pitch, speed, STEPS)?;
        let height = height_at_plate(&trajectory, distance)
            .ok_or(Error::PlateNotReached { distance, speed })?;
        Ok(height - strike)
    };

    let solution = bisection::solve(residual, bracket, config)?;
    Ok(solution.x)
}
