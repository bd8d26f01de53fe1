//! End-to-end ballistics scenarios: equations of motion from
//! `loft-ballistics` driven through the RK4 and bisection solvers.

use approx::assert_relative_eq;
use loft_ballistics::{
    pitch::{self, Pitch},
    projectile::{self, Ball, RX, RY},
};
use loft_core::Status;
use loft_solvers::{equation::bisection, transient::rk4};

/// Integrates a lobbed throw until ground contact and returns the carry.
fn carry(ball: &Ball, speed: f64, angle_deg: f64) -> f64 {
    let theta = angle_deg.to_radians();
    let initial = [0.0, speed * theta.cos(), 1.4, speed * theta.sin()];

    let trajectory = rk4::solve(
        &projectile::equations_of_motion(),
        &initial,
        6000,
        0.0,
        6.0,
        ball,
        projectile::below_ground,
    )
    .expect("should integrate");

    assert_eq!(trajectory.status, Status::Halted);
    trajectory.last().y[RX]
}

#[test]
fn drag_shortens_the_carry() {
    let in_air = carry(&Ball::default(), 40.0, 30.0);
    let in_vacuum = carry(&Ball::default().in_vacuum(), 40.0, 30.0);

    assert!(in_air < in_vacuum);
    // Quadratic drag costs a 40 m/s lob well over a tenth of its range.
    assert!(in_air < 0.9 * in_vacuum);
}

#[test]
fn grounded_trajectory_ends_just_below_zero() {
    let ball = Ball::default();
    let theta = 30f64.to_radians();
    let initial = [0.0, 40.0 * theta.cos(), 1.4, 40.0 * theta.sin()];

    let trajectory = rk4::solve(
        &projectile::equations_of_motion(),
        &initial,
        6000,
        0.0,
        6.0,
        &ball,
        projectile::below_ground,
    )
    .expect("should integrate");

    // The post-crossing sample is kept: height is negative but within one
    // step of the surface.
    let last = trajectory.last();
    assert!(last.y[RY] < 0.0);
    assert!(last.y[RY] > -0.1);
}

#[test]
fn solved_pitch_lands_at_the_strike_height() {
    let ball = Ball::default();
    let setup = Pitch::default();

    let speed = pitch::solve_speed(&ball, &setup, [38.0, 60.0], &bisection::Config::default())
        .expect("should solve");

    // A pitched fastball; the drag-free answer is about 45 m/s.
    assert!(speed > 40.0 && speed < 60.0);

    let trajectory = pitch::simulate(&ball, &setup, speed, 2000).expect("should integrate");
    let height = pitch::height_at_plate(&trajectory, setup.plate_distance.value)
        .expect("plate is reached");

    assert_relative_eq!(height, setup.strike_height.value, epsilon = 1e-6);
}

#[test]
fn pitch_geometry_builders_feed_the_solver() {
    let ball = Ball::default().in_vacuum();
    let setup = Pitch::default()
        .plate_distance_si(20.0)
        .release_height_si(1.8)
        .release_angle_deg(2.0)
        .strike_height_si(0.6);

    let speed = pitch::solve_speed(&ball, &setup, [30.0, 70.0], &bisection::Config::default())
        .expect("should solve");

    let trajectory = pitch::simulate(&ball, &setup, speed, 2000).expect("should integrate");
    let height =
        pitch::height_at_plate(&trajectory, 20.0).expect("plate is reached");

    assert_relative_eq!(height, 0.6, epsilon = 1e-6);
}
