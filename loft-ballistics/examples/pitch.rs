//! Solves the pitched-baseball shooting problem and prints the trajectory.
//!
//! Run with `cargo run --example pitch`.

use loft_ballistics::{
    pitch::{self, Pitch},
    projectile::{Ball, RX, RY, VX, VY},
};
use loft_solvers::equation::bisection;
use uom::si::angle::degree;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let ball = Ball::default();
    let setup = Pitch::default();

    let speed = pitch::solve_speed(&ball, &setup, [38.0, 60.0], &bisection::Config::default())?;

    println!("pitched baseball under gravity and air drag");
    println!("  plate distance : {:7.3} m", setup.plate_distance.value);
    println!("  release height : {:7.3} m", setup.release_height.value);
    println!(
        "  release angle  : {:7.3} deg",
        setup.release_angle.get::<degree>()
    );
    println!("  strike height  : {:7.3} m", setup.strike_height.value);
    println!("  pitch speed    : {:7.3} m/s", speed);
    println!();

    let trajectory = pitch::simulate(&ball, &setup, speed, 200)?;
    for sample in trajectory.samples.iter().step_by(20) {
        println!(
            "  t = {:6.4} s   x = {:6.2} m   y = {:5.3} m",
            sample.x, sample.y[RX], sample.y[RY]
        );
    }

    let last = trajectory.last();
    let final_speed = (last.y[VX] * last.y[VX] + last.y[VY] * last.y[VY]).sqrt();
    println!();
    println!(
        "  at the plate: t = {:.4} s, speed = {:.2} m/s",
        last.x, final_speed
    );

    Ok(())
}
