//! Fixed-step classical Runge-Kutta (RK4) solver for coupled ODE systems.
//!
//! This module integrates a system of first-order equations
//!
//! ```text
//! dy[i]/dx = f[i](x, y, params)       for i in 0..n
//! ```
//!
//! with a uniform step size, recording the full state history as a
//! [`Trajectory`]. The classical four-stage scheme is fourth-order accurate
//! and exact for polynomial solutions up to degree three. Step size is not
//! adapted; callers control accuracy through the step count.
//!
//! # Example
//!
//! ```ignore
//! use loft_solvers::transient::rk4;
//!
//! let trajectory = rk4::solve(&system, &initial, steps, 0.0, t_end, &params, stop)?;
//!
//! for (t, height) in trajectory.component(2) {
//!     println!("t={t}: {height}");
//! }
//! ```

mod error;

pub use error::Error;

use loft_core::{Control, Derivative, Sample, Status, StopCondition, Trajectory};

/// Integrates a coupled ODE system with fixed-step RK4.
///
/// # Algorithm
///
/// 1. Record the initial `(start, initial_state)` sample.
/// 2. For each of `steps` intervals of width `h = (end - start) / steps`:
///    - Evaluate the four stage slopes in lockstep across all components
///      (`k1` at the current state, `k2` and `k3` at half-step trial states,
///      `k4` at the full-step trial state; each stage sees the complete
///      trial vector built from the previous stage).
///    - Update every component: `y += h/6 * (k1 + 2*k2 + 2*k3 + k4)`, then
///      `x += h`.
///    - Record the new sample.
///    - Check the stop condition at the new point. On [`Control::Halt`] the
///      just-recorded boundary-crossing sample is kept and the run
///      terminates with [`Status::Halted`]. Nothing interpolates back to
///      the crossing.
/// 3. Return the trajectory with [`Status::Complete`] once all steps ran.
///
/// `end` may be less than `start`; the scheme is direction-agnostic and
/// simply steps with negative `h`. `start == end` is the degenerate no-step
/// case: a single initial sample and zero steps.
///
/// Neither `initial_state` nor `params` is mutated, and nothing is retained
/// past the call, so independent runs may share `params` across threads.
///
/// # Errors
///
/// Input validation (reported before any stepping): [`Error::EmptySystem`],
/// [`Error::DimensionMismatch`] if the derivative list and initial state
/// disagree in length, and [`Error::ZeroStepCount`].
///
/// Numerical failure: a derivative evaluating to a non-finite value or a
/// state component becoming non-finite aborts the run at the offending step.
/// Samples recorded before the failure are discarded; the call returns only
/// the error, never a partial trajectory.
///
/// A derivative or stop condition failing on its own propagates as
/// [`Error::Derivative`] or [`Error::Stop`], tagged with where it failed.
pub fn solve<P, D, S>(
    derivatives: &[D],
    initial_state: &[f64],
    steps: usize,
    start: f64,
    end: f64,
    params: &P,
    mut stop: S,
) -> Result<Trajectory, Error>
where
    D: Derivative<P>,
    S: StopCondition<P>,
{
    let n = derivatives.len();
    if n == 0 {
        return Err(Error::EmptySystem);
    }
    if initial_state.len() != n {
        return Err(Error::DimensionMismatch {
            derivatives: n,
            state: initial_state.len(),
        });
    }
    if steps == 0 {
        return Err(Error::ZeroStepCount);
    }
    if let Some(component) = initial_state.iter().position(|v| !v.is_finite()) {
        return Err(Error::NonFiniteState {
            component,
            x: start,
        });
    }

    let mut samples = Vec::with_capacity(steps + 1);
    samples.push(Sample {
        x: start,
        y: initial_state.to_vec(),
    });

    #[allow(clippy::float_cmp)]
    if start == end {
        return Ok(Trajectory {
            status: Status::Complete,
            samples,
            steps: 0,
        });
    }

    let h = (end - start) / steps as f64;

    let mut x = start;
    let mut y = initial_state.to_vec();

    // Stage slopes and the trial state they are evaluated at.
    let mut k1 = vec![0.0; n];
    let mut k2 = vec![0.0; n];
    let mut k3 = vec![0.0; n];
    let mut k4 = vec![0.0; n];
    let mut trial = vec![0.0; n];

    for step in 1..=steps {
        eval_system(derivatives, x, &y, params, &mut k1)?;

        for i in 0..n {
            trial[i] = y[i] + 0.5 * h * k1[i];
        }
        eval_system(derivatives, x + 0.5 * h, &trial, params, &mut k2)?;

        for i in 0..n {
            trial[i] = y[i] + 0.5 * h * k2[i];
        }
        eval_system(derivatives, x + 0.5 * h, &trial, params, &mut k3)?;

        for i in 0..n {
            trial[i] = y[i] + h * k3[i];
        }
        eval_system(derivatives, x + h, &trial, params, &mut k4)?;

        for i in 0..n {
            y[i] += h / 6.0 * (k1[i] + 2.0 * k2[i] + 2.0 * k3[i] + k4[i]);
        }
        x += h;

        if let Some(component) = y.iter().position(|v| !v.is_finite()) {
            return Err(Error::NonFiniteState { component, x });
        }

        samples.push(Sample { x, y: y.clone() });

        let control = stop
            .check(x, &y, params)
            .map_err(|source| Error::Stop { x, source })?;
        if control == Control::Halt {
            return Ok(Trajectory {
                status: Status::Halted,
                samples,
                steps: step,
            });
        }
    }

    Ok(Trajectory {
        status: Status::Complete,
        samples,
        steps,
    })
}

/// Integrates a coupled ODE system to the end of the domain.
///
/// This is a convenience wrapper around [`solve`] with the no-op stop
/// condition.
///
/// # Errors
///
/// Same as [`solve`], minus the stop-condition failure case.
pub fn solve_to_end<P, D>(
    derivatives: &[D],
    initial_state: &[f64],
    steps: usize,
    start: f64,
    end: f64,
    params: &P,
) -> Result<Trajectory, Error>
where
    D: Derivative<P>,
{
    solve(derivatives, initial_state, steps, start, end, params, ())
}

/// Evaluates every derivative at `(x, y)`, writing the slopes into `rates`.
///
/// All components see the same state vector; a stage is fully evaluated
/// before the caller builds the next trial state from it.
fn eval_system<P, D>(
    derivatives: &[D],
    x: f64,
    y: &[f64],
    params: &P,
    rates: &mut [f64],
) -> Result<(), Error>
where
    D: Derivative<P>,
{
    for (i, derivative) in derivatives.iter().enumerate() {
        let rate = derivative
            .eval(x, y, params)
            .map_err(|source| Error::Derivative {
                component: i,
                x,
                source,
            })?;
        if !rate.is_finite() {
            return Err(Error::NonFiniteDerivative {
                component: i,
                x,
                value: rate,
            });
        }
        rates[i] = rate;
    }
    Ok(())
}
