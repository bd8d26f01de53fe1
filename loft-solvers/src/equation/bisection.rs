//! Bisection root finder for scalar equations.
//!
//! Finds an `x` where a caller-supplied residual function crosses zero,
//! given a bracket whose endpoints straddle the root. The residual is a
//! plain fallible closure, so anything that can produce a number — including
//! running a whole trajectory integration — can be driven to a target.

mod config;
mod error;
mod solution;

pub use config::Config;
pub use error::Error;
pub use solution::{Solution, Status};

use loft_core::DynError;

/// Finds a root of `f` within `bracket` using the bisection method.
///
/// The bracket may be given in either order; its endpoints must produce
/// residuals of opposite sign. Iteration stops when the bracket width or the
/// midpoint residual falls inside the configured tolerances, or after
/// `max_iters` halvings, whichever comes first. On hitting the iteration
/// limit the best evaluation seen so far is reported with
/// [`Status::MaxIters`].
///
/// # Errors
///
/// Returns an error if the config or bracket is invalid, the endpoints do
/// not straddle a root, the residual function fails, or a residual is
/// non-finite.
pub fn solve<F>(mut f: F, bracket: [f64; 2], config: &Config) -> Result<Solution, Error>
where
    F: FnMut(f64) -> Result<f64, DynError>,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let (mut left, mut right) = validate_bracket(bracket)?;

    let mut left_residual = eval(&mut f, left)?;
    if left_residual.abs() <= config.residual_tol {
        return Ok(Solution {
            status: Status::Converged,
            x: left,
            residual: left_residual,
            iters: 0,
        });
    }

    let right_residual = eval(&mut f, right)?;
    if right_residual.abs() <= config.residual_tol {
        return Ok(Solution {
            status: Status::Converged,
            x: right,
            residual: right_residual,
            iters: 0,
        });
    }

    if left_residual.signum() == right_residual.signum() {
        return Err(Error::NoBracket {
            left,
            right,
            left_residual,
            right_residual,
        });
    }

    let (mut best_x, mut best_residual) = if left_residual.abs() <= right_residual.abs() {
        (left, left_residual)
    } else {
        (right, right_residual)
    };

    for iter in 1..=config.max_iters {
        let mid = 0.5 * (left + right);
        let mid_residual = eval(&mut f, mid)?;

        let x_converged = (right - left).abs() <= config.x_abs_tol + config.x_rel_tol * mid.abs();
        if x_converged || mid_residual.abs() <= config.residual_tol {
            return Ok(Solution {
                status: Status::Converged,
                x: mid,
                residual: mid_residual,
                iters: iter,
            });
        }

        if mid_residual.abs() < best_residual.abs() {
            best_x = mid;
            best_residual = mid_residual;
        }

        if left_residual.signum() == mid_residual.signum() {
            left = mid;
            left_residual = mid_residual;
        } else {
            right = mid;
        }
    }

    Ok(Solution {
        status: Status::MaxIters,
        x: best_x,
        residual: best_residual,
        iters: config.max_iters,
    })
}

/// Evaluates the residual, rejecting non-finite values.
fn eval<F>(f: &mut F, x: f64) -> Result<f64, Error>
where
    F: FnMut(f64) -> Result<f64, DynError>,
{
    let residual = f(x).map_err(|source| Error::Evaluation { x, source })?;
    if !residual.is_finite() {
        return Err(Error::NonFiniteResidual { x, residual });
    }
    Ok(residual)
}

/// Validates bracket values and returns them in normalized (left < right) order.
fn validate_bracket(bracket: [f64; 2]) -> Result<(f64, f64), Error> {
    let [left, right] = bracket;

    if !left.is_finite() {
        return Err(Error::NonFiniteBracket { value: left });
    }

    if !right.is_finite() {
        return Err(Error::NonFiniteBracket { value: right });
    }

    #[allow(clippy::float_cmp)]
    if left == right {
        return Err(Error::ZeroWidthBracket { value: left });
    }

    if left < right {
        Ok((left, right))
    } else {
        Ok((right, left))
    }
}
