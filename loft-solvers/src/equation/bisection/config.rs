/// Tuning for the bisection solver.
///
/// Each iteration costs one residual evaluation, and a residual can be
/// expensive — the pitch speed search integrates a full trajectory per
/// call — so `max_iters` bounds work as much as precision. The defaults
/// resolve a root to near machine precision well inside the iteration cap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Maximum number of bracket halvings before giving up.
    pub max_iters: usize,

    /// Absolute tolerance on the bracket width.
    pub x_abs_tol: f64,

    /// Relative tolerance on the bracket width, scaled by the midpoint.
    pub x_rel_tol: f64,

    /// Residual magnitude accepted as a root.
    pub residual_tol: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            x_abs_tol: 1e-12,
            x_rel_tol: 1e-12,
            residual_tol: 1e-12,
        }
    }
}

impl Config {
    /// Checks that every tolerance is usable before a solve starts.
    ///
    /// # Errors
    ///
    /// Names the offending tolerance if it is negative or non-finite.
    pub fn validate(&self) -> Result<(), &'static str> {
        let tolerances = [
            (self.x_abs_tol, "x_abs_tol is not a usable tolerance"),
            (self.x_rel_tol, "x_rel_tol is not a usable tolerance"),
            (self.residual_tol, "residual_tol is not a usable tolerance"),
        ];

        for (value, reason) in tolerances {
            if !value.is_finite() || value < 0.0 {
                return Err(reason);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn rejects_negative_or_non_finite_tolerances() {
        let bad = [
            Config {
                x_abs_tol: -1e-9,
                ..Config::default()
            },
            Config {
                x_rel_tol: f64::NAN,
                ..Config::default()
            },
            Config {
                residual_tol: f64::INFINITY,
                ..Config::default()
            },
        ];

        for config in bad {
            assert!(config.validate().is_err());
        }
    }

    #[test]
    fn validation_message_names_the_field() {
        let config = Config {
            x_rel_tol: -0.5,
            ..Config::default()
        };

        assert_eq!(
            config.validate(),
            Err("x_rel_tol is not a usable tolerance")
        );
    }
}
