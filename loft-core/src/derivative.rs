/// Boxed error type for caller-supplied functions.
pub type DynError = Box<dyn std::error::Error + Send + Sync>;

/// The rate of change of one state component.
///
/// A coupled first-order ODE system is an ordered list of implementors, one
/// per state component. Each evaluation receives the independent variable,
/// the full current state vector (a derivative may read every component, not
/// just its own), and a shared read-only parameter block.
///
/// Implementations must be pure: they may read but never mutate the state or
/// parameters, and evaluating one must have no effect beyond producing the
/// returned rate.
///
/// Plain closures and `fn` pointers with the shape
/// `Fn(f64, &[f64], &P) -> f64` implement this trait automatically; suppliers
/// that can fail (a domain error inside their own computation) implement it
/// directly and return `Err`, which a solver surfaces to its caller.
pub trait Derivative<P> {
    /// Evaluates the rate of change at `x` given the full state `y`.
    ///
    /// # Errors
    ///
    /// Returns an error if the rate cannot be computed at this point.
    fn eval(&self, x: f64, y: &[f64], params: &P) -> Result<f64, DynError>;
}

/// Blanket implementation for infallible derivative closures.
impl<P, F> Derivative<P> for F
where
    F: Fn(f64, &[f64], &P) -> f64,
{
    fn eval(&self, x: f64, y: &[f64], params: &P) -> Result<f64, DynError> {
        Ok(self(x, y, params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_derivatives() {
        let scale = 3.0;
        let f = move |_x: f64, y: &[f64], gain: &f64| scale * gain * y[0];

        let rate = f.eval(0.0, &[2.0], &10.0).unwrap();

        assert_eq!(rate, 60.0);
    }

    #[test]
    fn fn_pointers_form_homogeneous_systems() {
        fn position(_x: f64, y: &[f64], _p: &()) -> f64 {
            y[1]
        }
        fn velocity(_x: f64, _y: &[f64], _p: &()) -> f64 {
            -9.81
        }

        let system: Vec<fn(f64, &[f64], &()) -> f64> = vec![position, velocity];

        assert_eq!(system[0].eval(0.0, &[0.0, 5.0], &()).unwrap(), 5.0);
        assert_eq!(system[1].eval(0.0, &[0.0, 5.0], &()).unwrap(), -9.81);
    }

    #[test]
    fn named_types_express_fallible_suppliers() {
        enum Component {
            Identity,
            Failing,
        }

        impl Derivative<()> for Component {
            fn eval(&self, _x: f64, y: &[f64], _p: &()) -> Result<f64, DynError> {
                match self {
                    Self::Identity => Ok(y[0]),
                    Self::Failing => Err("out of domain".into()),
                }
            }
        }

        let system = vec![Component::Identity, Component::Failing];

        assert_eq!(system[0].eval(0.0, &[4.0], &()).unwrap(), 4.0);
        assert!(system[1].eval(0.0, &[4.0], &()).is_err());
    }
}
