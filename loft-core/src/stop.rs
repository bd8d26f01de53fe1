use crate::DynError;

/// Tells a solver whether to keep stepping after a completed step.
///
/// An explicit two-variant enum rather than a boolean, so that "keep going"
/// and "terminate" cannot be inverted by mistake at a call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Continue stepping.
    Continue,

    /// Record the just-completed step and terminate.
    Halt,
}

/// A per-step early-termination test.
///
/// A solver evaluates the condition once after each completed step, passing
/// the new independent-variable value, the new state, and the shared
/// parameter block. Returning [`Control::Halt`] keeps that step's sample and
/// stops the run; the condition is never consulted again afterward.
///
/// The receiver is `&mut self` so stateful conditions (step counters,
/// hysteresis) work. Closures `FnMut(f64, &[f64], &P) -> Control` implement
/// this trait automatically, and `()` is the no-op condition that never
/// halts.
pub trait StopCondition<P> {
    /// Checks whether the solver should halt at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the condition itself cannot be evaluated.
    fn check(&mut self, x: f64, y: &[f64], params: &P) -> Result<Control, DynError>;
}

/// Blanket implementation for stop-condition closures.
impl<P, F> StopCondition<P> for F
where
    F: FnMut(f64, &[f64], &P) -> Control,
{
    fn check(&mut self, x: f64, y: &[f64], params: &P) -> Result<Control, DynError> {
        Ok(self(x, y, params))
    }
}

/// The no-op condition that never halts.
impl<P> StopCondition<P> for () {
    fn check(&mut self, _x: f64, _y: &[f64], _params: &P) -> Result<Control, DynError> {
        Ok(Control::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_condition_halts_on_negative_height() {
        let mut below_ground =
            |_x: f64, y: &[f64], _p: &()| if y[0] < 0.0 { Control::Halt } else { Control::Continue };

        assert_eq!(below_ground.check(0.0, &[1.4], &()).unwrap(), Control::Continue);
        assert_eq!(below_ground.check(1.0, &[-0.2], &()).unwrap(), Control::Halt);
    }

    #[test]
    fn stateful_condition_counts_steps() {
        let mut calls = 0usize;
        let mut after_three = move |_x: f64, _y: &[f64], _p: &()| {
            calls += 1;
            if calls >= 3 { Control::Halt } else { Control::Continue }
        };

        assert_eq!(after_three.check(0.0, &[], &()).unwrap(), Control::Continue);
        assert_eq!(after_three.check(0.0, &[], &()).unwrap(), Control::Continue);
        assert_eq!(after_three.check(0.0, &[], &()).unwrap(), Control::Halt);
    }

    #[test]
    fn unit_condition_never_halts() {
        let mut none = ();
        assert_eq!(none.check(0.0, &[f64::MAX], &()).unwrap(), Control::Continue);
    }
}
