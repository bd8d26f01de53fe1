/// One recorded integration step: the independent variable and the full
/// state vector at that point.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// The independent variable (usually time).
    pub x: f64,

    /// The dependent variables at this `x`, in system order.
    pub y: Vec<f64>,
}

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Completed all requested steps (or the degenerate zero-span run).
    Complete,

    /// Terminated early because the stop condition returned `Halt`.
    Halted,
}

/// The recorded history of an integration run.
///
/// Samples are stored row-major: each [`Sample`] holds the full state vector
/// at one value of the independent variable, so every component's sequence
/// has the same length and sample `i` of every component shares the same `x`
/// by construction. [`Trajectory::component`] provides the per-component
/// `(x, value)` view.
///
/// A trajectory always contains at least the initial sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    /// How the solver terminated.
    pub status: Status,

    /// History of samples, beginning with the initial state.
    pub samples: Vec<Sample>,

    /// Number of integration steps completed; `samples.len() == steps + 1`.
    pub steps: usize,
}

impl Trajectory {
    /// Number of state components.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.samples[0].y.len()
    }

    /// Number of recorded samples, including the initial one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// A trajectory always holds the initial sample.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The final recorded sample.
    #[must_use]
    pub fn last(&self) -> &Sample {
        self.samples
            .last()
            .unwrap_or_else(|| unreachable!("a trajectory always holds the initial sample"))
    }

    /// Iterates over `(x, value)` pairs for one state component.
    ///
    /// # Panics
    ///
    /// Panics if `component` is out of range for the state vector.
    pub fn component(&self, component: usize) -> impl Iterator<Item = (f64, f64)> + '_ {
        assert!(
            component < self.dim(),
            "component index out of range for state dimension"
        );
        self.samples.iter().map(move |s| (s.x, s.y[component]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_body() -> Trajectory {
        Trajectory {
            status: Status::Complete,
            samples: vec![
                Sample { x: 0.0, y: vec![0.0, 10.0] },
                Sample { x: 0.5, y: vec![4.0, 8.0] },
                Sample { x: 1.0, y: vec![7.0, 6.0] },
            ],
            steps: 2,
        }
    }

    #[test]
    fn component_views_are_index_aligned() {
        let trajectory = two_body();

        let xs: Vec<_> = trajectory.component(0).map(|(x, _)| x).collect();
        let positions: Vec<_> = trajectory.component(0).map(|(_, v)| v).collect();
        let velocities: Vec<_> = trajectory.component(1).map(|(_, v)| v).collect();

        assert_eq!(xs, vec![0.0, 0.5, 1.0]);
        assert_eq!(positions, vec![0.0, 4.0, 7.0]);
        assert_eq!(velocities, vec![10.0, 8.0, 6.0]);
    }

    #[test]
    fn length_tracks_steps() {
        let trajectory = two_body();

        assert_eq!(trajectory.dim(), 2);
        assert_eq!(trajectory.len(), trajectory.steps + 1);
        assert_eq!(trajectory.last().x, 1.0);
    }

    #[test]
    #[should_panic(expected = "component index out of range")]
    fn component_index_is_checked() {
        let trajectory = two_body();
        let _ = trajectory.component(2);
    }
}
