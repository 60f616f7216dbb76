//! Linear resistance ramp shared by both solvers.

use rlcsim_core::CircuitParams;

/// Resistance interpolated linearly over the step index.
///
/// Both solvers sample the same ramp: `at(0)` is the starting
/// resistance and `at(num_steps)` the final one, with either direction
/// of ramp allowed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResistanceRamp {
    start: f64,
    end: f64,
    num_steps: usize,
}

impl ResistanceRamp {
    /// Build the ramp for one run.
    pub fn new(start: f64, end: f64, num_steps: usize) -> Self {
        Self {
            start,
            end,
            num_steps,
        }
    }

    /// Ramp described by a parameter set.
    pub fn from_params(params: &CircuitParams) -> Self {
        Self::new(
            params.initial_resistance,
            params.final_resistance,
            params.num_steps,
        )
    }

    /// Resistance at a step index in `0..=num_steps`.
    ///
    /// A zero-step run has exactly one sample; `at(0)` is the starting
    /// resistance rather than a `0/0` evaluation.
    pub fn at(&self, step: usize) -> f64 {
        if self.num_steps == 0 {
            return self.start;
        }
        self.start + (self.end - self.start) * step as f64 / self.num_steps as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_match_configuration() {
        let ramp = ResistanceRamp::new(0.5, 2.5, 4);
        assert_eq!(ramp.at(0), 0.5);
        assert_eq!(ramp.at(4), 2.5);
    }

    #[test]
    fn interior_points_are_linear() {
        let ramp = ResistanceRamp::new(0.0, 1.0, 10);
        for step in 0..=10 {
            let expected = step as f64 / 10.0;
            assert!((ramp.at(step) - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn descending_ramp() {
        let ramp = ResistanceRamp::new(3.0, 1.0, 2);
        assert_eq!(ramp.at(1), 2.0);
    }

    #[test]
    fn zero_step_run_uses_start_without_dividing() {
        let ramp = ResistanceRamp::new(0.7, 9.0, 0);
        let r = ramp.at(0);
        assert_eq!(r, 0.7);
        assert!(r.is_finite());
    }

    #[test]
    fn constant_ramp_is_flat() {
        let ramp = ResistanceRamp::new(1.5, 1.5, 100);
        assert_eq!(ramp.at(37), 1.5);
    }
}
