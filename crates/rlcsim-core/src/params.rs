//! Simulation parameters and caller-side validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Parameter validation errors.
///
/// Produced by [`CircuitParams::validate`]. The engine never returns
/// these: validation is the caller's job, performed before a solver is
/// invoked.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamsError {
    /// Inductance must be strictly positive.
    #[error("inductance must be > 0 H (got {0})")]
    NonPositiveInductance(f64),
    /// Capacitance must be strictly positive.
    #[error("capacitance must be > 0 F (got {0})")]
    NonPositiveCapacitance(f64),
    /// Resistance endpoints must be non-negative.
    #[error("resistance must be >= 0 Ohm (got {0})")]
    NegativeResistance(f64),
    /// Time step must be strictly positive.
    #[error("time step must be > 0 s (got {0})")]
    NonPositiveTimeStep(f64),
    /// A parameter must be a finite number.
    #[error("{name} must be finite (got {value})")]
    NonFinite {
        /// Parameter name as exposed to the user.
        name: &'static str,
        /// The offending value.
        value: f64,
    },
}

/// Full description of one simulation run.
///
/// The resistance ramps linearly from `initial_resistance` at step 0 to
/// `final_resistance` at step `num_steps`; either direction of ramp is
/// valid.
///
/// # Preconditions
///
/// The engine performs no validation and no defensive checks: it is
/// pure floating-point arithmetic over these fields. Running a solver
/// with `inductance = 0` or `capacitance = 0` divides by zero and
/// propagates `Inf`/`NaN` silently through the output series. Callers
/// must reject out-of-domain input via [`CircuitParams::validate`]
/// before invoking a solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircuitParams {
    /// Inductance L (H).
    pub inductance: f64,
    /// Capacitance C (F).
    pub capacitance: f64,
    /// Resistance at step 0 (Ohm).
    pub initial_resistance: f64,
    /// Resistance at the final step (Ohm).
    pub final_resistance: f64,
    /// Capacitor charge at t = 0 (C).
    pub initial_charge: f64,
    /// Circuit current at t = 0 (A).
    pub initial_current: f64,
    /// Fixed integration time step (s).
    pub time_step: f64,
    /// Number of integration steps. The run produces `num_steps + 1`
    /// samples per series, including the initial one.
    pub num_steps: usize,
}

impl CircuitParams {
    /// Check the parameter domain constraints.
    ///
    /// Returns the first violated constraint. A run with
    /// `num_steps = 0` is valid and produces a single sample.
    pub fn validate(&self) -> Result<(), ParamsError> {
        let finite_fields = [
            ("inductance", self.inductance),
            ("capacitance", self.capacitance),
            ("initial resistance", self.initial_resistance),
            ("final resistance", self.final_resistance),
            ("initial charge", self.initial_charge),
            ("initial current", self.initial_current),
            ("time step", self.time_step),
        ];
        for (name, value) in finite_fields {
            if !value.is_finite() {
                return Err(ParamsError::NonFinite { name, value });
            }
        }

        if self.inductance <= 0.0 {
            return Err(ParamsError::NonPositiveInductance(self.inductance));
        }
        if self.capacitance <= 0.0 {
            return Err(ParamsError::NonPositiveCapacitance(self.capacitance));
        }
        if self.initial_resistance < 0.0 {
            return Err(ParamsError::NegativeResistance(self.initial_resistance));
        }
        if self.final_resistance < 0.0 {
            return Err(ParamsError::NegativeResistance(self.final_resistance));
        }
        if self.time_step <= 0.0 {
            return Err(ParamsError::NonPositiveTimeStep(self.time_step));
        }
        Ok(())
    }

    /// Number of samples each output series will contain.
    pub fn num_samples(&self) -> usize {
        self.num_steps + 1
    }

    /// Time of the final sample (s).
    pub fn end_time(&self) -> f64 {
        self.num_steps as f64 * self.time_step
    }
}

impl Default for CircuitParams {
    /// A runnable demonstration setup: an underdamped ring-down with
    /// the resistance ramping from 0.5 to 2 Ohm over one second.
    fn default() -> Self {
        Self {
            inductance: 1.0,
            capacitance: 1e-4,
            initial_resistance: 0.5,
            final_resistance: 2.0,
            initial_charge: 1e-3,
            initial_current: 0.0,
            time_step: 1e-3,
            num_steps: 1000,
        }
    }
}
