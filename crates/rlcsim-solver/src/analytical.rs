//! Closed-form damped-oscillator solver.

use rlcsim_core::{CircuitParams, CircuitWaveforms};

use crate::resistance::ResistanceRamp;
use crate::{CircuitSolver, magnetic_field};

/// Evaluates the closed-form solution of the damped oscillator
/// `L q'' + R q' + q/C = 0` at each sample time, re-deriving the
/// damping coefficient `gamma = R/(2L)` from the ramped resistance at
/// every step.
///
/// Two quirks of the model are intentional; changing either would
/// alter the published waveforms:
///
/// - The current series is the derivative of the charge formula under
///   a frozen-coefficient assumption. With a non-constant ramp the two
///   series are only locally consistent. The closed form also ignores
///   `initial_current`; it corresponds to `q'(0) = -gamma * Q0`.
/// - Past critical damping (`gamma^2 > 1/(LC)`) the frequency radicand
///   is clamped to zero, giving a plain exponential decay instead of
///   the hyperbolic overdamped branch.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticalSolver;

impl CircuitSolver for AnalyticalSolver {
    fn name(&self) -> &'static str {
        "analytical"
    }

    fn solve(&self, params: &CircuitParams) -> CircuitWaveforms {
        log::debug!(
            "analytical solve: {} steps, dt = {:.3e} s",
            params.num_steps,
            params.time_step
        );

        let ramp = ResistanceRamp::from_params(params);
        let q0 = params.initial_charge;
        let inv_lc = 1.0 / (params.inductance * params.capacitance);

        let mut out = CircuitWaveforms::with_capacity(params.num_samples());

        for step in 0..=params.num_steps {
            let time = step as f64 * params.time_step;

            let gamma = ramp.at(step) / (2.0 * params.inductance);
            let omega = (inv_lc - gamma * gamma).max(0.0).sqrt();

            let decay = (-gamma * time).exp();
            let charge = q0 * decay * (omega * time).cos();
            let current = -decay
                * (gamma * q0 * (omega * time).cos() - omega * q0 * (omega * time).sin());

            out.charge.push(time, charge);
            out.current.push(time, current);
            out.magnetic_field.push(time, magnetic_field(current));
        }

        out
    }
}
