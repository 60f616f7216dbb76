//! Classical 4th-order Runge-Kutta solver.

use nalgebra::Vector2;
use rlcsim_core::{CircuitParams, CircuitWaveforms};

use crate::resistance::ResistanceRamp;
use crate::{CircuitSolver, magnetic_field};

/// Integrates `L q'' + R(t) q' + q/C = 0` as the first-order system
///
/// ```text
/// dq/dt = I
/// dI/dt = -(R/L) I - (1/(LC)) q
/// ```
///
/// with fixed-step classical RK4. The waveform entry at index `i` is
/// the state at `i * dt`: the initial sample reflects the configured
/// initial conditions exactly, and the step from sample `i` to `i + 1`
/// holds the resistance at the value interpolated for step `i` across
/// all four stages.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rk4Solver;

impl Rk4Solver {
    /// One RK4 step of size `dt` from `state = (q, I)`, with the
    /// resistance frozen for the whole step.
    fn step(
        state: Vector2<f64>,
        dt: f64,
        resistance: f64,
        inductance: f64,
        inv_lc: f64,
    ) -> Vector2<f64> {
        let deriv = |s: Vector2<f64>| {
            Vector2::new(s[1], -(resistance / inductance) * s[1] - inv_lc * s[0])
        };

        let k1 = deriv(state) * dt;
        let k2 = deriv(state + k1 / 2.0) * dt;
        let k3 = deriv(state + k2 / 2.0) * dt;
        let k4 = deriv(state + k3) * dt;

        state + (k1 + 2.0 * k2 + 2.0 * k3 + k4) / 6.0
    }
}

impl CircuitSolver for Rk4Solver {
    fn name(&self) -> &'static str {
        "rk4"
    }

    fn solve(&self, params: &CircuitParams) -> CircuitWaveforms {
        log::debug!(
            "rk4 solve: {} steps, dt = {:.3e} s",
            params.num_steps,
            params.time_step
        );

        let ramp = ResistanceRamp::from_params(params);
        let inv_lc = 1.0 / (params.inductance * params.capacitance);
        let dt = params.time_step;

        let mut state = Vector2::new(params.initial_charge, params.initial_current);
        let mut out = CircuitWaveforms::with_capacity(params.num_samples());

        for step in 0..=params.num_steps {
            let time = step as f64 * dt;

            out.charge.push(time, state[0]);
            out.current.push(time, state[1]);
            out.magnetic_field.push(time, magnetic_field(state[1]));

            if step < params.num_steps {
                state = Self::step(state, dt, ramp.at(step), params.inductance, inv_lc);
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn underdamped() -> CircuitParams {
        CircuitParams {
            inductance: 1.0,
            capacitance: 1.0,
            initial_resistance: 0.1,
            final_resistance: 0.1,
            initial_charge: 1.0,
            initial_current: 0.0,
            time_step: 0.01,
            num_steps: 3,
        }
    }

    #[test]
    fn initial_sample_is_exactly_the_initial_conditions() {
        let params = CircuitParams {
            initial_charge: 0.25,
            initial_current: -1.5,
            ..underdamped()
        };
        let out = Rk4Solver.solve(&params);
        assert_eq!(out.charge[0].time, 0.0);
        assert_eq!(out.charge[0].value, 0.25);
        assert_eq!(out.current[0].value, -1.5);
        assert_eq!(out.magnetic_field[0].value, magnetic_field(-1.5));
    }

    #[test]
    fn series_lengths_and_time_grid() {
        let out = Rk4Solver.solve(&underdamped());
        assert_eq!(out.charge.len(), 4);
        assert_eq!(out.current.len(), 4);
        assert_eq!(out.magnetic_field.len(), 4);
        for (i, p) in out.current.points().iter().enumerate() {
            assert_relative_eq!(p.time, i as f64 * 0.01, epsilon = 1e-15);
        }
    }

    #[test]
    fn charge_decays_below_initial_value() {
        let out = Rk4Solver.solve(&underdamped());
        assert_eq!(out.charge[1].time, 0.01);
        let q1 = out.charge[1].value;
        assert!(q1 < 1.0, "q(dt) = {q1} should decay below 1.0");
        assert!(q1 > 0.999, "q(dt) = {q1} decayed far too fast");
    }

    #[test]
    fn zero_resistance_conserves_energy() {
        // Ideal LC: E = q^2/(2C) + L I^2 / 2 must hold to within RK4
        // truncation error over the whole run.
        let params = CircuitParams {
            initial_resistance: 0.0,
            final_resistance: 0.0,
            time_step: 0.01,
            num_steps: 1000,
            ..underdamped()
        };
        let out = Rk4Solver.solve(&params);

        let energy = |q: f64, i: f64| {
            0.5 * q * q / params.capacitance + 0.5 * params.inductance * i * i
        };
        let e0 = energy(out.charge[0].value, out.current[0].value);
        for (q_pt, i_pt) in out.charge.points().iter().zip(out.current.points()) {
            let drift = (energy(q_pt.value, i_pt.value) - e0).abs() / e0;
            assert!(drift < 1e-6, "energy drift {drift} at t = {}", q_pt.time);
        }
    }

    #[test]
    fn zero_resistance_matches_pure_cosine() {
        // R = 0, L = C = 1, I0 = 0 => q(t) = cos(t) exactly.
        let params = CircuitParams {
            initial_resistance: 0.0,
            final_resistance: 0.0,
            time_step: 0.01,
            num_steps: 500,
            ..underdamped()
        };
        let out = Rk4Solver.solve(&params);
        for p in out.charge.points() {
            assert_relative_eq!(p.value, p.time.cos(), epsilon = 1e-8);
        }
    }

    #[test]
    fn ramped_resistance_damps_faster_than_its_start_value() {
        // Ramping R upward must bleed energy faster than holding it at
        // the starting value.
        let flat = CircuitParams {
            initial_resistance: 0.1,
            final_resistance: 0.1,
            time_step: 0.01,
            num_steps: 2000,
            ..underdamped()
        };
        let ramped = CircuitParams {
            final_resistance: 2.0,
            ..flat
        };

        let q_flat = Rk4Solver.solve(&flat);
        let q_ramped = Rk4Solver.solve(&ramped);

        let peak = |w: &rlcsim_core::Waveform| {
            w.values().iter().skip(1000).fold(0.0_f64, |m, v| m.max(v.abs()))
        };
        assert!(
            peak(&q_ramped.charge) < peak(&q_flat.charge),
            "upward ramp should decay the envelope faster"
        );
    }

    #[test]
    fn zero_steps_yields_single_initial_sample() {
        let params = CircuitParams {
            num_steps: 0,
            ..underdamped()
        };
        let out = Rk4Solver.solve(&params);
        assert_eq!(out.charge.len(), 1);
        assert_eq!(out.charge[0].time, 0.0);
        assert_eq!(out.charge[0].value, 1.0);
        assert_eq!(out.current[0].value, 0.0);
    }
}
