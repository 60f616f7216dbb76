//! Simulation engine for the rlcsim RLC ring-down simulator.
//!
//! Two solvers share one contract: given a [`CircuitParams`] value,
//! produce the charge, current, and induced magnetic-field waveforms of
//! a series RLC circuit whose resistance ramps linearly over the run.
//!
//! - [`AnalyticalSolver`] evaluates the closed-form damped-oscillator
//!   solution, re-deriving the damping coefficient from the ramped
//!   resistance at every sample.
//! - [`Rk4Solver`] integrates the governing second-order ODE as a
//!   first-order system with classical 4th-order Runge-Kutta.
//!
//! Both are pure and deterministic: no I/O, no shared state, bounded
//! O(steps) runtime. Callers validate parameters first (see
//! [`CircuitParams::validate`]); the engine propagates `NaN`/`Inf`
//! from out-of-domain input silently rather than trapping it.

pub mod analytical;
pub mod resistance;
pub mod rk4;

use rlcsim_core::{CircuitParams, CircuitWaveforms};

pub use analytical::AnalyticalSolver;
pub use resistance::ResistanceRamp;
pub use rk4::Rk4Solver;

/// Vacuum permeability mu_0 (H/m).
pub const VACUUM_PERMEABILITY: f64 = 4.0e-7 * std::f64::consts::PI;

/// Winding density of the modeled solenoid (turns/m).
///
/// Fixed constant of the field model, not user-configurable.
pub const COIL_TURNS_DENSITY: f64 = 1.0e6;

/// Induced solenoid field (T) for a given circuit current (A).
#[inline]
pub fn magnetic_field(current: f64) -> f64 {
    VACUUM_PERMEABILITY * COIL_TURNS_DENSITY * current
}

/// Common contract of the two simulation engines.
///
/// `solve` is infallible and reentrant; repeated calls with the same
/// parameters produce bit-identical output.
pub trait CircuitSolver {
    /// Short identifier used in output headers and logs.
    fn name(&self) -> &'static str;

    /// Run one simulation, producing `params.num_steps + 1` samples
    /// per waveform with `time[i] = i * time_step`.
    fn solve(&self, params: &CircuitParams) -> CircuitWaveforms;
}
