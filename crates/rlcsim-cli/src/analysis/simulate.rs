//! Single-engine simulation runner.

use anyhow::Result;
use rlcsim_core::CircuitParams;
use rlcsim_solver::CircuitSolver;

use crate::output::{self, OutputFormat};

/// Run one engine and render its three waveforms.
pub fn run_simulation(
    solver: &dyn CircuitSolver,
    params: &CircuitParams,
    format: OutputFormat,
) -> Result<()> {
    let waveforms = solver.solve(params);
    output::render(solver.name(), &waveforms, format)
}
