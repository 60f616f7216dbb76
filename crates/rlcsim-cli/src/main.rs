//! Command-line interface for the rlcsim RLC ring-down simulator.
//!
//! Gathers a parameter set from flags or a JSON file, validates it,
//! and hands it to one or both engines. All validation happens here;
//! the engine itself is never invoked with out-of-domain input.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rlcsim_core::CircuitParams;
use rlcsim_solver::{AnalyticalSolver, Rk4Solver};

mod analysis;
mod output;

use output::OutputFormat;

/// Which engine(s) to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Method {
    /// Closed-form damped-oscillator solution.
    Analytical,
    /// Classical 4th-order Runge-Kutta integration.
    Rk4,
    /// Run both engines and report their deviation.
    Both,
}

#[derive(Debug, Parser)]
#[command(
    name = "rlcsim",
    version,
    about = "Simulate charge, current, and induced magnetic field in a \
             series RLC circuit with linearly ramped resistance"
)]
struct Cli {
    /// Inductance L (H).
    #[arg(short = 'L', long, default_value_t = 1.0)]
    inductance: f64,

    /// Capacitance C (F).
    #[arg(short = 'C', long, default_value_t = 1e-4)]
    capacitance: f64,

    /// Resistance at the start of the run (Ohm).
    #[arg(long, default_value_t = 0.5)]
    r_start: f64,

    /// Resistance at the end of the run (Ohm).
    #[arg(long, default_value_t = 2.0)]
    r_end: f64,

    /// Initial capacitor charge Q0 (C).
    #[arg(long, default_value_t = 1e-3)]
    charge: f64,

    /// Initial circuit current I0 (A).
    #[arg(long, default_value_t = 0.0)]
    current: f64,

    /// Integration time step (s).
    #[arg(long, default_value_t = 1e-3)]
    tstep: f64,

    /// Number of integration steps (the run emits steps + 1 samples).
    #[arg(long, default_value_t = 1000)]
    steps: usize,

    /// JSON parameter file; overrides the individual parameter flags.
    #[arg(long, value_name = "FILE")]
    params: Option<PathBuf>,

    /// Engine selection.
    #[arg(long, value_enum, default_value = "both")]
    method: Method,

    /// Output rendering.
    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,
}

impl Cli {
    fn circuit_params(&self) -> Result<CircuitParams> {
        if let Some(path) = &self.params {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read parameter file {}", path.display()))?;
            let params: CircuitParams = serde_json::from_str(&text)
                .with_context(|| format!("failed to parse parameter file {}", path.display()))?;
            return Ok(params);
        }

        Ok(CircuitParams {
            inductance: self.inductance,
            capacitance: self.capacitance,
            initial_resistance: self.r_start,
            final_resistance: self.r_end,
            initial_charge: self.charge,
            initial_current: self.current,
            time_step: self.tstep,
            num_steps: self.steps,
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let params = cli.circuit_params()?;
    params
        .validate()
        .context("invalid simulation parameters")?;

    match cli.method {
        Method::Analytical => analysis::run_simulation(&AnalyticalSolver, &params, cli.format),
        Method::Rk4 => analysis::run_simulation(&Rk4Solver, &params, cli.format),
        Method::Both => analysis::run_compare(&params, cli.format),
    }
}
