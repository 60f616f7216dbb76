//! Dual-engine comparison runner.
//!
//! Runs the closed-form and RK4 engines on the same parameter set and
//! reports how far apart their waveforms land. With a constant
//! resistance and matching initial conditions the deviation is pure
//! integrator error; with an active ramp it also exposes the closed
//! form's frozen-coefficient assumption.

use anyhow::Result;
use rlcsim_core::{CircuitParams, Waveform};
use rlcsim_solver::{AnalyticalSolver, CircuitSolver, Rk4Solver};

use crate::output::{self, OutputFormat};

/// Run both engines and render their results plus deviation statistics.
pub fn run_compare(params: &CircuitParams, format: OutputFormat) -> Result<()> {
    let analytical = AnalyticalSolver.solve(params);
    let numerical = Rk4Solver.solve(params);

    if format == OutputFormat::Json {
        let doc = serde_json::json!({
            "analytical": analytical,
            "rk4": numerical,
            "deviation": {
                "charge": deviation(&analytical.charge, &numerical.charge),
                "current": deviation(&analytical.current, &numerical.current),
                "magnetic_field":
                    deviation(&analytical.magnetic_field, &numerical.magnetic_field),
            },
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    output::render(AnalyticalSolver.name(), &analytical, format)?;
    output::render(Rk4Solver.name(), &numerical, format)?;

    // CSV consumers get the statistics as comment rows.
    let prefix = match format {
        OutputFormat::Csv => "# ",
        _ => "",
    };

    println!("{prefix}Deviation (analytical vs rk4, {} points)", analytical.len());
    for (name, a, b) in [
        ("charge", &analytical.charge, &numerical.charge),
        ("current", &analytical.current, &numerical.current),
        (
            "magnetic_field",
            &analytical.magnetic_field,
            &numerical.magnetic_field,
        ),
    ] {
        match (a.max_abs_delta(b), a.rms_delta(b)) {
            (Some(max), Some(rms)) => {
                println!("{prefix}  {name:>14}: max {max:.6e}  rms {rms:.6e}");
            }
            _ => println!("{prefix}  {name:>14}: no samples to compare"),
        }
    }

    Ok(())
}

fn deviation(a: &Waveform, b: &Waveform) -> serde_json::Value {
    serde_json::json!({
        "max_abs": a.max_abs_delta(b),
        "rms": a.rms_delta(b),
    })
}
