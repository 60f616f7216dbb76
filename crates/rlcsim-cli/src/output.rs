//! Output rendering for simulation results.

use anyhow::Result;
use clap::ValueEnum;
use rlcsim_core::CircuitWaveforms;

/// Rendering of the three output waveforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns, one row per sample.
    Table,
    /// `time,charge,current,magnetic_field` rows.
    Csv,
    /// Pretty-printed JSON of the full result.
    Json,
}

/// Render one solver's result in the requested format.
pub fn render(label: &str, waveforms: &CircuitWaveforms, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => print_table(label, waveforms),
        OutputFormat::Csv => print_csv(label, waveforms),
        OutputFormat::Json => print_json(waveforms)?,
    }
    Ok(())
}

/// Print the result as an aligned table.
pub fn print_table(label: &str, waveforms: &CircuitWaveforms) {
    println!("{} solution ({} points)", label, waveforms.len());
    println!("==========================================");

    print!("{:>15}", "Time (s)");
    for header in ["Charge (C)", "Current (A)", "B-field (T)"] {
        print!("{header:>15}");
    }
    println!();
    println!("{}", "-".repeat(15 * 4));

    for i in 0..waveforms.len() {
        println!(
            "{:>15.6e}{:>15.6e}{:>15.6e}{:>15.6e}",
            waveforms.charge[i].time,
            waveforms.charge[i].value,
            waveforms.current[i].value,
            waveforms.magnetic_field[i].value,
        );
    }
    println!();
}

/// Print the result as CSV, with the solver label as a comment row.
pub fn print_csv(label: &str, waveforms: &CircuitWaveforms) {
    println!("# {label}");
    println!("time,charge,current,magnetic_field");
    for i in 0..waveforms.len() {
        println!(
            "{:.9e},{:.9e},{:.9e},{:.9e}",
            waveforms.charge[i].time,
            waveforms.charge[i].value,
            waveforms.current[i].value,
            waveforms.magnetic_field[i].value,
        );
    }
}

/// Print the result as pretty JSON.
pub fn print_json(waveforms: &CircuitWaveforms) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(waveforms)?);
    Ok(())
}
