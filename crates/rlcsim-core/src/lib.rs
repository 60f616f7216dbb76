//! Core types for the rlcsim RLC ring-down simulator.
//!
//! This crate defines the shared vocabulary between the simulation
//! engine and its consumers:
//!
//! - [`CircuitParams`] - the immutable description of one simulation run
//! - [`Waveform`] / [`TimePoint`] - sampled time-series output
//! - [`CircuitWaveforms`] - the three series produced per run
//!
//! The engine itself lives in `rlcsim-solver`; output rendering lives
//! in the CLI. Nothing here performs I/O.

pub mod params;
pub mod waveform;

pub use params::{CircuitParams, ParamsError};
pub use waveform::{CircuitWaveforms, TimePoint, Waveform};
