//! Analysis runners: single-engine simulation and dual-engine comparison.

pub mod compare;
pub mod simulate;

pub use compare::run_compare;
pub use simulate::run_simulation;
