//! Simulation layer: binary loading and the cycle driver.

/// Binary image loader.
pub mod loader;

/// The cycle driver.
pub mod simulator;

pub use simulator::{CycleReport, Simulator};
