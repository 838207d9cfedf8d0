//! Common utilities and types used throughout the MIPS32 simulator.
//!
//! This module provides fundamental building blocks that are shared across all
//! components of the simulator. It includes:
//! 1. **Constants:** Word geometry shared by the memory image and the fetch path.
//! 2. **Error Handling:** The fatal fault taxonomy returned by every stage.
//! 3. **Register Management:** The general-purpose register file.

/// Common constants used throughout the simulator.
pub mod constants;

/// Fault types returned by the load path and the per-cycle stages.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{PC_REGION_MASK, REG_COUNT, WORD_BYTES};
pub use error::Fault;
pub use reg::RegisterFile;
