//! CPU core: architectural state and the per-cycle stages.
//!
//! The core is split the same way the cycle is:
//! 1. **State:** [`Machine`] owns the register file, the program counter, and
//!    the flat memory image.
//! 2. **Stages:** One function per stage (fetch, decode, execute, pc update,
//!    memory access, writeback), each touching exactly the state its contract
//!    allows.

/// Architectural machine state.
pub mod machine;

/// Flat word-addressed memory image.
pub mod memory;

/// The per-cycle stage functions.
pub mod stages;

pub use machine::Machine;
pub use memory::Memory;
