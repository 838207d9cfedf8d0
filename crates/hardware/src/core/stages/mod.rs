//! The per-cycle stages.
//!
//! One module per stage, run in this order every cycle:
//! fetch, decode, execute, pc update, memory access, writeback. Each stage is
//! a free function taking the machine state by reference; only the memory
//! access and writeback stages take it mutably.

/// Operand snapshot and decode stage.
pub mod decode;

/// Execute stage (pure computation).
pub mod execute;

/// Instruction fetch stage.
pub mod fetch;

/// Memory access stage (loads and stores).
pub mod memory;

/// Program counter update stage.
pub mod pc;

/// Writeback stage (register commit).
pub mod writeback;

pub use decode::{Operands, decode_stage};
pub use execute::execute;
pub use fetch::fetch;
pub use memory::access;
pub use pc::next_pc;
pub use writeback::writeback;
