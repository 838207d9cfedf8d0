//! Global System Constants.
//!
//! This module defines system-wide constants used across the simulator:
//! 1. **Word Geometry:** The byte width shared by instructions and memory words.
//! 2. **Register Geometry:** The architectural register count.
//! 3. **Address Geometry:** The program-counter region mask for jump targets.

/// Size of one MIPS32 instruction (and one memory word) in bytes.
///
/// Every address handled by the simulator is a multiple of this value; the
/// program counter advances by it on every non-control-flow instruction.
pub const WORD_BYTES: u32 = 4;

/// Number of general-purpose registers in the MIPS32 architecture.
pub const REG_COUNT: usize = 32;

/// Mask selecting the 256 MiB region bits (31-28) of the program counter.
///
/// Jump-shape instructions carry only 26 target bits; the region bits are
/// inherited from the address of the jump itself.
pub const PC_REGION_MASK: u32 = 0xF000_0000;
