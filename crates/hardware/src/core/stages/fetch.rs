//! Instruction Fetch Stage.
//!
//! Reads one 32-bit instruction word from the memory image at the current
//! program counter. Fetching is bounds-checked: an address outside the image
//! or off word alignment is a fatal fault, never a clamped index.

use crate::common::Fault;
use crate::core::Machine;

/// Fetches the instruction word at `addr`.
///
/// # Errors
///
/// Returns [`Fault::InstructionAccessFault`] when `addr` is unaligned or
/// outside the memory image.
pub fn fetch(machine: &Machine, addr: u32) -> Result<u32, Fault> {
    machine
        .mem
        .read(addr)
        .ok_or(Fault::InstructionAccessFault { addr })
}
