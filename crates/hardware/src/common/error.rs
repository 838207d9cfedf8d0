//! Fault definitions.
//!
//! This module defines the error taxonomy for the simulator. Every condition
//! here is fatal by design: the cycle driver never retries, never rolls back,
//! and never applies a partial instruction after a fault. It provides:
//! 1. **Fault Representation:** One variant per architectural violation.
//! 2. **Diagnostics:** Each variant carries the faulting pc and/or address.
//! 3. **Error Handling:** Integration with standard Rust error traits via `thiserror`.

use thiserror::Error;

/// Fatal simulation faults.
///
/// A fault returned from any stage halts the simulation; no register or
/// memory side effect of the faulting instruction is applied.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Fault {
    /// Unknown opcode or unknown function code.
    ///
    /// Raised during decode (unknown opcode) or execute (unknown function
    /// code, or an opcode that decodes but has no execute semantics).
    #[error("unsupported instruction {word:#010x} at pc {pc:#010x}")]
    UnsupportedInstruction {
        /// Address of the offending instruction.
        pc: u32,
        /// Raw 32-bit encoding that failed to decode or execute.
        word: u32,
    },

    /// Load or store outside the legal data window, or misaligned.
    ///
    /// The data window is a fixed sub-range of the memory image; the text
    /// segment is never a legal load/store target.
    #[error("memory access exception at pc {pc:#010x}: address {addr:#010x}")]
    MemoryAccessFault {
        /// Address of the load/store instruction that faulted.
        pc: u32,
        /// The illegal effective address.
        addr: u32,
    },

    /// Instruction fetch outside the memory image, or misaligned.
    #[error("instruction fetch fault: address {addr:#010x}")]
    InstructionAccessFault {
        /// The illegal fetch address.
        addr: u32,
    },

    /// Program image exceeds the text-segment capacity.
    ///
    /// Raised at load time, before any cycle executes.
    #[error("program too large: {words} words exceed the {capacity}-word text segment")]
    ProgramTooLarge {
        /// Number of instruction words in the program image.
        words: usize,
        /// Text-segment capacity in words.
        capacity: usize,
    },
}
