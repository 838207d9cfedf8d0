//! Program Counter Update Stage.
//!
//! Computes the next program counter from the instruction shape, the execute
//! stage's condition result, and the decode-time targets. First match wins:
//! jumps, then taken branches, then jr, then the sequential pc + 4.

use crate::common::constants::WORD_BYTES;
use crate::core::Machine;
use crate::isa::instruction::{Fields, Instruction};
use crate::isa::{abi, funct};

/// Computes the next program counter.
///
/// The jr check is scoped to the register shape: a function-code value of 8
/// in the low bits of an immediate or jump word never redirects the pc.
/// `jr` reads the link register (register 31), the value `jal` deposits.
pub fn next_pc(inst: &Instruction, result: i32, machine: &Machine) -> u32 {
    match inst.fields {
        Fields::Jump { target } => target,
        Fields::Immediate { value, .. } if inst.is_branch() && result == 1 => value as u32,
        Fields::Register {
            funct: funct::JR, ..
        } => machine.regs.read(abi::REG_RA) as u32,
        _ => machine.pc.wrapping_add(WORD_BYTES),
    }
}
