//! MIPS32 Instruction Decoder.
//!
//! This module classifies a raw 32-bit word into one of the three encoding
//! shapes and extracts typed fields, including the sign or zero extension of
//! the immediate and the precomputation of absolute branch and jump targets.
//! Decoding is a pure function of the instruction word and the current
//! program counter; register operands are snapshotted separately by the
//! decode stage.

use crate::common::Fault;
use crate::common::constants::{PC_REGION_MASK, WORD_BYTES};
use crate::isa::instruction::{Fields, Instruction, InstructionBits};
use crate::isa::opcodes;

/// Width of the immediate field in bits.
const IMM_BITS: u32 = 16;

/// Decodes a MIPS32 instruction into its component fields.
///
/// The program counter is needed twice: jump targets inherit the pc's top
/// four bits, and conditional branches store their absolute target address,
/// `(imm16 << 2) + pc + 4`, in place of the raw immediate.
///
/// # Arguments
///
/// * `word` - The raw 32-bit instruction encoding.
/// * `pc` - Address the word was fetched from.
///
/// # Errors
///
/// Returns [`Fault::UnsupportedInstruction`] for any opcode outside the
/// supported subset.
pub fn decode(word: u32, pc: u32) -> Result<Instruction, Fault> {
    let op = word.opcode();

    let fields = match op {
        opcodes::OP_SPECIAL => Fields::Register {
            rs: word.rs(),
            rt: word.rt(),
            rd: word.rd(),
            shamt: word.shamt(),
            funct: word.funct(),
        },

        opcodes::OP_J | opcodes::OP_JAL => Fields::Jump {
            target: (word.target26() << 2) | (pc & PC_REGION_MASK),
        },

        opcodes::OP_BEQ | opcodes::OP_BNE => Fields::Immediate {
            rs: word.rs(),
            rt: word.rt(),
            value: branch_target(word.imm16(), pc) as i32,
        },

        // Logical immediates are zero-extended even when bit 15 is set.
        opcodes::OP_ANDI | opcodes::OP_ORI => Fields::Immediate {
            rs: word.rs(),
            rt: word.rt(),
            value: word.imm16() as i32,
        },

        opcodes::OP_ADDI
        | opcodes::OP_ADDIU
        | opcodes::OP_LUI
        | opcodes::OP_LW
        | opcodes::OP_SW => Fields::Immediate {
            rs: word.rs(),
            rt: word.rt(),
            value: sign_extend16(word.imm16()),
        },

        _ => return Err(Fault::UnsupportedInstruction { pc, word }),
    };

    Ok(Instruction {
        raw: word,
        op,
        fields,
    })
}

/// Computes the absolute branch target from the raw 16-bit offset field.
///
/// The offset is taken zero-extended, scaled to words, and added to the
/// address of the instruction after the branch.
#[inline]
fn branch_target(imm16: u32, pc: u32) -> u32 {
    (imm16 << 2).wrapping_add(pc).wrapping_add(WORD_BYTES)
}

/// Sign extends the 16-bit immediate field to a 32-bit signed integer.
#[inline]
fn sign_extend16(val: u32) -> i32 {
    ((val as i32) << IMM_BITS) >> IMM_BITS
}
