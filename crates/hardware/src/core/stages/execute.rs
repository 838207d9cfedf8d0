//! Execute Stage.
//!
//! Computes the result value of a decoded instruction from its operand
//! snapshot: an arithmetic/logical/comparison result, a branch condition
//! flag, an effective memory address, or a link value. Purely functional;
//! machine state is never touched here.

use crate::common::Fault;
use crate::common::constants::WORD_BYTES;
use crate::core::stages::decode::Operands;
use crate::isa::instruction::{Fields, Instruction};
use crate::isa::{funct, opcodes};

/// Computes the 32-bit result of `inst` over the operand snapshot.
///
/// For branches the result is the condition flag (1 taken, 0 not taken); for
/// loads and stores it is the effective address; for `jal` it is the link
/// value `pc + 4`. `jr` and `j` produce no meaningful result and return 0.
///
/// # Errors
///
/// Returns [`Fault::UnsupportedInstruction`] for a register-shape word with
/// an unknown function code, or an immediate opcode with no execute
/// semantics.
pub fn execute(inst: &Instruction, ops: &Operands, pc: u32) -> Result<i32, Fault> {
    match inst.fields {
        Fields::Register { shamt, funct: f, .. } => execute_register(inst, ops, pc, shamt, f),
        Fields::Immediate { value, .. } => execute_immediate(inst, ops, pc, value),
        Fields::Jump { .. } => Ok(if inst.op == opcodes::OP_JAL {
            pc.wrapping_add(WORD_BYTES) as i32
        } else {
            0
        }),
    }
}

/// Register shape: the function code selects the operation.
fn execute_register(
    inst: &Instruction,
    ops: &Operands,
    pc: u32,
    shamt: u32,
    f: u32,
) -> Result<i32, Fault> {
    match f {
        // Shifts operate on rt and are logical (zero-filling).
        funct::SLL => Ok(((ops.rt as u32) << shamt) as i32),
        funct::SRL => Ok(((ops.rt as u32) >> shamt) as i32),
        // The pc updater consumes jr directly; there is no result.
        funct::JR => Ok(0),
        funct::ADDU => Ok(ops.rs.wrapping_add(ops.rt)),
        funct::SUBU => Ok(ops.rs.wrapping_sub(ops.rt)),
        funct::AND => Ok(ops.rs & ops.rt),
        funct::OR => Ok(ops.rs | ops.rt),
        funct::SLT => Ok((ops.rs < ops.rt) as i32),
        _ => Err(Fault::UnsupportedInstruction {
            pc,
            word: inst.raw,
        }),
    }
}

/// Immediate shape: the major opcode selects the operation.
fn execute_immediate(
    inst: &Instruction,
    ops: &Operands,
    pc: u32,
    value: i32,
) -> Result<i32, Fault> {
    match inst.op {
        opcodes::OP_BEQ => Ok((ops.rs == ops.rt) as i32),
        opcodes::OP_BNE => Ok((ops.rs != ops.rt) as i32),
        opcodes::OP_ADDIU => Ok(ops.rs.wrapping_add(value)),
        opcodes::OP_ANDI => Ok(ops.rs & value),
        opcodes::OP_ORI => Ok(ops.rs | value),
        opcodes::OP_LUI => Ok(((value as u32) << 16) as i32),
        opcodes::OP_LW | opcodes::OP_SW => Ok(ops.rs.wrapping_add(value)),
        _ => Err(Fault::UnsupportedInstruction {
            pc,
            word: inst.raw,
        }),
    }
}
