//! Writeback Stage.
//!
//! Commits the final value to the destination register, when the instruction
//! shape calls for one, and reports which register changed so an external
//! reporter can render the cycle without re-deriving simulator state.

use crate::core::Machine;
use crate::isa::instruction::{Fields, Instruction};
use crate::isa::{abi, funct, opcodes};

/// Commits `value` to the instruction's destination register.
///
/// Returns the index of the register written, or `None` for instructions
/// with no destination:
///
/// * register shape: writes rd, except jr;
/// * immediate shape: writes rt for addiu/andi/ori/lui/lw only (branches and
///   sw write nothing);
/// * jump shape: jal writes the link value to register 31; j writes nothing.
pub fn writeback(machine: &mut Machine, inst: &Instruction, value: i32) -> Option<usize> {
    match inst.fields {
        Fields::Register { rd, funct: f, .. } => {
            if f == funct::JR {
                None
            } else {
                machine.regs.write(rd, value);
                Some(rd)
            }
        }
        Fields::Immediate { rt, .. } => match inst.op {
            opcodes::OP_ADDIU
            | opcodes::OP_ANDI
            | opcodes::OP_ORI
            | opcodes::OP_LUI
            | opcodes::OP_LW => {
                machine.regs.write(rt, value);
                Some(rt)
            }
            _ => None,
        },
        Fields::Jump { .. } => {
            if inst.op == opcodes::OP_JAL {
                machine.regs.write(abi::REG_RA, value);
                Some(abi::REG_RA)
            } else {
                None
            }
        }
    }
}
