//! Decode Stage.
//!
//! Wraps the pure field decoder with the operand snapshot: the register
//! values an instruction will consume are read here, once, and passed
//! immutably to the execute stage. Later register writes in the same cycle
//! can therefore never feed back into the computation.

use crate::common::Fault;
use crate::core::Machine;
use crate::isa::decode::decode;
use crate::isa::instruction::{Fields, Instruction};

/// Register values captured at decode time.
///
/// Fields a shape does not read stay zero: the register shape reads all
/// three, the immediate shape reads rs and rt, the jump shape reads nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Operands {
    /// Value of the rs register at decode time.
    pub rs: i32,
    /// Value of the rt register at decode time.
    pub rt: i32,
    /// Value of the rd register at decode time.
    pub rd: i32,
}

/// Decodes `word` and snapshots its register operands.
///
/// # Errors
///
/// Returns [`Fault::UnsupportedInstruction`] for opcodes outside the
/// supported subset.
pub fn decode_stage(
    machine: &Machine,
    word: u32,
    pc: u32,
) -> Result<(Instruction, Operands), Fault> {
    let inst = decode(word, pc)?;

    let ops = match inst.fields {
        Fields::Register { rs, rt, rd, .. } => Operands {
            rs: machine.regs.read(rs),
            rt: machine.regs.read(rt),
            rd: machine.regs.read(rd),
        },
        Fields::Immediate { rs, rt, .. } => Operands {
            rs: machine.regs.read(rs),
            rt: machine.regs.read(rt),
            rd: 0,
        },
        Fields::Jump { .. } => Operands::default(),
    };

    Ok((inst, ops))
}
