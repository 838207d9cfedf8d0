//! Instruction Disassembler for the MIPS32 subset.
//!
//! Converts a decoded instruction into a human-readable mnemonic string for
//! per-cycle reporting and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use mipsim_core::isa::{decode::decode, disasm::disassemble};
//! let inst = decode(0x2401_0005, 0x0040_0000).unwrap(); // addiu $at, $zero, 5
//! assert_eq!(disassemble(&inst), "addiu\t$at, $zero, 5");
//! ```

use crate::isa::instruction::{Fields, Instruction};
use crate::isa::{abi, funct, opcodes};

/// Disassembles a decoded instruction into a human-readable string.
///
/// Branch and jump operands render as the absolute target address the
/// decoder computed, matching what the pc updater will actually do. Encodings
/// with an unknown function code render as `"unknown"`.
pub fn disassemble(inst: &Instruction) -> String {
    match inst.fields {
        Fields::Register {
            rs,
            rt,
            rd,
            shamt,
            funct: f,
        } => disasm_register(rs, rt, rd, shamt, f),
        Fields::Immediate { rs, rt, value } => disasm_immediate(inst.op, rs, rt, value),
        Fields::Jump { target } => match inst.op {
            opcodes::OP_J => format!("j\t{target:#010x}"),
            _ => format!("jal\t{target:#010x}"),
        },
    }
}

/// Renders a register-shape instruction.
fn disasm_register(rs: usize, rt: usize, rd: usize, shamt: u32, f: u32) -> String {
    let (rs, rt, rd) = (abi::name(rs), abi::name(rt), abi::name(rd));
    match f {
        funct::SLL => format!("sll\t${rd}, ${rt}, {shamt}"),
        funct::SRL => format!("srl\t${rd}, ${rt}, {shamt}"),
        funct::JR => format!("jr\t${rs}"),
        funct::ADDU => format!("addu\t${rd}, ${rs}, ${rt}"),
        funct::SUBU => format!("subu\t${rd}, ${rs}, ${rt}"),
        funct::AND => format!("and\t${rd}, ${rs}, ${rt}"),
        funct::OR => format!("or\t${rd}, ${rs}, ${rt}"),
        funct::SLT => format!("slt\t${rd}, ${rs}, ${rt}"),
        _ => "unknown".to_string(),
    }
}

/// Renders an immediate-shape instruction.
fn disasm_immediate(op: u32, rs: usize, rt: usize, value: i32) -> String {
    let (rs, rt) = (abi::name(rs), abi::name(rt));
    match op {
        opcodes::OP_BEQ => format!("beq\t${rs}, ${rt}, {:#010x}", value as u32),
        opcodes::OP_BNE => format!("bne\t${rs}, ${rt}, {:#010x}", value as u32),
        opcodes::OP_ADDI => format!("addi\t${rt}, ${rs}, {value}"),
        opcodes::OP_ADDIU => format!("addiu\t${rt}, ${rs}, {value}"),
        opcodes::OP_ANDI => format!("andi\t${rt}, ${rs}, {value:#x}"),
        opcodes::OP_ORI => format!("ori\t${rt}, ${rs}, {value:#x}"),
        opcodes::OP_LUI => format!("lui\t${rt}, {value:#x}"),
        opcodes::OP_LW => format!("lw\t${rt}, {value}(${rs})"),
        _ => format!("sw\t${rt}, {value}(${rs})"),
    }
}
