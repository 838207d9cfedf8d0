//! Memory Access Stage.
//!
//! Performs the load or store for lw/sw and validates the effective address
//! against the legal data window first. Every other instruction passes its
//! execute result through untouched. The window is a fixed sub-range of the
//! data segment: accesses to the text segment, beyond the window, or off
//! word alignment are fatal.

use crate::common::Fault;
use crate::common::constants::WORD_BYTES;
use crate::core::Machine;
use crate::isa::instruction::{Fields, Instruction};
use crate::isa::opcodes;

/// Runs the memory access stage.
///
/// Returns the value flowing on to writeback and the byte address of the
/// memory word changed by this instruction, if any (stores only).
///
/// * lw: reads the word at the effective address in `value`.
/// * sw: writes the current value of register rt to the effective address.
/// * everything else: passes `value` through; memory is untouched.
///
/// # Errors
///
/// Returns [`Fault::MemoryAccessFault`] carrying `pc` (the address of the
/// faulting instruction) and the illegal effective address. On fault no
/// memory or register effect of the instruction is applied.
pub fn access(
    machine: &mut Machine,
    inst: &Instruction,
    value: i32,
    pc: u32,
) -> Result<(i32, Option<u32>), Fault> {
    let Fields::Immediate { rt, .. } = inst.fields else {
        return Ok((value, None));
    };

    match inst.op {
        opcodes::OP_LW => {
            let addr = checked_addr(machine, value, pc)?;
            let word = machine
                .mem
                .read(addr)
                .ok_or(Fault::MemoryAccessFault { pc, addr })?;
            Ok((word as i32, None))
        }
        opcodes::OP_SW => {
            let addr = checked_addr(machine, value, pc)?;
            let stored = machine.regs.read(rt) as u32;
            if !machine.mem.write(addr, stored) {
                return Err(Fault::MemoryAccessFault { pc, addr });
            }
            Ok((value, Some(addr)))
        }
        _ => Ok((value, None)),
    }
}

/// Validates an effective address against the data window and alignment.
fn checked_addr(machine: &Machine, value: i32, pc: u32) -> Result<u32, Fault> {
    let addr = value as u32;
    if machine.mem.in_data_window(addr) && addr % WORD_BYTES == 0 {
        Ok(addr)
    } else {
        Err(Fault::MemoryAccessFault { pc, addr })
    }
}
