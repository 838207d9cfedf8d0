//! Architectural Machine State.
//!
//! This module provides the [`Machine`] struct: the single owner of all state
//! the cycle mutates. It is created once at startup, passed by reference to
//! each stage, and dropped at shutdown; no stage holds state of its own.

use crate::common::{Fault, RegisterFile};
use crate::config::Config;
use crate::core::memory::Memory;
use crate::isa::abi;

/// The complete architectural state: registers, program counter, memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Machine {
    /// General-purpose register file.
    pub regs: RegisterFile,
    /// Program counter; always a multiple of 4.
    pub pc: u32,
    /// Flat memory image (text + data segments).
    pub mem: Memory,
}

impl Machine {
    /// Creates a machine in its reset state: pc at the text base, all
    /// registers zero except the stack pointer, which starts at the top of
    /// the data segment.
    pub fn new(config: &Config) -> Self {
        let mut regs = RegisterFile::new();
        regs.write(abi::REG_SP, config.initial_sp() as i32);
        Self {
            regs,
            pc: config.text_base,
            mem: Memory::new(config),
        }
    }

    /// Creates a machine in its reset state with `program` loaded at the
    /// start of the text segment.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::ProgramTooLarge`] when the program does not fit the
    /// text segment.
    pub fn with_program(config: &Config, program: &[u32]) -> Result<Self, Fault> {
        let mut machine = Self::new(config);
        machine.mem = Memory::with_program(config, program)?;
        Ok(machine)
    }
}
