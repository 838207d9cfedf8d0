//! The Cycle Driver.
//!
//! Owns the machine state and runs the stages in order, one full instruction
//! per [`Simulator::step`]: fetch, decode, execute, pc update, memory access,
//! writeback. Cycles are fully sequential and deterministic; no cycle begins
//! before the previous one's writeback completes.
//!
//! Every step returns a [`CycleReport`] carrying everything an external
//! reporter needs to render the cycle: the fetched word, the decoded record,
//! the changed register and memory address (if any), and the updated pc.
//! Fatal conditions come back as [`Fault`] values; the driver never
//! terminates the process itself.

use tracing::trace;

use crate::common::Fault;
use crate::core::Machine;
use crate::core::stages::{access, decode_stage, execute, fetch, next_pc, writeback};
use crate::isa::instruction::Instruction;
use crate::stats::SimStats;

/// Everything that happened in one cycle, for external reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CycleReport {
    /// Address the instruction was fetched from.
    pub pc: u32,
    /// The raw instruction word.
    pub word: u32,
    /// The decoded instruction record.
    pub instr: Instruction,
    /// Index of the register written this cycle, if any.
    pub changed_reg: Option<usize>,
    /// Byte address of the memory word written this cycle, if any.
    pub changed_mem: Option<u32>,
    /// The updated program counter.
    pub next_pc: u32,
}

/// Top-level simulator: machine state plus execution statistics.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// The architectural state mutated by every cycle.
    pub machine: Machine,
    /// Execution statistics, updated per retired instruction.
    pub stats: SimStats,
}

impl Simulator {
    /// Creates a simulator around an initialized machine.
    pub fn new(machine: Machine) -> Self {
        Self {
            machine,
            stats: SimStats::new(),
        }
    }

    /// Executes exactly one instruction.
    ///
    /// There is no inherent terminal condition: the caller loops until it
    /// decides to halt or a fault comes back. A faulting instruction applies
    /// none of its register or memory effects.
    ///
    /// # Errors
    ///
    /// Returns the [`Fault`] raised by whichever stage detected it; the
    /// machine is left as of the end of the previous cycle, except that a
    /// fault past the pc update stage leaves the already-advanced pc.
    pub fn step(&mut self) -> Result<CycleReport, Fault> {
        let pc = self.machine.pc;

        let word = fetch(&self.machine, pc)?;
        let (inst, ops) = decode_stage(&self.machine, word, pc)?;
        let result = execute(&inst, &ops, pc)?;

        let next = next_pc(&inst, result, &self.machine);
        self.machine.pc = next;

        let (value, changed_mem) = access(&mut self.machine, &inst, result, pc)?;
        let changed_reg = writeback(&mut self.machine, &inst, value);

        let branch_taken = inst.is_branch() && result == 1;
        self.stats.record(&inst, branch_taken);

        trace!(
            "cycle pc={pc:#010x} word={word:#010x} next={next:#010x} reg={changed_reg:?} mem={changed_mem:?}"
        );

        Ok(CycleReport {
            pc,
            word,
            instr: inst,
            changed_reg,
            changed_mem,
            next_pc: next,
        })
    }
}
