//! Simulation statistics collection and reporting.
//!
//! This module tracks execution metrics for the simulator. It provides:
//! 1. **Cycle counts:** Total cycles (one instruction retires per cycle).
//! 2. **Instruction mix:** Counts by category (ALU, load, store, branch, jump).
//! 3. **Control flow:** Taken-branch count.
//! 4. **Wall clock:** Elapsed time and derived instruction rate.

use std::time::Instant;

use crate::isa::instruction::{Fields, Instruction};
use crate::isa::{funct, opcodes};

/// Execution statistics, updated by the cycle driver after every retired
/// instruction.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total cycles executed (equal to instructions retired).
    pub cycles: u64,
    /// Count of loads retired.
    pub inst_load: u64,
    /// Count of stores retired.
    pub inst_store: u64,
    /// Count of conditional branches retired.
    pub inst_branch: u64,
    /// Count of jumps (j, jal, jr) retired.
    pub inst_jump: u64,
    /// Count of ALU (everything else) instructions retired.
    pub inst_alu: u64,
    /// Conditional branches whose condition held.
    pub branches_taken: u64,
}

impl SimStats {
    /// Creates a zeroed statistics record with the wall clock started.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            inst_jump: 0,
            inst_alu: 0,
            branches_taken: 0,
        }
    }

    /// Records one retired instruction.
    pub fn record(&mut self, inst: &Instruction, branch_taken: bool) {
        self.cycles += 1;
        match inst.fields {
            Fields::Jump { .. } => self.inst_jump += 1,
            Fields::Register {
                funct: funct::JR, ..
            } => self.inst_jump += 1,
            Fields::Immediate { .. } if inst.is_branch() => {
                self.inst_branch += 1;
                if branch_taken {
                    self.branches_taken += 1;
                }
            }
            Fields::Immediate { .. } if inst.op == opcodes::OP_LW => self.inst_load += 1,
            Fields::Immediate { .. } if inst.op == opcodes::OP_SW => self.inst_store += 1,
            _ => self.inst_alu += 1,
        }
    }

    /// Prints a summary to stdout.
    pub fn print(&self) {
        let elapsed = self.start_time.elapsed();
        println!("==== Simulation Statistics ====");
        println!("cycles            : {}", self.cycles);
        println!("  alu             : {}", self.inst_alu);
        println!("  load            : {}", self.inst_load);
        println!("  store           : {}", self.inst_store);
        println!(
            "  branch          : {} ({} taken)",
            self.inst_branch, self.branches_taken
        );
        println!("  jump            : {}", self.inst_jump);
        println!("elapsed           : {:.3?}", elapsed);
        let secs = elapsed.as_secs_f64();
        if secs > 0.0 {
            println!("instructions/sec  : {:.0}", self.cycles as f64 / secs);
        }
    }
}

impl Default for SimStats {
    fn default() -> Self {
        Self::new()
    }
}
