//! Test harness.
//!
//! `TestContext` owns a simulator with a program loaded at the default text
//! base and exposes the small set of conveniences the unit tests need.

use mipsim_core::common::Fault;
use mipsim_core::{Config, CycleReport, Machine, Simulator};

/// A simulator plus the configuration it was built from.
pub struct TestContext {
    pub sim: Simulator,
    pub config: Config,
}

impl TestContext {
    /// Creates a context with `program` loaded at the start of the text
    /// segment and the machine in its reset state.
    pub fn with_program(program: &[u32]) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let config = Config::default();
        let machine = Machine::with_program(&config, program).unwrap();
        Self {
            sim: Simulator::new(machine),
            config,
        }
    }

    /// Convenience accessor for the machine.
    pub fn machine(&self) -> &Machine {
        &self.sim.machine
    }

    /// Mutable convenience accessor for the machine.
    pub fn machine_mut(&mut self) -> &mut Machine {
        &mut self.sim.machine
    }

    /// Sets a general-purpose register value.
    pub fn set_reg(&mut self, idx: usize, val: i32) {
        self.sim.machine.regs.write(idx, val);
    }

    /// Reads a general-purpose register value.
    pub fn get_reg(&self, idx: usize) -> i32 {
        self.sim.machine.regs.read(idx)
    }

    /// Steps one instruction, panicking on fault.
    pub fn step(&mut self) -> CycleReport {
        self.sim.step().unwrap()
    }

    /// Steps one instruction, panicking unless it faults.
    pub fn step_err(&mut self) -> Fault {
        self.sim.step().unwrap_err()
    }

    /// Steps `n` instructions, returning the last report.
    pub fn step_n(&mut self, n: usize) -> CycleReport {
        let mut last = None;
        for _ in 0..n {
            last = Some(self.step());
        }
        last.unwrap()
    }
}
