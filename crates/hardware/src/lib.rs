//! MIPS32 subset instruction simulator library.
//!
//! This crate implements a cycle-stepped simulator for a reduced MIPS32
//! subset with the following:
//! 1. **Core:** Machine state (registers, pc, flat memory) and one function
//!    per stage: fetch, decode, execute, pc update, memory access, writeback.
//! 2. **ISA:** Field extraction, shape classification, immediate extension
//!    rules, and a disassembler for the supported subset.
//! 3. **Simulation:** Binary loader, configuration, the cycle driver, and
//!    statistics collection.
//!
//! The model is deliberately minimal: no pipeline hazards, no floating
//! point, no delay slots, no interrupts. Every architectural violation is a
//! fatal, typed [`common::Fault`] returned to the caller; the library never
//! exits the process.

/// Common types and constants (faults, registers, word geometry).
pub mod common;
/// Simulator configuration (memory geometry, defaults, JSON overrides).
pub mod config;
/// CPU core (machine state, memory image, per-cycle stages).
pub mod core;
/// Instruction set (opcodes, function codes, decode, disassembly).
pub mod isa;
/// Binary loader and cycle driver.
pub mod sim;
/// Execution statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Architectural machine state; construct with `Machine::with_program`.
pub use crate::core::Machine;
/// The cycle driver and its per-cycle report.
pub use crate::sim::{CycleReport, Simulator};
