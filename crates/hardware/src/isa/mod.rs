//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains definitions for opcodes, function codes, and decoding logic for
//! the supported MIPS32 subset.
//!
//! # Supported instructions
//!
//! * Register shape: `sll`, `srl`, `jr`, `addu`, `subu`, `and`, `or`, `slt`.
//! * Immediate shape: `beq`, `bne`, `addiu`, `andi`, `ori`, `lui`, `lw`, `sw`.
//! * Jump shape: `j`, `jal`.

/// Conventional register name mappings.
pub mod abi;

/// Instruction decoding logic for all three encoding shapes.
pub mod decode;

/// Instruction disassembler for per-cycle reporting and test diagnostics.
pub mod disasm;

/// Function codes for register-shape instructions.
pub mod funct;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// Major opcodes (bits 31-26).
pub mod opcodes;
