//! Function codes for register-shape instructions.
//!
//! The function code (bits 5-0) selects the operation when the major opcode
//! is [`OP_SPECIAL`](crate::isa::opcodes::OP_SPECIAL).

/// Shift left logical (SLL); shifts rt by the shamt field.
pub const SLL: u32 = 0;

/// Shift right logical (SRL); zero-filling, shifts rt by the shamt field.
pub const SRL: u32 = 2;

/// Jump register (JR); redirects the program counter through the link register.
pub const JR: u32 = 8;

/// Add unsigned (ADDU); wrapping 32-bit addition, no overflow trap.
pub const ADDU: u32 = 33;

/// Subtract unsigned (SUBU); wrapping 32-bit subtraction, no overflow trap.
pub const SUBU: u32 = 35;

/// Bitwise and (AND).
pub const AND: u32 = 36;

/// Bitwise or (OR).
pub const OR: u32 = 37;

/// Set on less than (SLT); signed comparison producing 0 or 1.
pub const SLT: u32 = 42;
