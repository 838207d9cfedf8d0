//! MIPS32 major opcodes.
//!
//! Defines the major opcodes (bits 31-26) for the supported subset.

/// Register-shape instructions; the operation is selected by the function code.
pub const OP_SPECIAL: u32 = 0;

/// Unconditional jump (J).
pub const OP_J: u32 = 2;

/// Jump and link (JAL).
pub const OP_JAL: u32 = 3;

/// Branch if equal (BEQ).
pub const OP_BEQ: u32 = 4;

/// Branch if not equal (BNE).
pub const OP_BNE: u32 = 5;

/// Add immediate (ADDI). Decodes, but has no execute semantics in this subset.
pub const OP_ADDI: u32 = 8;

/// Add immediate unsigned (ADDIU).
pub const OP_ADDIU: u32 = 9;

/// And immediate (ANDI); the immediate is zero-extended.
pub const OP_ANDI: u32 = 12;

/// Or immediate (ORI); the immediate is zero-extended.
pub const OP_ORI: u32 = 13;

/// Load upper immediate (LUI).
pub const OP_LUI: u32 = 15;

/// Load word (LW).
pub const OP_LW: u32 = 35;

/// Store word (SW).
pub const OP_SW: u32 = 43;
