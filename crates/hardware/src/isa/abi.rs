//! Conventional MIPS register name constants.
//!
//! Defines the o32 calling-convention register names and the indices the
//! simulator itself relies on (stack pointer initialization, the link
//! register written by `jal` and consumed by `jr`).

/// Register 0 (`$zero`; not hardware-enforced to zero in this model).
pub const REG_ZERO: usize = 0;
/// Register 29 (stack pointer, `$sp`).
pub const REG_SP: usize = 29;
/// Register 31 (return address / link register, `$ra`).
pub const REG_RA: usize = 31;

/// Conventional names for registers 0-31.
const REG_NAMES: [&str; 32] = [
    "zero", "at", "v0", "v1", "a0", "a1", "a2", "a3", "t0", "t1", "t2", "t3", "t4", "t5", "t6",
    "t7", "s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7", "t8", "t9", "k0", "k1", "gp", "sp",
    "fp", "ra",
];

/// Returns the conventional name for a register index (without the `$` sigil).
#[inline]
pub fn name(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("??")
}
