//! Program counter update priority.
//!
//! Jump beats branch beats jr beats the sequential pc + 4, and the jr check
//! only ever applies to register-shape words.

use mipsim_core::core::stages::{decode_stage, execute, next_pc};
use mipsim_core::isa::{funct, opcodes};

use crate::common::builder::{i_type, j_type, r_type};
use crate::common::harness::TestContext;

/// Decodes, executes, and updates the pc for `word` on the context machine.
fn advance(ctx: &TestContext, word: u32) -> u32 {
    let pc = ctx.machine().pc;
    let (inst, ops) = decode_stage(ctx.machine(), word, pc).unwrap();
    let result = execute(&inst, &ops, pc).unwrap();
    next_pc(&inst, result, ctx.machine())
}

#[test]
fn default_is_sequential() {
    let ctx = TestContext::with_program(&[]);
    let word = r_type(1, 2, 3, 0, funct::ADDU);
    assert_eq!(advance(&ctx, word), ctx.machine().pc + 4);
}

#[test]
fn jump_redirects_to_target() {
    let ctx = TestContext::with_program(&[]);
    let word = j_type(opcodes::OP_J, 0x10_0004);
    assert_eq!(advance(&ctx, word), 0x0040_0010);
}

#[test]
fn taken_branch_uses_precomputed_target() {
    let mut ctx = TestContext::with_program(&[]);
    ctx.set_reg(1, 9);
    ctx.set_reg(2, 9);
    let word = i_type(opcodes::OP_BEQ, 1, 2, 4);
    // Target = (4 << 2) + pc + 4.
    assert_eq!(advance(&ctx, word), ctx.machine().pc + 4 + 16);
}

#[test]
fn untaken_branch_is_sequential() {
    let mut ctx = TestContext::with_program(&[]);
    ctx.set_reg(1, 9);
    ctx.set_reg(2, 8);
    let word = i_type(opcodes::OP_BEQ, 1, 2, 4);
    assert_eq!(advance(&ctx, word), ctx.machine().pc + 4);
}

#[test]
fn jr_reads_the_link_register() {
    let mut ctx = TestContext::with_program(&[]);
    ctx.set_reg(31, 0x0040_0200u32 as i32);
    let word = r_type(31, 0, 0, 0, funct::JR);
    assert_eq!(advance(&ctx, word), 0x0040_0200);
}

/// An immediate word whose low six bits alias funct 8 must not redirect
/// through the link register.
#[test]
fn funct_aliasing_immediate_does_not_act_like_jr() {
    let mut ctx = TestContext::with_program(&[]);
    ctx.set_reg(31, 0x0040_0200u32 as i32);
    ctx.set_reg(1, 1);
    ctx.set_reg(2, 2);
    // Untaken beq with imm16 = 8: the raw word ends in 0b001000.
    let word = i_type(opcodes::OP_BEQ, 1, 2, 8);
    assert_eq!(advance(&ctx, word), ctx.machine().pc + 4);
}
