//! Execute stage result computation.
//!
//! Exercises the full function-code and opcode tables over operand
//! snapshots, including the wrapping and signedness corners.

use proptest::prelude::*;
use rstest::rstest;

use mipsim_core::common::Fault;
use mipsim_core::core::stages::{Operands, execute};
use mipsim_core::isa::decode::decode;
use mipsim_core::isa::{funct, opcodes};

use crate::common::builder::{i_type, j_type, r_type};

const PC: u32 = 0x0040_0000;

/// Runs the execute stage on a freshly decoded word.
fn run(word: u32, ops: Operands) -> i32 {
    let inst = decode(word, PC).unwrap();
    execute(&inst, &ops, PC).unwrap()
}

fn rs_rt(rs: i32, rt: i32) -> Operands {
    Operands { rs, rt, rd: 0 }
}

// ──────────────────────────────────────────────────────────
// 1. Register shape
// ──────────────────────────────────────────────────────────

#[rstest]
#[case(funct::ADDU, 2, 3, 5)]
#[case(funct::ADDU, -1, 1, 0)]
#[case(funct::SUBU, 3, 5, -2)]
#[case(funct::AND, 0b1100, 0b1010, 0b1000)]
#[case(funct::OR, 0b1100, 0b1010, 0b1110)]
#[case(funct::SLT, -1, 0, 1)]
#[case(funct::SLT, 0, -1, 0)]
#[case(funct::SLT, 5, 5, 0)]
fn register_ops(#[case] f: u32, #[case] rs: i32, #[case] rt: i32, #[case] expected: i32) {
    assert_eq!(run(r_type(1, 2, 3, 0, f), rs_rt(rs, rt)), expected);
}

#[test]
fn addu_wraps_on_overflow() {
    assert_eq!(run(r_type(1, 2, 3, 0, funct::ADDU), rs_rt(i32::MAX, 1)), i32::MIN);
}

#[test]
fn subu_wraps_on_underflow() {
    assert_eq!(run(r_type(1, 2, 3, 0, funct::SUBU), rs_rt(i32::MIN, 1)), i32::MAX);
}

proptest! {
    /// addu is the 32-bit wraparound sum of the snapshots, independent of sign.
    #[test]
    fn addu_is_wrapping_sum(a in any::<i32>(), b in any::<i32>()) {
        let got = run(r_type(1, 2, 3, 0, funct::ADDU), rs_rt(a, b));
        prop_assert_eq!(got, a.wrapping_add(b));
    }
}

#[test]
fn shifts_operate_on_rt_and_are_logical() {
    // sll shifts rt left by shamt.
    assert_eq!(run(r_type(0, 2, 3, 4, funct::SLL), rs_rt(0, 1)), 16);
    // srl zero-fills: no sign propagation into the vacated bits.
    let got = run(r_type(0, 2, 3, 1, funct::SRL), rs_rt(0, i32::MIN));
    assert_eq!(got as u32, 0x4000_0000);
}

#[test]
fn jr_result_is_unused() {
    assert_eq!(run(r_type(31, 0, 0, 0, funct::JR), rs_rt(7, 7)), 0);
}

#[test]
fn unknown_funct_faults() {
    let word = r_type(1, 2, 3, 0, 63);
    let inst = decode(word, PC).unwrap();
    let err = execute(&inst, &rs_rt(0, 0), PC).unwrap_err();
    assert_eq!(err, Fault::UnsupportedInstruction { pc: PC, word });
}

// ──────────────────────────────────────────────────────────
// 2. Immediate shape
// ──────────────────────────────────────────────────────────

#[test]
fn beq_bne_produce_condition_flags() {
    assert_eq!(run(i_type(opcodes::OP_BEQ, 1, 2, 4), rs_rt(9, 9)), 1);
    assert_eq!(run(i_type(opcodes::OP_BEQ, 1, 2, 4), rs_rt(9, 8)), 0);
    assert_eq!(run(i_type(opcodes::OP_BNE, 1, 2, 4), rs_rt(9, 9)), 0);
    assert_eq!(run(i_type(opcodes::OP_BNE, 1, 2, 4), rs_rt(9, 8)), 1);
}

#[rstest]
#[case(opcodes::OP_ADDIU, 0x0005, 10, 15)]
#[case(opcodes::OP_ADDIU, 0xFFFF, 10, 9)] // immediate -1
#[case(opcodes::OP_ANDI, 0xF00F, 0x1234, 0x1004)]
#[case(opcodes::OP_ORI, 0x00F0, 0x1204, 0x12F4)]
fn immediate_ops(#[case] op: u32, #[case] imm: u32, #[case] rs: i32, #[case] expected: i32) {
    assert_eq!(run(i_type(op, 1, 2, imm), rs_rt(rs, 0)), expected);
}

#[test]
fn addiu_wraps_on_overflow() {
    assert_eq!(run(i_type(opcodes::OP_ADDIU, 1, 2, 1), rs_rt(i32::MAX, 0)), i32::MIN);
}

#[test]
fn lui_shifts_immediate_into_upper_half() {
    assert_eq!(run(i_type(opcodes::OP_LUI, 0, 1, 0x1234), rs_rt(0, 0)), 0x1234_0000);
    // Bit 15 set: the shift discards the sign-extended upper half.
    let got = run(i_type(opcodes::OP_LUI, 0, 1, 0x8000), rs_rt(0, 0));
    assert_eq!(got as u32, 0x8000_0000);
}

#[test]
fn load_store_compute_effective_address() {
    let got = run(i_type(opcodes::OP_LW, 1, 2, 4), rs_rt(0x0040_1000, 0));
    assert_eq!(got as u32, 0x0040_1004);
    // Negative offsets subtract.
    let got = run(i_type(opcodes::OP_SW, 1, 2, 0xFFFC), rs_rt(0x0040_1010, 0));
    assert_eq!(got as u32, 0x0040_100C);
}

/// addi decodes but has no execute semantics in this subset.
#[test]
fn addi_faults_at_execute() {
    let word = i_type(opcodes::OP_ADDI, 1, 2, 5);
    let inst = decode(word, PC).unwrap();
    let err = execute(&inst, &rs_rt(0, 0), PC).unwrap_err();
    assert_eq!(err, Fault::UnsupportedInstruction { pc: PC, word });
}

// ──────────────────────────────────────────────────────────
// 3. Jump shape
// ──────────────────────────────────────────────────────────

#[test]
fn jal_returns_link_value() {
    let got = run(j_type(opcodes::OP_JAL, 0x10_0004), Operands::default());
    assert_eq!(got as u32, PC + 4);
}

#[test]
fn j_returns_nothing_meaningful() {
    assert_eq!(run(j_type(opcodes::OP_J, 0x10_0004), Operands::default()), 0);
}
