//! Operand Forwarding Tests.
//!
//! Exercises `forward_operands` priority rules: the freshest producer wins,
//! register zero is never bypassed, and an in-flight load never supplies data
//! from the Execute→Memory latch.

use rv32sim_core::core::pipeline::hazards::forward_operands;
use rv32sim_core::core::pipeline::latches::{ExMemEntry, IdExEntry, MemWbEntry};
use rv32sim_core::core::pipeline::signals::{AluOp, ControlSignals};

fn consumer(rs1: usize, rs2: usize, rv1: u32, rv2: u32) -> IdExEntry {
    IdExEntry {
        valid: true,
        rs1,
        rs2,
        rv1,
        rv2,
        ctrl: ControlSignals {
            reg_write: true,
            alu: AluOp::Add,
            ..Default::default()
        },
        ..Default::default()
    }
}

fn ex_mem_alu(rd: usize, alu: u32) -> ExMemEntry {
    ExMemEntry {
        valid: true,
        rd,
        alu,
        ctrl: ControlSignals {
            reg_write: true,
            alu: AluOp::Add,
            ..Default::default()
        },
        ..Default::default()
    }
}

fn mem_wb_alu(rd: usize, alu: u32) -> MemWbEntry {
    MemWbEntry {
        valid: true,
        rd,
        alu,
        ctrl: ControlSignals {
            reg_write: true,
            alu: AluOp::Add,
            ..Default::default()
        },
        ..Default::default()
    }
}

#[test]
fn ex_mem_result_overrides_mem_wb_for_same_register() {
    let id = consumer(5, 6, 0xAAAA, 0xBBBB);
    let (a, b) = forward_operands(&id, &ex_mem_alu(5, 111), &mem_wb_alu(5, 222), false);
    assert_eq!(a, 111, "Younger EX/MEM producer must win for rs1");
    assert_eq!(b, 0xBBBB, "rs2 has no producer, stale file value kept");
}

#[test]
fn mem_wb_alu_result_is_forwarded() {
    let id = consumer(3, 4, 1, 2);
    let (a, b) = forward_operands(&id, &ExMemEntry::default(), &mem_wb_alu(4, 77), false);
    assert_eq!(a, 1);
    assert_eq!(b, 77);
}

#[test]
fn mem_wb_load_forwards_loaded_data_not_address() {
    let wb = MemWbEntry {
        valid: true,
        rd: 8,
        alu: 0x1000,
        load_data: 0xCAFE,
        ctrl: ControlSignals {
            reg_write: true,
            mem_read: true,
            alu: AluOp::Add,
            ..Default::default()
        },
        ..Default::default()
    };
    let (a, _) = forward_operands(&consumer(8, 0, 0, 0), &ExMemEntry::default(), &wb, false);
    assert_eq!(a, 0xCAFE, "A completed load forwards its data, not the address");
}

#[test]
fn register_zero_is_never_forwarded() {
    let id = consumer(0, 0, 0, 0);
    let (a, b) = forward_operands(&id, &ex_mem_alu(0, 999), &mem_wb_alu(0, 888), false);
    assert_eq!((a, b), (0, 0), "x0 must stay zero through every bypass path");
}

#[test]
fn ex_mem_load_is_not_a_forwarding_source() {
    let pending_load = ExMemEntry {
        valid: true,
        rd: 9,
        alu: 0x2000,
        ctrl: ControlSignals {
            reg_write: true,
            mem_read: true,
            alu: AluOp::Add,
            ..Default::default()
        },
        ..Default::default()
    };
    let (a, _) = forward_operands(
        &consumer(9, 0, 0x5555, 0),
        &pending_load,
        &MemWbEntry::default(),
        false,
    );
    assert_eq!(
        a, 0x5555,
        "Load data does not exist in EX/MEM, the address must not leak through"
    );
}

#[test]
fn jump_link_address_is_forwarded() {
    // A jump carries its link address in the alu field, so a dependent
    // instruction one slot behind picks it up through the normal path.
    let link = ExMemEntry {
        valid: true,
        rd: 1,
        alu: 0x14,
        ctrl: ControlSignals {
            reg_write: true,
            jump: true,
            alu: AluOp::Jal,
            ..Default::default()
        },
        ..Default::default()
    };
    let (a, _) = forward_operands(&consumer(1, 0, 0, 0), &link, &MemWbEntry::default(), false);
    assert_eq!(a, 0x14);
}
