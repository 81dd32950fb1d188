//! Misprediction Flush Tests.
//!
//! A cold taken branch is predicted not-taken, so the wrong-path instruction
//! enters the pipeline and must be squashed before it changes any state.

use crate::common::builder::instruction::{addi, beq, nop};
use crate::common::harness::TestContext;

#[test]
fn wrong_path_instruction_is_squashed() {
    // beq x0, x0, +8 is always taken and skips the first addi.
    let mut ctx = TestContext::new().load_program(0, &[
        beq(0, 0, 8),
        addi(1, 0, 1), // wrong path, must never retire
        addi(1, 0, 2),
    ]);
    ctx.run();

    assert_eq!(ctx.get_reg(1), 2, "Squashed instruction leaked into x1");
    assert_eq!(ctx.sim.cpu.stats.flushes, 1);
    assert_eq!(ctx.sim.cpu.bpu.mispredictions, 1);
    assert_eq!(
        ctx.sim.cpu.stats.instructions_retired, 2,
        "Only the branch and the target instruction retire"
    );
}

#[test]
fn correctly_predicted_not_taken_branch_does_not_flush() {
    // beq x0, x1 with x1 != 0 falls through, matching the cold prediction.
    let mut ctx = TestContext::new().load_program(0, &[
        addi(1, 0, 1),
        nop(),
        nop(),
        beq(0, 1, 8),
        addi(2, 0, 7),
    ]);
    ctx.run();

    assert_eq!(ctx.get_reg(2), 7);
    assert_eq!(ctx.sim.cpu.stats.flushes, 0);
    assert_eq!(ctx.sim.cpu.bpu.mispredictions, 0);
}

#[test]
fn flush_costs_exactly_one_extra_cycle() {
    // Taken branch vs a straight-line program of the same retired length.
    let mut taken = TestContext::new().load_program(0, &[
        beq(0, 0, 8),
        addi(1, 0, 1),
        addi(1, 0, 2),
    ]);
    taken.run();

    let mut straight = TestContext::new().load_program(0, &[nop(), nop()]);
    straight.run();

    assert_eq!(
        taken.cycles(),
        straight.cycles() + 1,
        "One squashed fetch slot costs one cycle"
    );
}
