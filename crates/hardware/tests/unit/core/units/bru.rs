//! Branch Predictor Integration Tests.
//!
//! Runs a countdown loop through the full pipeline and checks what the
//! 1-bit last-outcome predictor and its target cache learn from it.

use crate::common::builder::instruction::{addi, bne};
use crate::common::harness::TestContext;

/// x1 counts 3 → 0; the back edge at address 8 is taken twice, then falls
/// through.
fn countdown_loop() -> Vec<u32> {
    vec![
        addi(1, 0, 3),   // 0x0
        addi(1, 1, -1),  // 0x4  loop body
        bne(1, 0, -4),   // 0x8  back edge
    ]
}

#[test]
fn countdown_loop_mispredicts_twice() {
    let mut ctx = TestContext::new().load_program(0, &countdown_loop());
    ctx.run();

    assert_eq!(ctx.get_reg(1), 0, "Loop must run to completion");
    // First iteration: cold, predicted not-taken, actually taken.
    // Last iteration: predicted taken, actually falls through.
    assert_eq!(ctx.sim.cpu.bpu.mispredictions, 2);
    assert_eq!(
        ctx.sim.cpu.bpu.predictions, 3,
        "One direction query per fetch of the back edge"
    );
}

#[test]
fn back_edge_target_is_cached_after_first_taken() {
    let mut ctx = TestContext::new().load_program(0, &countdown_loop());
    ctx.run();

    let bpu = &ctx.sim.cpu.bpu;
    assert!(bpu.in_btb(0x8));
    assert_eq!(bpu.predicted_target(0x8), 0x4);
    assert_eq!(
        bpu.targets().collect::<Vec<_>>(),
        vec![(0x8, 0x4)],
        "Only the back edge enters the target cache"
    );
}

#[test]
fn direction_bit_ends_on_the_final_outcome() {
    let mut ctx = TestContext::new().load_program(0, &countdown_loop());
    ctx.run();

    let history: Vec<_> = ctx.sim.cpu.bpu.history().collect();
    assert_eq!(
        history,
        vec![(0x8, false)],
        "Last resolution of the back edge was not-taken"
    );
}

#[test]
fn middle_iteration_is_predicted_correctly() {
    // With three iterations and two mispredictions, exactly one fetch of the
    // back edge (the second) was predicted right, taken with the cached
    // target.
    let mut ctx = TestContext::new().load_program(0, &countdown_loop());
    ctx.run();

    let bpu = &ctx.sim.cpu.bpu;
    assert_eq!(bpu.predictions - bpu.mispredictions, 1);
}
