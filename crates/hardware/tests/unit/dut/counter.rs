//! # Counter Model Tests
//!
//! Verifies the behavioral counter: asynchronous active-low reset, rising-edge
//! counting gated by `enable`, and wraparound at the register width.

use clocktb_core::common::Signal;
use clocktb_core::dut::{Counter, Dut};
use proptest::prelude::*;

/// Drives one full clock period: low, eval, high, eval.
fn clock(dut: &mut Counter) {
    dut.set_clock(false);
    dut.eval();
    dut.set_clock(true);
    dut.eval();
}

/// Returns a counter released from reset with counting enabled.
fn running(width: u32) -> Counter {
    let mut dut = Counter::new(width);
    dut.set_reset_n(true);
    dut.set_enable(true);
    dut
}

#[test]
fn test_default_width_is_eight() {
    let dut = Counter::default();
    assert_eq!(dut.width(), 8);
    assert_eq!(dut.name(), "counter");
}

#[test]
fn test_reset_value_is_zero() {
    let mut dut = Counter::new(8);
    dut.eval();
    assert_eq!(dut.count(), 0);
}

#[test]
fn test_held_in_reset_ignores_clock_and_enable() {
    let mut dut = Counter::new(8);
    dut.set_enable(true);
    for _ in 0..10 {
        clock(&mut dut);
    }
    assert_eq!(dut.count(), 0);
}

#[test]
fn test_counts_on_rising_edge_only() {
    let mut dut = running(8);
    dut.set_clock(false);
    dut.eval();
    assert_eq!(dut.count(), 0);

    dut.set_clock(true);
    dut.eval();
    assert_eq!(dut.count(), 1);

    // Re-evaluating at the same level is not another edge.
    dut.eval();
    assert_eq!(dut.count(), 1);

    dut.set_clock(false);
    dut.eval();
    assert_eq!(dut.count(), 1);
}

#[test]
fn test_inputs_do_not_propagate_without_eval() {
    let mut dut = running(8);
    clock(&mut dut);
    clock(&mut dut);
    dut.set_reset_n(false);
    assert_eq!(dut.count(), 2);
    dut.eval();
    assert_eq!(dut.count(), 0);
}

#[test]
fn test_enable_low_holds_value() {
    let mut dut = running(8);
    for _ in 0..9 {
        clock(&mut dut);
    }
    assert_eq!(dut.count(), 9);

    dut.set_enable(false);
    for _ in 0..5 {
        clock(&mut dut);
        assert_eq!(dut.count(), 9);
    }
}

#[test]
fn test_asynchronous_reset_clears_without_clock_edge() {
    let mut dut = running(8);
    for _ in 0..3 {
        clock(&mut dut);
    }
    dut.set_reset_n(false);
    dut.eval();
    assert_eq!(dut.count(), 0);
}

#[test]
fn test_eight_bit_overflow_wraps() {
    let mut dut = running(8);
    for _ in 0..255 {
        clock(&mut dut);
    }
    assert_eq!(dut.count(), 255);
    clock(&mut dut);
    assert_eq!(dut.count(), 0);
    clock(&mut dut);
    assert_eq!(dut.count(), 1);
}

#[test]
fn test_sixty_four_bit_counter_does_not_mask() {
    let mut dut = running(64);
    for _ in 0..300 {
        clock(&mut dut);
    }
    assert_eq!(dut.count(), 300);
}

#[test]
fn test_signals_snapshot() {
    let mut dut = running(8);
    clock(&mut dut);
    assert_eq!(
        dut.signals(),
        vec![
            Signal::wire("clk", true),
            Signal::wire("rst_n", true),
            Signal::wire("enable", true),
            Signal::bus("count", 8, 1),
        ]
    );
}

proptest! {
    #[test]
    fn prop_count_is_edges_modulo_width(width in 1u32..=16, edges in 0u64..2000) {
        let mut dut = running(width);
        for _ in 0..edges {
            clock(&mut dut);
        }
        prop_assert_eq!(dut.count(), edges % (1u64 << width));
    }

    #[test]
    fn prop_count_never_exceeds_width(width in 1u32..=8, edges in 0u64..600) {
        let mut dut = running(width);
        for _ in 0..edges {
            clock(&mut dut);
            prop_assert!(dut.count() < (1u64 << width));
        }
    }
}
