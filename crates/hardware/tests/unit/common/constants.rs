//! Unit tests for testbench constants.
//!
//! This module verifies the fixed run parameters and the timestamp mapping
//! from cycles to half-cycle samples.

use clocktb_core::common::constants::*;

#[test]
fn test_default_run_length() {
    assert_eq!(TOTAL_CYCLES, 100);
    assert_eq!(RESET_CYCLES, 5);
    assert!(RESET_CYCLES < TOTAL_CYCLES);
}

#[test]
fn test_trace_file_name() {
    assert_eq!(TRACE_FILE, "counter.vcd");
}

#[test]
fn test_edge_times_for_first_cycle() {
    assert_eq!(falling_edge_time(0), 0);
    assert_eq!(rising_edge_time(0), 1);
}

#[test]
fn test_edge_times_are_contiguous_across_cycles() {
    // Rising sample of one cycle is immediately followed by the next falling sample.
    for cycle in 0..TOTAL_CYCLES - 1 {
        assert_eq!(rising_edge_time(cycle) + 1, falling_edge_time(cycle + 1));
    }
}

#[test]
fn test_last_sample_time() {
    assert_eq!(
        rising_edge_time(TOTAL_CYCLES - 1),
        TOTAL_CYCLES * SAMPLES_PER_CYCLE - 1
    );
}
