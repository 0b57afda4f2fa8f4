//! Global Testbench Constants.
//!
//! This module defines the fixed parameters of the counter testbench. It includes:
//! 1. **Run Length:** Total cycle count and the length of the reset window.
//! 2. **Timing:** Number of trace samples taken per clock cycle.
//! 3. **Artifacts:** Default waveform file name.
//! 4. **Model:** Default counter width.

/// Number of clock cycles executed by a default run.
pub const TOTAL_CYCLES: u64 = 100;

/// Cycles during which `rst_n` is held low before counting is enabled.
pub const RESET_CYCLES: u64 = 5;

/// Trace samples recorded per clock cycle (falling edge, rising edge).
pub const SAMPLES_PER_CYCLE: u64 = 2;

/// Waveform artifact written when tracing is enabled.
pub const TRACE_FILE: &str = "counter.vcd";

/// Default counter register width in bits.
pub const COUNTER_WIDTH: u32 = 8;

/// Widest counter register the model supports.
pub const MAX_COUNTER_WIDTH: u32 = 64;

/// Timestamp of the falling-edge sample for `cycle`.
#[inline]
pub const fn falling_edge_time(cycle: u64) -> u64 {
    cycle * SAMPLES_PER_CYCLE
}

/// Timestamp of the rising-edge sample for `cycle`.
#[inline]
pub const fn rising_edge_time(cycle: u64) -> u64 {
    cycle * SAMPLES_PER_CYCLE + 1
}
