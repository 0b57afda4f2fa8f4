//! Behavioral counter model.
//!
//! Equivalent of the RTL module:
//!
//! ```text
//! always_ff @(posedge clk or negedge rst_n)
//!     if (!rst_n)      count <= '0;
//!     else if (enable) count <= count + 1'b1;
//! ```
//!
//! # Ports
//!
//! * `clk`: clock, counts on the rising edge.
//! * `rst_n`: asynchronous active-low reset to 0.
//! * `enable`: count enable; the value holds while low.
//! * `count[WIDTH-1:0]`: wraps modulo `2^WIDTH`.

use crate::common::constants::COUNTER_WIDTH;
use crate::common::{Signal, width_mask};
use crate::dut::Dut;

/// Module name reported to the trace recorder.
const MODULE_NAME: &str = "counter";

/// Counter model state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    width: u32,
    mask: u64,
    clk: bool,
    rst_n: bool,
    enable: bool,
    /// Clock level seen by the previous `eval`, for edge detection.
    last_clk: bool,
    count: u64,
}

impl Counter {
    /// Creates a counter `width` bits wide with all inputs low.
    ///
    /// Callers validate `width` through [`Config::validate`](crate::config::Config::validate);
    /// values above 64 behave as 64.
    pub const fn new(width: u32) -> Self {
        Self {
            width,
            mask: width_mask(width),
            clk: false,
            rst_n: false,
            enable: false,
            last_clk: false,
            count: 0,
        }
    }

    /// Register width in bits.
    pub const fn width(&self) -> u32 {
        self.width
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new(COUNTER_WIDTH)
    }
}

impl Dut for Counter {
    fn name(&self) -> &str {
        MODULE_NAME
    }

    fn set_reset_n(&mut self, level: bool) {
        self.rst_n = level;
    }

    fn set_enable(&mut self, level: bool) {
        self.enable = level;
    }

    fn set_clock(&mut self, level: bool) {
        self.clk = level;
    }

    fn count(&self) -> u64 {
        self.count
    }

    fn eval(&mut self) {
        let posedge = self.clk && !self.last_clk;
        self.last_clk = self.clk;

        if !self.rst_n {
            self.count = 0;
        } else if posedge && self.enable {
            self.count = self.count.wrapping_add(1) & self.mask;
        }
    }

    fn signals(&self) -> Vec<Signal> {
        vec![
            Signal::wire("clk", self.clk),
            Signal::wire("rst_n", self.rst_n),
            Signal::wire("enable", self.enable),
            Signal::bus("count", self.width, self.count),
        ]
    }
}
