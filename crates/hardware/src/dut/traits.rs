//! Device-under-test interface.
//!
//! This module defines the `Dut` trait implemented by every model the driver can exercise. It provides:
//! 1. **Inputs:** Level setters for the `rst_n`, `enable`, and `clk` ports.
//! 2. **Output:** The current `count` value.
//! 3. **Evaluation:** `eval` propagates the applied inputs through the model's logic.
//! 4. **Introspection:** A port snapshot for the waveform recorder.
//!
//! Any model exposing the same named-port contract can stand in for the counter.

use crate::common::Signal;

/// A synchronous counter-style device driven by the testbench.
///
/// Input setters only latch the new level; nothing propagates until [`Dut::eval`]
/// is called, matching the settle-on-evaluate behavior of compiled RTL models.
pub trait Dut {
    /// Module name used as the VCD scope (e.g. `"counter"`).
    fn name(&self) -> &str;

    /// Drives the active-low reset input.
    fn set_reset_n(&mut self, level: bool);

    /// Drives the count-enable input.
    fn set_enable(&mut self, level: bool);

    /// Drives the clock input.
    fn set_clock(&mut self, level: bool);

    /// Current value of the `count` output.
    fn count(&self) -> u64;

    /// Settles outputs under the current input vector.
    fn eval(&mut self);

    /// Snapshot of every traced port, in a stable order.
    fn signals(&self) -> Vec<Signal>;
}

impl<D: Dut + ?Sized> Dut for Box<D> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn set_reset_n(&mut self, level: bool) {
        (**self).set_reset_n(level);
    }

    fn set_enable(&mut self, level: bool) {
        (**self).set_enable(level);
    }

    fn set_clock(&mut self, level: bool) {
        (**self).set_clock(level);
    }

    fn count(&self) -> u64 {
        (**self).count()
    }

    fn eval(&mut self) {
        (**self).eval();
    }

    fn signals(&self) -> Vec<Signal> {
        (**self).signals()
    }
}
