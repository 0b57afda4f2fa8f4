//! Counter testbench library.
//!
//! This crate drives a synchronous counter model through a reset sequence and a
//! fixed number of clock cycles, with the following:
//! 1. **Driver:** Reset-window policy and half-cycle clock sequencing.
//! 2. **DUT:** The `Dut` port contract and a behavioral counter model.
//! 3. **Tracing:** VCD waveform capture at `2*cycle` / `2*cycle + 1`.
//! 4. **Configuration:** Run length, reset window, trace, and model settings.
//! 5. **Statistics:** A summary of each run.

/// Common types and constants (run defaults, errors, signal snapshots).
pub mod common;
/// Testbench configuration (defaults, JSON loading, validation).
pub mod config;
/// Device-under-test contract and the counter model.
pub mod dut;
/// Clock sequencer, reset-window phase, and backend context.
pub mod sim;
/// Run statistics collection and reporting.
pub mod stats;
/// VCD waveform recorder.
pub mod trace;

/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// Behavioral counter model.
pub use crate::dut::{Counter, Dut};
/// Clock sequencer; construct with `Testbench::new`.
pub use crate::sim::{SimContext, Testbench};
