//! Simulation driver.
//!
//! Provides the [`Testbench`] clock sequencer, the reset-window [`Phase`]
//! policy, and the backend [`SimContext`].

pub mod context;
pub mod phase;
pub mod testbench;

use std::io::Write;

pub use context::{FinishHandle, SimContext};
pub use phase::Phase;
pub use testbench::Testbench;

use crate::common::Result;
use crate::config::Config;
use crate::dut::Counter;
use crate::stats::RunStats;

/// Runs the counter model under `config`, reporting each cycle to `out`.
///
/// Validates `config`, builds a [`Counter`] of the configured width, and
/// executes the full run including teardown.
pub fn run_counter<O: Write>(config: &Config, ctx: SimContext, out: &mut O) -> Result<RunStats> {
    config.validate()?;
    let dut = Counter::new(config.dut.width);
    Testbench::new(dut, ctx, config)?.execute(out)
}
