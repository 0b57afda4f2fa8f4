//! Run statistics collection and reporting.
//!
//! This module tracks what a testbench run did. It provides:
//! 1. **Progress:** Cycles executed and model evaluations performed.
//! 2. **Tracing:** Samples written to the waveform artifact, if any.
//! 3. **Outcome:** Final `count` value and whether the backend ended the run early.

use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Statistics for one testbench run.
#[derive(Clone, Debug)]
pub struct RunStats {
    start_time: Instant,
    elapsed: Option<Duration>,
    /// Full clock cycles executed.
    pub cycles: u64,
    /// Cycles spent in the reset window.
    pub reset_cycles: u64,
    /// Calls to the model's `eval`.
    pub evaluations: u64,
    /// Samples written to the trace artifact; `None` when tracing was off.
    pub trace_samples: Option<u64>,
    /// `count` as reported after the last executed cycle.
    pub final_count: u64,
    /// Set when a backend finish request stopped the run before its last cycle.
    pub finished_early: bool,
}

impl Default for RunStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed: None,
            cycles: 0,
            reset_cycles: 0,
            evaluations: 0,
            trace_samples: None,
            final_count: 0,
            finished_early: false,
        }
    }
}

impl RunStats {
    /// Freezes the wall-clock duration of the run.
    pub fn stop_clock(&mut self) {
        self.elapsed = Some(self.start_time.elapsed());
    }

    /// Wall-clock duration of the run (up to now if still running).
    pub fn elapsed(&self) -> Duration {
        self.elapsed.unwrap_or_else(|| self.start_time.elapsed())
    }

    /// Writes a human-readable summary to `out`.
    pub fn write_report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let seconds = self.elapsed().as_secs_f64();
        writeln!(out, "==========================================================")?;
        writeln!(out, "COUNTER TESTBENCH STATISTICS")?;
        writeln!(out, "==========================================================")?;
        writeln!(out, "host_seconds             {seconds:.6} s")?;
        writeln!(out, "sim_cycles               {}", self.cycles)?;
        writeln!(out, "sim_reset_cycles         {}", self.reset_cycles)?;
        writeln!(out, "sim_evals                {}", self.evaluations)?;
        match self.trace_samples {
            Some(samples) => writeln!(out, "trace_samples            {samples}")?,
            None => writeln!(out, "trace_samples            (disabled)")?,
        }
        writeln!(out, "final_count              {}", self.final_count)?;
        if self.finished_early {
            writeln!(out, "finished_early           yes")?;
        }
        writeln!(out, "==========================================================")
    }
}
