//! Stimulus driver and clock sequencer.
//!
//! `Testbench` owns the DUT and the optional waveform recorder for the length
//! of a run. Each cycle it:
//! 1. **Applies the reset-window policy:** `rst_n` low while resetting; `rst_n`
//!    and `enable` high once running.
//! 2. **Falling half-cycle:** `clk = 0`, evaluate, sample at `2*cycle`.
//! 3. **Rising half-cycle:** `clk = 1`, evaluate, sample at `2*cycle + 1`.
//! 4. **Reports** `Cycle <n>: count = <value>` to the output stream.
//!
//! Teardown is explicit: [`Testbench::finish`] closes the recorder before the
//! DUT is released.

use std::fs::File;
use std::io::{BufWriter, Write};

use tracing::{debug, info, warn};

use crate::common::constants::{falling_edge_time, rising_edge_time};
use crate::common::{Result, SimError, Signal, TraceError};
use crate::config::{Config, RunConfig, TraceConfig};
use crate::dut::Dut;
use crate::sim::context::SimContext;
use crate::sim::phase::Phase;
use crate::stats::RunStats;
use crate::trace::VcdTracer;

/// Cycle-driving testbench over a [`Dut`].
///
/// `W` is the sink of the waveform recorder; it defaults to a buffered file.
#[derive(Debug)]
pub struct Testbench<D: Dut, W: Write = BufWriter<File>> {
    dut: D,
    ctx: SimContext,
    tracer: Option<VcdTracer<W>>,
    run: RunConfig,
    phase: Phase,
    /// Finish already flagged at construction; only later requests end the run.
    finished_at_start: bool,
    /// Next cycle to execute.
    cycle: u64,
    stats: RunStats,
}

impl<D: Dut> Testbench<D> {
    /// Applies the initial input vector and, if enabled, opens the trace file
    /// named by `config.trace.path`.
    ///
    /// Tracing is attempted only when `config.trace.enabled` is set and the
    /// backend has not already flagged a finish.
    pub fn new(dut: D, ctx: SimContext, config: &Config) -> Result<Self> {
        let trace = &config.trace;
        Self::build(dut, ctx, config, |name, signals| {
            VcdTracer::create(&trace.path, name, signals, trace.timescale)
        })
    }
}

impl<D: Dut, W: Write> Testbench<D, W> {
    /// As [`Testbench::new`], but records the waveform into `writer` instead of
    /// a file. `writer` is dropped unused when tracing is not attempted.
    pub fn with_writer(dut: D, ctx: SimContext, config: &Config, writer: W) -> Result<Self> {
        let timescale = config.trace.timescale;
        Self::build(dut, ctx, config, |name, signals| {
            VcdTracer::open(writer, name, signals, timescale)
        })
    }

    fn build<F>(dut: D, ctx: SimContext, config: &Config, open: F) -> Result<Self>
    where
        F: FnOnce(&str, &[Signal]) -> Result<VcdTracer<W>, TraceError>,
    {
        let mut tb = Self::idle(dut, ctx, config.run);
        if tb.should_trace(&config.trace) {
            tb.ctx.trace_ever_on(true);
            let signals = tb.dut.signals();
            tb.tracer = Some(open(tb.dut.name(), &signals)?);
            info!(dut = tb.dut.name(), "waveform capture enabled");
        }
        Ok(tb)
    }

    /// Builds the driver with `rst_n`, `enable`, and `clk` all driven low.
    fn idle(mut dut: D, ctx: SimContext, run: RunConfig) -> Self {
        dut.set_reset_n(false);
        dut.set_enable(false);
        dut.set_clock(false);
        let finished_at_start = ctx.got_finish();
        Self {
            dut,
            ctx,
            finished_at_start,
            tracer: None,
            run,
            phase: Phase::Resetting,
            cycle: 0,
            stats: RunStats::default(),
        }
    }

    /// A finish raised after construction. One already pending at startup only
    /// suppresses tracing.
    fn finish_requested(&self) -> bool {
        !self.finished_at_start && self.ctx.got_finish()
    }

    fn should_trace(&self, trace: &TraceConfig) -> bool {
        if !trace.enabled {
            return false;
        }
        if self.ctx.got_finish() {
            warn!("backend already finished; skipping waveform capture");
            return false;
        }
        true
    }

    /// Executes the next clock cycle and returns the resulting `count`.
    ///
    /// Shares the cycle counter with [`Testbench::run`], which continues from
    /// wherever stepping left off.
    pub fn step(&mut self) -> Result<u64> {
        let cycle = self.cycle;
        let phase = self.phase.advance(cycle, self.run.reset_cycles);
        if phase != self.phase {
            debug!(cycle, from = %self.phase, to = %phase, "reset window closed");
            self.phase = phase;
        }

        self.dut.set_reset_n(self.phase.reset_n());
        if let Some(enable) = self.phase.enable() {
            self.dut.set_enable(enable);
        }

        self.half_cycle(false, falling_edge_time(cycle))?;
        self.half_cycle(true, rising_edge_time(cycle))?;

        if self.phase == Phase::Resetting {
            self.stats.reset_cycles += 1;
        }
        self.stats.cycles += 1;
        self.cycle += 1;
        let count = self.dut.count();
        self.stats.final_count = count;
        Ok(count)
    }

    fn half_cycle(&mut self, clk: bool, time: u64) -> Result<()> {
        self.dut.set_clock(clk);
        self.dut.eval();
        self.stats.evaluations += 1;
        if !self.ctx.tracing_enabled() {
            return Ok(());
        }
        if let Some(tracer) = self.tracer.as_mut() {
            tracer.dump(time, &self.dut.signals())?;
        }
        Ok(())
    }

    /// Runs the remaining cycles, writing one report line per cycle to `out`.
    ///
    /// Stops after the current cycle if the backend requests a finish during
    /// the run.
    pub fn run<O: Write>(&mut self, out: &mut O) -> Result<()> {
        info!(
            cycles = self.run.cycles,
            reset_cycles = self.run.reset_cycles,
            dut = self.dut.name(),
            "starting run"
        );
        while self.cycle < self.run.cycles {
            let cycle = self.cycle;
            let count = self.step()?;
            writeln!(out, "Cycle {cycle}: count = {count}").map_err(SimError::Output)?;

            if self.finish_requested() && self.cycle < self.run.cycles {
                warn!(cycle, "finish requested by backend; ending run early");
                self.stats.finished_early = true;
                break;
            }
        }
        out.flush().map_err(SimError::Output)
    }

    /// Closes the recorder, then releases the DUT.
    pub fn finish(mut self) -> Result<RunStats> {
        if let Some(tracer) = self.tracer.take() {
            self.stats.trace_samples = Some(tracer.close()?);
        }
        drop(self.dut);
        self.stats.stop_clock();
        info!(
            cycles = self.stats.cycles,
            final_count = self.stats.final_count,
            "run complete"
        );
        Ok(self.stats)
    }

    /// Runs every cycle and tears down.
    pub fn execute<O: Write>(mut self, out: &mut O) -> Result<RunStats> {
        self.run(out)?;
        self.finish()
    }

    /// The device under test.
    pub const fn dut(&self) -> &D {
        &self.dut
    }

    /// The backend context.
    pub const fn context(&self) -> &SimContext {
        &self.ctx
    }

    /// Mutable backend context. Switching `trace_ever_on` off pauses sampling
    /// without closing the recorder.
    pub const fn context_mut(&mut self) -> &mut SimContext {
        &mut self.ctx
    }

    /// Next cycle to execute.
    pub const fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Current reset-window phase.
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a recorder is open.
    pub const fn is_tracing(&self) -> bool {
        self.tracer.is_some()
    }

    /// Statistics gathered so far.
    pub const fn stats(&self) -> &RunStats {
        &self.stats
    }
}
