use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use clocktb_core::config::Config;
use clocktb_core::dut::Dut;
use clocktb_core::sim::{SimContext, Testbench};
use clocktb_core::stats::RunStats;
use tracing_subscriber::EnvFilter;

/// Installs a test-writer subscriber once per process. Honors `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// In-memory `Write` sink whose contents stay readable after the writer is
/// moved into a tracer.
#[derive(Clone, Debug, Default)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Result of a complete in-memory run.
pub struct RunOutput {
    pub report: String,
    pub vcd: String,
    pub stats: RunStats,
}

/// Runs `dut` to completion, capturing stdout and the waveform in memory.
pub fn run_in_memory<D: Dut>(dut: D, ctx: SimContext, config: &Config) -> RunOutput {
    init_tracing();
    let trace = SharedBuffer::new();
    let mut report = Vec::new();
    let tb = Testbench::with_writer(dut, ctx, config, trace.clone()).unwrap();
    let stats = tb.execute(&mut report).unwrap();
    RunOutput {
        report: String::from_utf8(report).unwrap(),
        vcd: trace.contents(),
        stats,
    }
}

/// Parses `Cycle <n>: count = <value>` lines into `(n, value)` pairs.
pub fn parse_report(report: &str) -> Vec<(u64, u64)> {
    report
        .lines()
        .map(|line| {
            let rest = line.strip_prefix("Cycle ").unwrap();
            let (cycle, count) = rest.split_once(": count = ").unwrap();
            (cycle.parse().unwrap(), count.parse().unwrap())
        })
        .collect()
}

/// Timestamps (`#<t>` lines) in a VCD body, in file order.
pub fn vcd_timestamps(vcd: &str) -> Vec<u64> {
    vcd.lines()
        .filter_map(|line| line.trim().strip_prefix('#'))
        .map(|t| t.parse().unwrap())
        .collect()
}

/// Expected report for the counter model under the given reset window and width.
pub fn expected_counts(cycles: u64, reset_cycles: u64, width: u32) -> Vec<(u64, u64)> {
    let modulus = 1u128 << width;
    (0..cycles)
        .map(|cycle| {
            let count = if cycle < reset_cycles {
                0
            } else {
                (u128::from(cycle - reset_cycles + 1) % modulus) as u64
            };
            (cycle, count)
        })
        .collect()
}
