//! Error definitions.
//!
//! This module defines the error types surfaced by the testbench. It provides:
//! 1. **Configuration Errors:** Reading, parsing, and validating run settings.
//! 2. **Trace Errors:** Failures and invariant violations in the waveform recorder.
//! 3. **Simulation Errors:** The top-level error returned by a run.
//!
//! The run loop itself has no recoverable failure modes; these errors cover the
//! I/O and configuration surfaces around it.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading or validating a [`Config`](crate::config::Config).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    Read {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The configuration text is not valid JSON for [`Config`](crate::config::Config).
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A run must execute at least one cycle.
    #[error("run.cycles must be at least 1")]
    ZeroCycles,

    /// The reset window is longer than the run.
    #[error("run.reset_cycles ({reset_cycles}) exceeds run.cycles ({cycles})")]
    ResetWindowTooLong {
        /// Requested reset window length.
        reset_cycles: u64,
        /// Requested run length.
        cycles: u64,
    },

    /// The counter width is outside the supported range.
    #[error("dut.width must be in 1..={max}, got {width}")]
    InvalidWidth {
        /// Requested width.
        width: u32,
        /// Largest supported width.
        max: u32,
    },
}

/// Errors produced by the waveform recorder.
#[derive(Debug, Error)]
pub enum TraceError {
    /// Writing the trace artifact failed.
    #[error("trace I/O error: {0}")]
    Io(#[from] io::Error),

    /// A sample was requested at or before the previous sample's timestamp.
    #[error("trace timestamp {requested} is not after previous timestamp {last}")]
    NonMonotonicTimestamp {
        /// Timestamp of the previous sample.
        last: u64,
        /// Timestamp that was rejected.
        requested: u64,
    },

    /// A sampled signal was never declared in the trace header.
    #[error("signal `{0}` was not declared when the trace was opened")]
    UnknownSignal(String),

    /// The sampled signal set does not match the declared one.
    #[error("expected {expected} signals per sample, got {actual}")]
    SignalSetChanged {
        /// Number of declared signals.
        expected: usize,
        /// Number of signals in the rejected sample.
        actual: usize,
    },
}

/// Top-level error type for a testbench run.
#[derive(Debug, Error)]
pub enum SimError {
    /// Invalid or unreadable configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The waveform recorder failed.
    #[error(transparent)]
    Trace(#[from] TraceError),

    /// Reporting a cycle to the output stream failed.
    #[error("failed to write cycle report: {0}")]
    Output(#[source] io::Error),
}

/// Convenience alias for results returned by the testbench.
pub type Result<T, E = SimError> = std::result::Result<T, E>;
