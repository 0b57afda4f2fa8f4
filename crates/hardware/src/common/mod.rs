//! Common utilities and types used throughout the testbench.
//!
//! This module provides the building blocks shared by the driver, the device
//! models, and the trace recorder. It includes:
//! 1. **Constants:** Run length, reset window, and artifact defaults.
//! 2. **Error Handling:** Configuration, trace, and simulation error types.
//! 3. **Signals:** Named port snapshots passed to the recorder.

/// Common constants used throughout the testbench.
pub mod constants;

/// Error types for configuration, tracing, and runs.
pub mod error;

/// Port value snapshots.
pub mod signal;

pub use constants::{RESET_CYCLES, TOTAL_CYCLES, TRACE_FILE};
pub use error::{ConfigError, Result, SimError, TraceError};
pub use signal::{Signal, width_mask};
