//! Waveform capture.

/// VCD recorder.
pub mod vcd;

pub use self::vcd::VcdTracer;
