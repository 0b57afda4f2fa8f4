//! Configuration system for the counter testbench.
//!
//! This module defines the configuration structures used to parameterize a run. It provides:
//! 1. **Defaults:** The fixed run length, reset window, trace artifact, and counter width.
//! 2. **Structures:** Hierarchical config for the run, the trace recorder, and the DUT model.
//! 3. **Validation:** Rejection of settings the driver cannot honor.
//!
//! Configuration is supplied as JSON (`--config` on the CLI) or use `Config::default()`,
//! which reproduces the fixed 100-cycle run.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::common::constants::{self, MAX_COUNTER_WIDTH};
use crate::common::error::ConfigError;

/// Default configuration constants for the testbench.
mod defaults {
    use crate::common::constants;

    /// Total cycles in a run.
    pub const CYCLES: u64 = constants::TOTAL_CYCLES;

    /// Cycles held in reset before counting is enabled.
    pub const RESET_CYCLES: u64 = constants::RESET_CYCLES;

    /// Waveform capture is on unless explicitly disabled.
    pub const TRACE_ENABLED: bool = true;

    /// Magnitude of the VCD timescale (`1ps`).
    pub const TIMESCALE_MAGNITUDE: u32 = 1;

    /// Counter register width in bits.
    pub const WIDTH: u32 = constants::COUNTER_WIDTH;
}

/// Unit of the VCD `$timescale` declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimescaleUnit {
    /// Seconds.
    S,
    /// Milliseconds.
    Ms,
    /// Microseconds.
    Us,
    /// Nanoseconds.
    Ns,
    /// Picoseconds.
    #[default]
    Ps,
    /// Femtoseconds.
    Fs,
}

impl From<TimescaleUnit> for vcd::TimescaleUnit {
    fn from(unit: TimescaleUnit) -> Self {
        match unit {
            TimescaleUnit::S => Self::S,
            TimescaleUnit::Ms => Self::MS,
            TimescaleUnit::Us => Self::US,
            TimescaleUnit::Ns => Self::NS,
            TimescaleUnit::Ps => Self::PS,
            TimescaleUnit::Fs => Self::FS,
        }
    }
}

/// Root configuration structure containing all testbench settings.
///
/// # Examples
///
/// ```
/// use clocktb_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.run.cycles, 100);
/// assert_eq!(config.run.reset_cycles, 5);
/// assert!(config.trace.enabled);
/// ```
///
/// Deserializing a partial override from JSON:
///
/// ```
/// use clocktb_core::config::{Config, TimescaleUnit};
///
/// let json = r#"{
///     "run": { "cycles": 300 },
///     "trace": { "path": "wide.vcd", "timescale": { "magnitude": 10, "unit": "ns" } },
///     "dut": { "width": 4 }
/// }"#;
///
/// let config = Config::from_json_str(json).unwrap();
/// assert_eq!(config.run.cycles, 300);
/// assert_eq!(config.run.reset_cycles, 5);
/// assert_eq!(config.trace.timescale.unit, TimescaleUnit::Ns);
/// assert_eq!(config.dut.width, 4);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Cycle count and reset window.
    #[serde(default)]
    pub run: RunConfig,
    /// Waveform capture settings.
    #[serde(default)]
    pub trace: TraceConfig,
    /// Device model parameters.
    #[serde(default)]
    pub dut: DutConfig,
}

impl Config {
    /// Parses and validates a JSON configuration string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses, and validates a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Checks the settings the driver relies on.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::ZeroCycles`] if `run.cycles` is 0.
    /// * [`ConfigError::ResetWindowTooLong`] if `run.reset_cycles > run.cycles`.
    /// * [`ConfigError::InvalidWidth`] if `dut.width` is not in `1..=64`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.run.cycles == 0 {
            return Err(ConfigError::ZeroCycles);
        }
        if self.run.reset_cycles > self.run.cycles {
            return Err(ConfigError::ResetWindowTooLong {
                reset_cycles: self.run.reset_cycles,
                cycles: self.run.cycles,
            });
        }
        if !(1..=MAX_COUNTER_WIDTH).contains(&self.dut.width) {
            return Err(ConfigError::InvalidWidth {
                width: self.dut.width,
                max: MAX_COUNTER_WIDTH,
            });
        }
        Ok(())
    }
}

/// Run length settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RunConfig {
    /// Number of full clock cycles to execute.
    #[serde(default = "RunConfig::default_cycles")]
    pub cycles: u64,

    /// Leading cycles with `rst_n` held low. Counting is enabled from this cycle on.
    #[serde(default = "RunConfig::default_reset_cycles")]
    pub reset_cycles: u64,
}

impl RunConfig {
    const fn default_cycles() -> u64 {
        defaults::CYCLES
    }

    const fn default_reset_cycles() -> u64 {
        defaults::RESET_CYCLES
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            cycles: defaults::CYCLES,
            reset_cycles: defaults::RESET_CYCLES,
        }
    }
}

/// `$timescale` declaration written to the VCD header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Timescale {
    /// Numeric magnitude (1, 10, or 100 in conforming VCD files).
    #[serde(default = "Timescale::default_magnitude")]
    pub magnitude: u32,
    /// Time unit.
    #[serde(default)]
    pub unit: TimescaleUnit,
}

impl Timescale {
    const fn default_magnitude() -> u32 {
        defaults::TIMESCALE_MAGNITUDE
    }
}

impl Default for Timescale {
    fn default() -> Self {
        Self {
            magnitude: defaults::TIMESCALE_MAGNITUDE,
            unit: TimescaleUnit::default(),
        }
    }
}

/// Waveform capture settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TraceConfig {
    /// Record a waveform when the backend has not already finished.
    #[serde(default = "TraceConfig::default_enabled")]
    pub enabled: bool,

    /// Output path of the VCD artifact.
    #[serde(default = "TraceConfig::default_path")]
    pub path: PathBuf,

    /// Timescale written to the VCD header.
    #[serde(default)]
    pub timescale: Timescale,
}

impl TraceConfig {
    const fn default_enabled() -> bool {
        defaults::TRACE_ENABLED
    }

    fn default_path() -> PathBuf {
        PathBuf::from(constants::TRACE_FILE)
    }
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::TRACE_ENABLED,
            path: Self::default_path(),
            timescale: Timescale::default(),
        }
    }
}

/// Parameters of the counter model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DutConfig {
    /// Counter register width; the count wraps modulo `2^width`.
    #[serde(default = "DutConfig::default_width")]
    pub width: u32,
}

impl DutConfig {
    const fn default_width() -> u32 {
        defaults::WIDTH
    }
}

impl Default for DutConfig {
    fn default() -> Self {
        Self {
            width: defaults::WIDTH,
        }
    }
}
