//! VCD waveform recorder.
//!
//! Writes a Value Change Dump of the DUT ports. The header declares one scope
//! named after the DUT and one variable per [`Signal`]; each [`VcdTracer::dump`]
//! emits a `#time` marker followed by the values that changed since the
//! previous sample (all values on the first sample, inside `$dumpvars`).
//!
//! Timestamps must be strictly increasing. A repeated or earlier timestamp is
//! rejected before anything is written.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;
use ::vcd::{IdCode, SimulationCommand, Value, VarType, Writer};

use crate::common::{Signal, TraceError};
use crate::config::Timescale;

/// A declared VCD variable.
#[derive(Debug, Clone, Copy)]
struct TracedVar {
    name: &'static str,
    width: u32,
    id: IdCode,
    last: Option<u64>,
}

/// VCD writer bound to a fixed set of DUT ports.
pub struct VcdTracer<W: Write> {
    vcd: Writer<W>,
    vars: Vec<TracedVar>,
    last_time: Option<u64>,
    samples: u64,
}

impl<W: Write> fmt::Debug for VcdTracer<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VcdTracer")
            .field("vars", &self.vars.len())
            .field("last_time", &self.last_time)
            .field("samples", &self.samples)
            .finish_non_exhaustive()
    }
}

impl VcdTracer<BufWriter<File>> {
    /// Creates (or truncates) `path` and writes the VCD header to it.
    pub fn create(
        path: impl AsRef<Path>,
        module: &str,
        signals: &[Signal],
        timescale: Timescale,
    ) -> Result<Self, TraceError> {
        let path = path.as_ref();
        let file = File::create(path)?;
        debug!(path = %path.display(), module, "opened trace artifact");
        Self::open(BufWriter::new(file), module, signals, timescale)
    }
}

impl<W: Write> VcdTracer<W> {
    /// Writes the VCD header for `signals` under a `module` scope.
    ///
    /// The declared signal set is fixed for the lifetime of the tracer.
    pub fn open(
        writer: W,
        module: &str,
        signals: &[Signal],
        timescale: Timescale,
    ) -> Result<Self, TraceError> {
        let mut vcd = Writer::new(writer);
        vcd.timescale(timescale.magnitude, timescale.unit.into())?;
        vcd.add_module(module)?;

        let mut vars = Vec::with_capacity(signals.len());
        for signal in signals {
            let var_type = if signal.is_wire() {
                VarType::Wire
            } else {
                VarType::Reg
            };
            let id = vcd.add_var(var_type, signal.width, signal.name, None)?;
            vars.push(TracedVar {
                name: signal.name,
                width: signal.width,
                id,
                last: None,
            });
        }

        vcd.upscope()?;
        vcd.enddefinitions()?;

        Ok(Self {
            vcd,
            vars,
            last_time: None,
            samples: 0,
        })
    }

    /// Records `signals` at simulated time `time`.
    ///
    /// `signals` must list the declared ports in declaration order.
    ///
    /// # Errors
    ///
    /// * [`TraceError::NonMonotonicTimestamp`] if `time` is not after the previous sample.
    /// * [`TraceError::SignalSetChanged`] / [`TraceError::UnknownSignal`] if `signals`
    ///   does not match the header.
    /// * [`TraceError::Io`] if the underlying writer fails.
    pub fn dump(&mut self, time: u64, signals: &[Signal]) -> Result<(), TraceError> {
        if let Some(last) = self.last_time.filter(|&last| time <= last) {
            return Err(TraceError::NonMonotonicTimestamp {
                last,
                requested: time,
            });
        }
        if signals.len() != self.vars.len() {
            return Err(TraceError::SignalSetChanged {
                expected: self.vars.len(),
                actual: signals.len(),
            });
        }
        if let Some(signal) = signals
            .iter()
            .zip(&self.vars)
            .find_map(|(signal, var)| (signal.name != var.name).then_some(signal))
        {
            return Err(TraceError::UnknownSignal(signal.name.to_owned()));
        }

        let initial = self.last_time.is_none();
        self.vcd.timestamp(time)?;
        if initial {
            self.vcd.begin(SimulationCommand::Dumpvars)?;
        }
        for (signal, var) in signals.iter().zip(self.vars.iter_mut()) {
            if var.last == Some(signal.value) {
                continue;
            }
            if var.width == 1 {
                self.vcd.change_scalar(var.id, bit(signal.value & 1 == 1))?;
            } else {
                self.vcd
                    .change_vector(var.id, signal.bits_msb_first().map(bit))?;
            }
            var.last = Some(signal.value);
        }
        if initial {
            self.vcd.end()?;
        }

        self.last_time = Some(time);
        self.samples += 1;
        Ok(())
    }

    /// Number of samples written so far.
    pub const fn samples(&self) -> u64 {
        self.samples
    }

    /// Timestamp of the most recent sample.
    pub const fn last_time(&self) -> Option<u64> {
        self.last_time
    }

    /// Flushes buffered output and releases the writer.
    ///
    /// Returns the number of samples written.
    pub fn close(mut self) -> Result<u64, TraceError> {
        self.vcd.flush()?;
        debug!(samples = self.samples, "closed trace artifact");
        Ok(self.samples)
    }
}

const fn bit(level: bool) -> Value {
    if level { Value::V1 } else { Value::V0 }
}
