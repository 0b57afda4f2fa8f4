//! Simulation backend context.
//!
//! Holds the process-wide simulation flags a compiled-RTL backend normally
//! keeps globally: whether a `$finish` has been requested, and whether
//! trace-capable evaluation has been switched on.
//!
//! The finish flag is shared through an `Arc` so a device model can be handed
//! a [`FinishHandle`] and request termination itself.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Backend simulation flags.
#[derive(Debug, Clone, Default)]
pub struct SimContext {
    finish: Arc<AtomicBool>,
    trace_ever_on: bool,
}

impl SimContext {
    /// Creates a context with no finish requested and tracing off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once any holder of a [`FinishHandle`] has requested a finish.
    pub fn got_finish(&self) -> bool {
        self.finish.load(Ordering::Relaxed)
    }

    /// Requests that the simulation finish.
    pub fn request_finish(&self) {
        self.finish.store(true, Ordering::Relaxed);
    }

    /// Handle a device model can use to request a finish.
    pub fn finish_handle(&self) -> FinishHandle {
        FinishHandle(Arc::clone(&self.finish))
    }

    /// Switches trace-capable evaluation. Must be on before a recorder is
    /// opened; the driver only samples while it stays on.
    pub fn trace_ever_on(&mut self, on: bool) {
        self.trace_ever_on = on;
    }

    /// Whether trace-capable evaluation has been switched on.
    pub const fn tracing_enabled(&self) -> bool {
        self.trace_ever_on
    }
}

/// Cloneable handle to a context's finish flag.
#[derive(Debug, Clone)]
pub struct FinishHandle(Arc<AtomicBool>);

impl FinishHandle {
    /// Requests that the simulation finish.
    pub fn request(&self) {
        self.0.store(true, Ordering::Relaxed);
    }
}
