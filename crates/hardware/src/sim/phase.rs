//! Reset-window policy.
//!
//! Two states with a single transition: the DUT is held in reset for the
//! first `reset_cycles` cycles, then released with counting enabled. There is
//! no path back to `Resetting`.

use std::fmt;

/// Stimulus phase of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// `rst_n` held low.
    #[default]
    Resetting,
    /// `rst_n` released and `enable` driven high.
    Running,
}

impl Phase {
    /// Phase that applies at `cycle`, given the current phase.
    pub const fn advance(self, cycle: u64, reset_cycles: u64) -> Self {
        match self {
            Self::Resetting if cycle < reset_cycles => Self::Resetting,
            _ => Self::Running,
        }
    }

    /// Level driven on `rst_n` in this phase.
    pub const fn reset_n(self) -> bool {
        matches!(self, Self::Running)
    }

    /// Level driven on `enable` in this phase, if this phase drives it.
    ///
    /// The reset window leaves `enable` at its initial low level.
    pub const fn enable(self) -> Option<bool> {
        match self {
            Self::Resetting => None,
            Self::Running => Some(true),
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resetting => write!(f, "resetting"),
            Self::Running => write!(f, "running"),
        }
    }
}
