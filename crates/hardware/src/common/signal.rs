//! Port value snapshots.
//!
//! A [`Signal`] is the unit exchanged between a device model and the waveform
//! recorder: the port name, its bit width, and its current value.

use std::fmt;

/// Snapshot of one named DUT port.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Signal {
    /// HDL port name (e.g. `"rst_n"`).
    pub name: &'static str,
    /// Port width in bits; 1 for single-bit wires.
    pub width: u32,
    /// Current value, right-aligned. Bits above `width` are zero.
    pub value: u64,
}

impl Signal {
    /// Creates a single-bit signal.
    #[inline]
    pub const fn wire(name: &'static str, level: bool) -> Self {
        Self {
            name,
            width: 1,
            value: level as u64,
        }
    }

    /// Creates a multi-bit signal, masking `value` to `width` bits.
    #[inline]
    pub const fn bus(name: &'static str, width: u32, value: u64) -> Self {
        Self {
            name,
            width,
            value: value & width_mask(width),
        }
    }

    /// Returns true for single-bit signals.
    #[inline]
    pub const fn is_wire(&self) -> bool {
        self.width == 1
    }

    /// Iterates over the value's bits, most significant first.
    pub fn bits_msb_first(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.width).rev().map(move |bit| (self.value >> bit) & 1 == 1)
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_wire() {
            write!(f, "{}={}", self.name, self.value)
        } else {
            write!(f, "{}[{}:0]={:#x}", self.name, self.width - 1, self.value)
        }
    }
}

/// All-ones mask covering the low `width` bits.
#[inline]
pub const fn width_mask(width: u32) -> u64 {
    if width >= u64::BITS {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}
