//! Devices under test.
//!
//! The driver only talks to the [`Dut`] trait; [`Counter`] is the model shipped
//! with the testbench.

/// Behavioral counter model.
pub mod counter;

/// The `Dut` trait.
pub mod traits;

pub use counter::Counter;
pub use traits::Dut;
