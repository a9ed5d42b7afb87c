#![no_std]
#![forbid(unsafe_code)]

//! # CCU6 Core
//!
//! Vocabulary types and register primitive traits for the CCU6 capture/compare
//! unit. The unit contains two coupled counters, T12 (three compare channels,
//! optional center-aligned counting and dead time) and T13 (one compare
//! channel, can be started and stopped by T12 events).
//!
//! Drivers in this workspace never touch registers directly. They go through
//! the [`Ccu6Registers`], [`PinMux`] and [`InterruptRouter`] traits, which a
//! chip support crate or the simulated register model implements.

#[cfg(feature = "std")]
extern crate std;

use core::fmt;

pub mod interrupt;
pub mod output;
pub mod pins;
pub mod regs;
pub mod timer;

pub use interrupt::*;
pub use output::*;
pub use pins::*;
pub use regs::*;
pub use timer::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type used by configuration diagnostics
pub type Ccu6Result<T> = Result<T, Ccu6Error>;

/// Configuration faults that the hardware would silently accept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ccu6Error {
    /// T13 is synchronized to T12 with a no-action sync event and a nonzero waiting time
    SyncEventNoAction,
    /// Center-aligned T12 period is too small to halve, the register value wraps
    CenterAlignedPeriodTooSmall,
    /// Period does not fit the 16-bit period register
    PeriodOutOfRange,
    /// Compare value does not fit the 16-bit compare register
    CompareOutOfRange,
}

impl fmt::Display for Ccu6Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ccu6Error::SyncEventNoAction => {
                write!(f, "T13 synchronized to T12 with no-action sync event")
            }
            Ccu6Error::CenterAlignedPeriodTooSmall => {
                write!(f, "Center-aligned period too small")
            }
            Ccu6Error::PeriodOutOfRange => write!(f, "Period exceeds timer width"),
            Ccu6Error::CompareOutOfRange => write!(f, "Compare value exceeds timer width"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Ccu6Error {}

#[cfg(feature = "defmt")]
impl defmt::Format for Ccu6Error {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Ccu6Error::SyncEventNoAction => defmt::write!(fmt, "SyncEventNoAction"),
            Ccu6Error::CenterAlignedPeriodTooSmall => {
                defmt::write!(fmt, "CenterAlignedPeriodTooSmall")
            }
            Ccu6Error::PeriodOutOfRange => defmt::write!(fmt, "PeriodOutOfRange"),
            Ccu6Error::CompareOutOfRange => defmt::write!(fmt, "CompareOutOfRange"),
        }
    }
}
