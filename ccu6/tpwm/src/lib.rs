#![no_std]
#![forbid(unsafe_code)]

//! # CCU6 Timer PWM
//!
//! Synchronized PWM generation with the two CCU6 counters. T13 produces the
//! PWM signal and is started by a T12 event a configurable waiting time after
//! T12 starts; alternatively either timer can modulate on its own.
//!
//! ```rust,ignore
//! let mut config = Config::new(&CCU60);
//! config.base.active_count = 200;
//! config.timer12.dead_time_value = 8;
//!
//! let mut pwm = TPwm::init_module(&config);
//! pwm.start();
//! // ...
//! pwm.pause();
//! pwm.resume();
//! pwm.stop();
//! ```

pub(crate) mod fmt;

pub mod config;
pub mod lifecycle;
pub mod timing;
pub mod tpwm;

pub use config::{
    BaseConfig, ClockConfig, Config, PwmPins, Timer12Config, Timer13Config, TriggerConfig,
};
pub use lifecycle::PwmLifecycle;
pub use timing::{T12Timing, WaitingTimeUse};
pub use tpwm::{PwmState, TPwm};

#[cfg(test)]
mod tests;
