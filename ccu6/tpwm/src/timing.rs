//! T12 timing derived from the configuration
//!
//! When T13 is synchronized to T12, T12 does not modulate anything by itself:
//! it measures the waiting time after which T13 is started. Depending on the
//! sync event the waiting time lands in a different T12 register.

use ccu6_core::{T13TriggerEvent, TimerValue};

pub use ccu6_core::t12_period_register;

use crate::config::Config;

/// Where the waiting time ends up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WaitingTimeUse {
    /// Sync disabled or zero waiting time
    NotUsed,
    /// T13 starts on the T12 period match, the waiting time is the T12 period
    Period,
    /// T13 starts on a T12 compare event, the waiting time is the compare
    /// value and the active count becomes the T12 period
    CompareWithActiveCount,
    /// Sync requested with the no-action event, the waiting time is ignored
    Dropped,
}

/// Effective T12 period and compare value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct T12Timing {
    pub period: TimerValue,
    pub compare: TimerValue,
}

pub fn waiting_time_use<R: ?Sized>(config: &Config<'_, R>) -> WaitingTimeUse {
    if !config.trigger.t13_in_sync_with_t12 || config.base.waiting_time == 0 {
        return WaitingTimeUse::NotUsed;
    }
    match config.timer13.t12_sync_event {
        event if !event.is_action() => WaitingTimeUse::Dropped,
        T13TriggerEvent::OnT12Period => WaitingTimeUse::Period,
        _ => WaitingTimeUse::CompareWithActiveCount,
    }
}

/// Period and compare value T12 is programmed with
pub fn t12_timing<R: ?Sized>(config: &Config<'_, R>) -> T12Timing {
    let mut timing = T12Timing {
        period: config.base.period,
        compare: config.timer12.compare_value,
    };
    match waiting_time_use(config) {
        WaitingTimeUse::Period => timing.period = config.base.waiting_time,
        WaitingTimeUse::CompareWithActiveCount => {
            timing.compare = config.base.waiting_time;
            timing.period = config.base.active_count;
        }
        WaitingTimeUse::NotUsed | WaitingTimeUse::Dropped => {}
    }
    timing
}


#[cfg(test)]
mod tests {
    use super::*;

    struct NoRegs;

    #[test]
    fn test_period_match_uses_waiting_time_as_period() {
        let regs = NoRegs;
        let mut config = Config::new(&regs);
        config.timer12.compare_value = 7;
        config.timer13.t12_sync_event = T13TriggerEvent::OnT12Period;

        assert_eq!(waiting_time_use(&config), WaitingTimeUse::Period);
        assert_eq!(
            t12_timing(&config),
            T12Timing {
                period: 20,
                compare: 7
            }
        );
    }

    #[test]
    fn test_compare_event_uses_waiting_time_as_compare() {
        let regs = NoRegs;
        let mut config = Config::new(&regs);
        config.base.active_count = 80;
        config.timer12.compare_value = 7;

        for event in [
            T13TriggerEvent::OnCC60RCompare,
            T13TriggerEvent::OnCC61RCompare,
            T13TriggerEvent::OnCC62RCompare,
            T13TriggerEvent::OnAnyT12Compare,
            T13TriggerEvent::OnT12Zero,
            T13TriggerEvent::OnCCPOSxEdge,
        ] {
            config.timer13.t12_sync_event = event;
            assert_eq!(
                t12_timing(&config),
                T12Timing {
                    period: 80,
                    compare: 20
                }
            );
        }
    }

    #[test]
    fn test_no_action_keeps_configured_values() {
        let regs = NoRegs;
        let mut config = Config::new(&regs);
        config.timer12.compare_value = 7;
        config.timer13.t12_sync_event = T13TriggerEvent::NoAction;

        assert_eq!(waiting_time_use(&config), WaitingTimeUse::Dropped);
        assert_eq!(
            t12_timing(&config),
            T12Timing {
                period: 100,
                compare: 7
            }
        );
    }

    #[test]
    fn test_zero_waiting_time_or_no_sync() {
        let regs = NoRegs;
        let mut config = Config::new(&regs);
        config.base.waiting_time = 0;
        assert_eq!(waiting_time_use(&config), WaitingTimeUse::NotUsed);
        assert_eq!(t12_timing(&config).period, 100);

        config.base.waiting_time = 20;
        config.trigger.t13_in_sync_with_t12 = false;
        assert_eq!(waiting_time_use(&config), WaitingTimeUse::NotUsed);
        assert_eq!(t12_timing(&config).compare, 0);
    }
}
