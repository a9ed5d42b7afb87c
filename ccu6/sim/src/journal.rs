//! Ordered record of every primitive call made against the simulator

use ccu6_core::{
    ActiveState, ChannelOut, CountingInputMode, ExternalTriggerMode, InputMode, InputPin,
    InterruptSource, OutputMode, OutputPin, PadDriver, ServiceRequest, T12Channel,
    T12ChannelMode, T12CountMode, T13TriggerDirection, T13TriggerEvent, TimerId, TimerValue,
    TrigOut, TrigSel, TypeOfService,
};

/// Maximum number of writes kept in the journal
pub const JOURNAL_CAPACITY: usize = 256;

/// One primitive call as seen by the register model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegWrite {
    EnableModule,
    EnableTimer(TimerId),
    InputSignal(TimerId, InputPin),
    CountingInputMode(TimerId, CountingInputMode),
    T12CountMode(T12CountMode),
    T12Period(u16),
    T13Period(u16),
    T12Frequency {
        frequency: u32,
        period: TimerValue,
        mode: T12CountMode,
    },
    T13Frequency {
        frequency: u32,
        period: TimerValue,
    },
    T12Counter(u16),
    T13Counter(u16),
    T12ChannelMode(T12Channel, T12ChannelMode),
    T12Compare(T12Channel, u16),
    T13Compare(u16),
    T13TriggerEventMode(T13TriggerEvent),
    T13TriggerEventDirection(T13TriggerDirection),
    DeadTimeValue(u8),
    EnableDeadTime(T12Channel),
    EnableModulation(TimerId, ChannelOut),
    DisableModulation(TimerId, ChannelOut),
    PassiveState(ChannelOut, ActiveState),
    EnableShadowTransfer(TimerId),
    DisableShadowTransfer(TimerId),
    StartTimer(TimerId),
    StopTimer(TimerId),
    ExternalRunMode(TimerId, ExternalTriggerMode),
    ConnectTrigger(TrigOut, TrigSel),
    OutputPin(OutputPin, OutputMode, PadDriver),
    InputPin(InputPin, InputMode),
    EnableInterrupt(InterruptSource),
    RouteInterrupt(InterruptSource, ServiceRequest),
    InitServiceRequest(ServiceRequest, TypeOfService, u8),
    EnableServiceRequest(ServiceRequest),
}

impl RegWrite {
    /// Timer this write addresses, if it addresses exactly one
    pub fn timer(&self) -> Option<TimerId> {
        match *self {
            RegWrite::EnableTimer(t)
            | RegWrite::InputSignal(t, _)
            | RegWrite::CountingInputMode(t, _)
            | RegWrite::EnableModulation(t, _)
            | RegWrite::DisableModulation(t, _)
            | RegWrite::EnableShadowTransfer(t)
            | RegWrite::DisableShadowTransfer(t)
            | RegWrite::StartTimer(t)
            | RegWrite::StopTimer(t)
            | RegWrite::ExternalRunMode(t, _) => Some(t),
            RegWrite::T12CountMode(_)
            | RegWrite::T12Period(_)
            | RegWrite::T12Frequency { .. }
            | RegWrite::T12Counter(_)
            | RegWrite::T12ChannelMode(..)
            | RegWrite::T12Compare(..)
            | RegWrite::DeadTimeValue(_)
            | RegWrite::EnableDeadTime(_) => Some(TimerId::T12),
            RegWrite::T13Period(_)
            | RegWrite::T13Frequency { .. }
            | RegWrite::T13Counter(_)
            | RegWrite::T13Compare(_)
            | RegWrite::T13TriggerEventMode(_)
            | RegWrite::T13TriggerEventDirection(_) => Some(TimerId::T13),
            _ => None,
        }
    }
}

/// Bounded write log. Writes past capacity are dropped and flagged.
#[derive(Debug, Clone, Default)]
pub struct Journal {
    writes: heapless::Vec<RegWrite, JOURNAL_CAPACITY>,
    overflowed: bool,
}

impl Journal {
    pub const fn new() -> Self {
        Self {
            writes: heapless::Vec::new(),
            overflowed: false,
        }
    }

    pub fn record(&mut self, write: RegWrite) {
        if self.writes.push(write).is_err() {
            self.overflowed = true;
        }
    }

    pub fn clear(&mut self) {
        self.writes.clear();
        self.overflowed = false;
    }

    pub fn writes(&self) -> &[RegWrite] {
        &self.writes
    }

    pub fn overflowed(&self) -> bool {
        self.overflowed
    }

    pub fn contains(&self, write: &RegWrite) -> bool {
        self.writes.contains(write)
    }

    /// Number of recorded writes equal to `write`
    pub fn count(&self, write: &RegWrite) -> usize {
        self.writes.iter().filter(|w| *w == write).count()
    }

    /// True if any recorded write addresses `timer`
    pub fn touches(&self, timer: TimerId) -> bool {
        self.writes.iter().any(|w| w.timer() == Some(timer))
    }

    /// Index of the first occurrence of `write`
    pub fn position(&self, write: &RegWrite) -> Option<usize> {
        self.writes.iter().position(|w| w == write)
    }
}
