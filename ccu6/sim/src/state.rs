//! Register state held by the simulator

use ccu6_core::{
    ChannelOut, CountingInputMode, ExternalTriggerMode, InputMode, InputPin, InterruptSource,
    OutputMode, OutputPin, PadDriver, ServiceRequest, T12ChannelMode, T12CountMode,
    T13TriggerDirection, T13TriggerEvent, TimerId, TrigSel, TypeOfService,
};

use crate::clock::Prescaler;
use crate::journal::Journal;

/// State common to T12 and T13
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerState {
    /// Taken into use by some driver
    pub available: bool,
    pub running: bool,
    pub shadow_transfer: bool,
    pub counting_input_mode: CountingInputMode,
    pub input: Option<InputPin>,
    pub external_run_mode: ExternalTriggerMode,
    pub prescaler: Prescaler,
    /// Count rate achieved by the last frequency derivation
    pub frequency: u32,
    pub period: u16,
    pub counter: u16,
}

impl TimerState {
    pub const fn new() -> Self {
        Self {
            available: false,
            running: false,
            shadow_transfer: false,
            counting_input_mode: CountingInputMode::Internal,
            input: None,
            external_run_mode: ExternalTriggerMode::Disable,
            prescaler: Prescaler { clk: 0, pre: false },
            frequency: 0,
            period: 0,
            counter: 0,
        }
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Service request control register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ServiceRequestState {
    pub type_of_service: TypeOfService,
    pub priority: u8,
    pub enabled: bool,
}

/// Complete simulated CCU6 module
#[derive(Debug, Clone)]
pub struct SimState {
    pub module_clock: u32,
    pub module_enabled: bool,
    pub t12: TimerState,
    pub t13: TimerState,
    pub t12_count_mode: T12CountMode,
    pub t12_channel_mode: [T12ChannelMode; 3],
    pub t12_compare: [u16; 3],
    pub t13_compare: u16,
    pub t13_trigger_event: T13TriggerEvent,
    pub t13_trigger_direction: T13TriggerDirection,
    pub dead_time: u8,
    /// Channels with dead time insertion, bit per T12 channel
    pub dead_time_enabled: u8,
    /// Modulation enable masks indexed by timer, bit per [`ChannelOut`]
    pub modulation: [u8; 2],
    /// Passive level mask, bit set means passive high
    pub passive_level: u8,
    pub trigger_out: [Option<TrigSel>; 3],
    pub output_pins: heapless::Vec<(OutputPin, OutputMode, PadDriver), 7>,
    pub input_pins: heapless::Vec<(InputPin, InputMode), 2>,
    /// Interrupt enable mask, bit per [`InterruptSource`]
    pub interrupt_enabled: u16,
    pub interrupt_route: [Option<ServiceRequest>; 14],
    pub service_requests: [ServiceRequestState; 4],
    pub journal: Journal,
}

impl SimState {
    pub const fn new(module_clock: u32) -> Self {
        const SR: ServiceRequestState = ServiceRequestState {
            type_of_service: TypeOfService::Cpu0,
            priority: 0,
            enabled: false,
        };
        Self {
            module_clock,
            module_enabled: false,
            t12: TimerState::new(),
            t13: TimerState::new(),
            t12_count_mode: T12CountMode::EdgeAligned,
            t12_channel_mode: [T12ChannelMode::Off; 3],
            t12_compare: [0; 3],
            t13_compare: 0,
            t13_trigger_event: T13TriggerEvent::NoAction,
            t13_trigger_direction: T13TriggerDirection::NoAction,
            dead_time: 0,
            dead_time_enabled: 0,
            modulation: [0; 2],
            passive_level: 0,
            trigger_out: [None; 3],
            output_pins: heapless::Vec::new(),
            input_pins: heapless::Vec::new(),
            interrupt_enabled: 0,
            interrupt_route: [None; 14],
            service_requests: [SR; 4],
            journal: Journal::new(),
        }
    }

    pub fn timer(&self, timer: TimerId) -> &TimerState {
        match timer {
            TimerId::T12 => &self.t12,
            TimerId::T13 => &self.t13,
        }
    }

    pub fn timer_mut(&mut self, timer: TimerId) -> &mut TimerState {
        match timer {
            TimerId::T12 => &mut self.t12,
            TimerId::T13 => &mut self.t13,
        }
    }

    /// True if `timer` currently modulates `output`
    pub fn is_modulating(&self, timer: TimerId, output: ChannelOut) -> bool {
        self.modulation[timer as usize] & output.mask() != 0
    }

    /// True if any timer modulates `output`
    pub fn is_output_enabled(&self, output: ChannelOut) -> bool {
        self.is_modulating(TimerId::T12, output) || self.is_modulating(TimerId::T13, output)
    }

    pub fn is_interrupt_enabled(&self, source: InterruptSource) -> bool {
        self.interrupt_enabled & (1 << source as u16) != 0
    }

    pub fn route_of(&self, source: InterruptSource) -> Option<ServiceRequest> {
        self.interrupt_route[source as usize]
    }

    pub fn service_request(&self, node: ServiceRequest) -> &ServiceRequestState {
        &self.service_requests[node.index()]
    }
}
