//! Register primitive traits
//!
//! These traits are the only way drivers touch the peripheral. Methods take
//! `&self` because the register block is a shared memory-mapped resource:
//! several logical drivers may hold references to the same module.

use crate::{
    ActiveState, ChannelOut, CountingInputMode, ExternalTriggerMode, InputMode, InputPin,
    InterruptSource, OutputMode, OutputPin, PadDriver, ServiceRequest, T12Channel,
    T12ChannelMode, T12CountMode, T13TriggerDirection, T13TriggerEvent, TimerId, TimerValue,
    TrigOut, TrigSel, TypeOfService,
};

/// CCU6 register-level primitives
pub trait Ccu6Registers {
    /// True once the module clock is running
    fn is_module_enabled(&self) -> bool;

    /// Enable the module clock
    fn enable_module(&self);

    /// True if the timer has already been taken into use
    fn is_timer_available(&self, timer: TimerId) -> bool;

    /// Take the timer into use
    fn enable_timer(&self, timer: TimerId);

    /// Select the T1xHR input feeding the timer
    fn set_input_signal(&self, timer: TimerId, input: &InputPin);

    /// Select what the timer counts
    fn set_counting_input_mode(&self, timer: TimerId, mode: CountingInputMode);

    /// Select edge- or center-aligned counting for T12
    fn set_t12_count_mode(&self, mode: T12CountMode);

    /// Write the raw T12 period register
    fn set_t12_period_value(&self, value: u16);

    /// Write the raw T13 period register
    fn set_t13_period_value(&self, value: u16);

    /// Derive prescaler and period register for T12 from a count frequency.
    ///
    /// Returns the frequency actually achieved.
    fn set_t12_frequency(&self, frequency: u32, period: TimerValue, mode: T12CountMode) -> u32;

    /// Derive prescaler and period register for T13 from a count frequency.
    ///
    /// Returns the frequency actually achieved.
    fn set_t13_frequency(&self, frequency: u32, period: TimerValue) -> u32;

    fn set_t12_counter_value(&self, value: u16);

    fn set_t13_counter_value(&self, value: u16);

    fn set_t12_channel_mode(&self, channel: T12Channel, mode: T12ChannelMode);

    fn set_t12_compare_value(&self, channel: T12Channel, value: u16);

    fn set_t13_compare_value(&self, value: u16);

    /// Select the T12 event that starts/stops T13
    fn set_t13_trigger_event_mode(&self, event: T13TriggerEvent);

    /// Qualify the T13 trigger event with the T12 counting direction
    fn set_t13_trigger_event_direction(&self, direction: T13TriggerDirection);

    fn set_dead_time_value(&self, value: u8);

    fn enable_dead_time(&self, channel: T12Channel);

    /// Let `timer` modulate `output`
    fn enable_modulation_output(&self, timer: TimerId, output: ChannelOut);

    fn disable_modulation_output(&self, timer: TimerId, output: ChannelOut);

    /// Level of `output` while it is not modulated
    fn set_output_passive_state(&self, output: ChannelOut, state: ActiveState);

    /// Latch shadow period/compare registers at the next period boundary
    fn enable_shadow_transfer(&self, timer: TimerId);

    fn disable_shadow_transfer(&self, timer: TimerId);

    fn start_timer(&self, timer: TimerId);

    fn stop_timer(&self, timer: TimerId);

    /// Let the T1xHR input start/stop the timer
    fn set_external_run_mode(&self, timer: TimerId, mode: ExternalTriggerMode);

    /// Forward an internal signal to an output trigger line
    fn connect_trigger(&self, line: TrigOut, select: TrigSel);
}

/// Port pin multiplexing primitives
pub trait PinMux {
    /// Route a CCU6 output to its port pin
    fn init_output_pin(&self, pin: &OutputPin, mode: OutputMode, driver: PadDriver);

    /// Route a port pin to a CCU6 input
    fn init_input_pin(&self, pin: &InputPin, mode: InputMode);
}

/// Interrupt routing primitives
pub trait InterruptRouter {
    /// Enable the interrupt flag of `source`
    fn enable_interrupt(&self, source: InterruptSource);

    /// Route `source` to a service request output
    fn route_interrupt_node(&self, source: InterruptSource, node: ServiceRequest);

    /// Configure the service request control register
    fn init_service_request(&self, node: ServiceRequest, tos: TypeOfService, priority: u8);

    fn enable_service_request(&self, node: ServiceRequest);
}

/// Full primitive set a CCU6 driver needs
pub trait Ccu6: Ccu6Registers + PinMux + InterruptRouter {}

impl<T> Ccu6 for T where T: Ccu6Registers + PinMux + InterruptRouter + ?Sized {}
