#![no_std]
#![forbid(unsafe_code)]

//! # CCU6 Simulator
//!
//! A register-level model of one CCU6 module implementing the
//! [`ccu6_core`] primitive traits. Every call updates the modelled register
//! state and is appended to a bounded [`Journal`], so drivers can be checked
//! both for the final register contents and for the order of writes.
//!
//! The state sits behind a `critical_section::Mutex`, so one simulator can be
//! shared by several driver handles the same way a real register block is.
//!
//! ```rust,ignore
//! let ccu6 = SimCcu6::new();
//! let pwm = TPwm::init_module(&Config::new(&ccu6));
//! assert!(ccu6.snapshot().t12.available);
//! ```

use core::cell::RefCell;
use critical_section::Mutex;

use ccu6_core::{
    ActiveState, Ccu6Registers, ChannelOut, CountingInputMode, ExternalTriggerMode, InputMode,
    InputPin, InterruptRouter, InterruptSource, OutputMode, OutputPin, PadDriver, PinMux,
    ServiceRequest, T12Channel, T12ChannelMode, T12CountMode, T13TriggerDirection,
    T13TriggerEvent, TimerId, TimerValue, TrigOut, TrigSel, TypeOfService, t12_period_register,
};

pub mod clock;
pub mod journal;
pub mod state;

pub use clock::{Prescaler, DEFAULT_MODULE_CLOCK_HZ};
pub use journal::{Journal, RegWrite, JOURNAL_CAPACITY};
pub use state::{ServiceRequestState, SimState, TimerState};

/// Simulated CCU6 module
pub struct SimCcu6 {
    state: Mutex<RefCell<SimState>>,
}

impl SimCcu6 {
    /// Module clocked at [`DEFAULT_MODULE_CLOCK_HZ`], everything disabled
    pub const fn new() -> Self {
        Self::with_module_clock(DEFAULT_MODULE_CLOCK_HZ)
    }

    pub const fn with_module_clock(module_clock: u32) -> Self {
        Self {
            state: Mutex::new(RefCell::new(SimState::new(module_clock))),
        }
    }

    /// Run `f` on the register state
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut SimState) -> R,
    {
        critical_section::with(|cs| {
            let mut state = self.state.borrow_ref_mut(cs);
            f(&mut state)
        })
    }

    /// Copy of the current register state
    pub fn snapshot(&self) -> SimState {
        self.with(|s| s.clone())
    }

    /// Copy of the write journal
    pub fn journal(&self) -> Journal {
        self.with(|s| s.journal.clone())
    }

    pub fn clear_journal(&self) {
        self.with(|s| s.journal.clear());
    }

    /// Advance a running timer's counter, as if `ticks` count pulses had elapsed
    pub fn tick(&self, timer: TimerId, ticks: u16) {
        self.with(|s| {
            let t = s.timer_mut(timer);
            if t.running {
                t.counter = t.counter.wrapping_add(ticks);
            }
        });
    }

    fn write<F>(&self, write: RegWrite, apply: F)
    where
        F: FnOnce(&mut SimState),
    {
        self.with(|s| {
            s.journal.record(write);
            apply(s);
        });
    }
}

impl Default for SimCcu6 {
    fn default() -> Self {
        Self::new()
    }
}

impl Ccu6Registers for SimCcu6 {
    fn is_module_enabled(&self) -> bool {
        self.with(|s| s.module_enabled)
    }

    fn enable_module(&self) {
        self.write(RegWrite::EnableModule, |s| s.module_enabled = true);
    }

    fn is_timer_available(&self, timer: TimerId) -> bool {
        self.with(|s| s.timer(timer).available)
    }

    fn enable_timer(&self, timer: TimerId) {
        self.write(RegWrite::EnableTimer(timer), |s| {
            s.timer_mut(timer).available = true;
        });
    }

    fn set_input_signal(&self, timer: TimerId, input: &InputPin) {
        let input = *input;
        self.write(RegWrite::InputSignal(timer, input), |s| {
            s.timer_mut(timer).input = Some(input);
        });
    }

    fn set_counting_input_mode(&self, timer: TimerId, mode: CountingInputMode) {
        self.write(RegWrite::CountingInputMode(timer, mode), |s| {
            s.timer_mut(timer).counting_input_mode = mode;
        });
    }

    fn set_t12_count_mode(&self, mode: T12CountMode) {
        self.write(RegWrite::T12CountMode(mode), |s| s.t12_count_mode = mode);
    }

    fn set_t12_period_value(&self, value: u16) {
        self.write(RegWrite::T12Period(value), |s| s.t12.period = value);
    }

    fn set_t13_period_value(&self, value: u16) {
        self.write(RegWrite::T13Period(value), |s| s.t13.period = value);
    }

    fn set_t12_frequency(&self, frequency: u32, period: TimerValue, mode: T12CountMode) -> u32 {
        let write = RegWrite::T12Frequency {
            frequency,
            period,
            mode,
        };
        self.with(|s| {
            s.journal.record(write);
            let (prescaler, actual) = clock::derive(s.module_clock, frequency);
            s.t12.prescaler = prescaler;
            s.t12.frequency = actual;
            s.t12.period = t12_period_register(period, mode);
            s.t12_count_mode = mode;
            actual
        })
    }

    fn set_t13_frequency(&self, frequency: u32, period: TimerValue) -> u32 {
        self.with(|s| {
            s.journal.record(RegWrite::T13Frequency { frequency, period });
            let (prescaler, actual) = clock::derive(s.module_clock, frequency);
            s.t13.prescaler = prescaler;
            s.t13.frequency = actual;
            s.t13.period = period as u16;
            actual
        })
    }

    fn set_t12_counter_value(&self, value: u16) {
        self.write(RegWrite::T12Counter(value), |s| s.t12.counter = value);
    }

    fn set_t13_counter_value(&self, value: u16) {
        self.write(RegWrite::T13Counter(value), |s| s.t13.counter = value);
    }

    fn set_t12_channel_mode(&self, channel: T12Channel, mode: T12ChannelMode) {
        self.write(RegWrite::T12ChannelMode(channel, mode), |s| {
            s.t12_channel_mode[channel.index()] = mode;
        });
    }

    fn set_t12_compare_value(&self, channel: T12Channel, value: u16) {
        self.write(RegWrite::T12Compare(channel, value), |s| {
            s.t12_compare[channel.index()] = value;
        });
    }

    fn set_t13_compare_value(&self, value: u16) {
        self.write(RegWrite::T13Compare(value), |s| s.t13_compare = value);
    }

    fn set_t13_trigger_event_mode(&self, event: T13TriggerEvent) {
        self.write(RegWrite::T13TriggerEventMode(event), |s| {
            s.t13_trigger_event = event;
        });
    }

    fn set_t13_trigger_event_direction(&self, direction: T13TriggerDirection) {
        self.write(RegWrite::T13TriggerEventDirection(direction), |s| {
            s.t13_trigger_direction = direction;
        });
    }

    fn set_dead_time_value(&self, value: u8) {
        self.write(RegWrite::DeadTimeValue(value), |s| s.dead_time = value);
    }

    fn enable_dead_time(&self, channel: T12Channel) {
        self.write(RegWrite::EnableDeadTime(channel), |s| {
            s.dead_time_enabled |= 1 << channel.index();
        });
    }

    fn enable_modulation_output(&self, timer: TimerId, output: ChannelOut) {
        self.write(RegWrite::EnableModulation(timer, output), |s| {
            s.modulation[timer as usize] |= output.mask();
        });
    }

    fn disable_modulation_output(&self, timer: TimerId, output: ChannelOut) {
        self.write(RegWrite::DisableModulation(timer, output), |s| {
            s.modulation[timer as usize] &= !output.mask();
        });
    }

    fn set_output_passive_state(&self, output: ChannelOut, state: ActiveState) {
        self.write(RegWrite::PassiveState(output, state), |s| match state {
            ActiveState::High => s.passive_level |= output.mask(),
            ActiveState::Low => s.passive_level &= !output.mask(),
        });
    }

    fn enable_shadow_transfer(&self, timer: TimerId) {
        self.write(RegWrite::EnableShadowTransfer(timer), |s| {
            s.timer_mut(timer).shadow_transfer = true;
        });
    }

    fn disable_shadow_transfer(&self, timer: TimerId) {
        self.write(RegWrite::DisableShadowTransfer(timer), |s| {
            s.timer_mut(timer).shadow_transfer = false;
        });
    }

    fn start_timer(&self, timer: TimerId) {
        self.write(RegWrite::StartTimer(timer), |s| {
            s.timer_mut(timer).running = true;
        });
    }

    fn stop_timer(&self, timer: TimerId) {
        self.write(RegWrite::StopTimer(timer), |s| {
            s.timer_mut(timer).running = false;
        });
    }

    fn set_external_run_mode(&self, timer: TimerId, mode: ExternalTriggerMode) {
        self.write(RegWrite::ExternalRunMode(timer, mode), |s| {
            s.timer_mut(timer).external_run_mode = mode;
        });
    }

    fn connect_trigger(&self, line: TrigOut, select: TrigSel) {
        self.write(RegWrite::ConnectTrigger(line, select), |s| {
            s.trigger_out[line as usize] = Some(select);
        });
    }
}

impl PinMux for SimCcu6 {
    fn init_output_pin(&self, pin: &OutputPin, mode: OutputMode, driver: PadDriver) {
        let pin = *pin;
        self.write(RegWrite::OutputPin(pin, mode, driver), |s| {
            s.output_pins.retain(|(p, _, _)| p.signal != pin.signal);
            let _ = s.output_pins.push((pin, mode, driver));
        });
    }

    fn init_input_pin(&self, pin: &InputPin, mode: InputMode) {
        let pin = *pin;
        self.write(RegWrite::InputPin(pin, mode), |s| {
            s.input_pins.retain(|(p, _)| p.signal != pin.signal);
            let _ = s.input_pins.push((pin, mode));
        });
    }
}

impl InterruptRouter for SimCcu6 {
    fn enable_interrupt(&self, source: InterruptSource) {
        self.write(RegWrite::EnableInterrupt(source), |s| {
            s.interrupt_enabled |= 1 << source as u16;
        });
    }

    fn route_interrupt_node(&self, source: InterruptSource, node: ServiceRequest) {
        self.write(RegWrite::RouteInterrupt(source, node), |s| {
            s.interrupt_route[source as usize] = Some(node);
        });
    }

    fn init_service_request(&self, node: ServiceRequest, tos: TypeOfService, priority: u8) {
        self.write(RegWrite::InitServiceRequest(node, tos, priority), |s| {
            let sr = &mut s.service_requests[node.index()];
            sr.type_of_service = tos;
            sr.priority = priority;
        });
    }

    fn enable_service_request(&self, node: ServiceRequest) {
        self.write(RegWrite::EnableServiceRequest(node), |s| {
            s.service_requests[node.index()].enabled = true;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enable_is_recorded_once_per_call() {
        let sim = SimCcu6::new();
        assert!(!sim.is_module_enabled());
        sim.enable_module();
        assert!(sim.is_module_enabled());
        assert_eq!(sim.journal().count(&RegWrite::EnableModule), 1);
    }

    #[test]
    fn test_tick_only_advances_running_timer() {
        let sim = SimCcu6::new();
        sim.tick(TimerId::T12, 10);
        assert_eq!(sim.snapshot().t12.counter, 0);

        sim.start_timer(TimerId::T12);
        sim.tick(TimerId::T12, 10);
        assert_eq!(sim.snapshot().t12.counter, 10);
        assert_eq!(sim.snapshot().t13.counter, 0);
    }

    #[test]
    fn test_frequency_derivation_updates_period() {
        let sim = SimCcu6::new();
        let actual = sim.set_t12_frequency(25_000_000, 100, T12CountMode::CenterAligned);
        let state = sim.snapshot();
        assert_eq!(actual, 25_000_000);
        assert_eq!(state.t12.frequency, 25_000_000);
        assert_eq!(state.t12.period, 49);
        assert_eq!(state.t12_count_mode, T12CountMode::CenterAligned);
    }

    #[test]
    fn test_modulation_masks_are_per_timer() {
        let sim = SimCcu6::new();
        sim.enable_modulation_output(TimerId::T13, ChannelOut::Cout3);
        let state = sim.snapshot();
        assert!(state.is_modulating(TimerId::T13, ChannelOut::Cout3));
        assert!(!state.is_modulating(TimerId::T12, ChannelOut::Cout3));
        assert!(state.is_output_enabled(ChannelOut::Cout3));

        sim.disable_modulation_output(TimerId::T13, ChannelOut::Cout3);
        assert!(!sim.snapshot().is_output_enabled(ChannelOut::Cout3));
    }
}
