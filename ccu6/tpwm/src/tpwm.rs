//! Synchronization engine: programs T12/T13 from one configuration and drives
//! their combined start/stop/pause/resume lifecycle

use ccu6_core::{
    Ccu6, ChannelOut, ExternalTriggerMode, T13TriggerDirection, T13TriggerEvent, TimerId,
};

use crate::config::{Config, TriggerConfig};
use crate::timing;

/// Last lifecycle transition applied to a handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PwmState {
    /// Initialized or stopped, counters halted
    Stopped,
    /// Counters running, output modulated
    Running,
    /// Counters running, modulation output gated off
    Paused,
}

/// Timer PWM handle
///
/// Holds only what the lifecycle operations need; everything else is fixed in
/// the registers by [`TPwm::init_module`].
pub struct TPwm<'a, R: ?Sized> {
    ccu6: &'a R,
    timer: TimerId,
    channel_out: ChannelOut,
    trigger: TriggerConfig,
    state: PwmState,
}

impl<'a, R: Ccu6 + ?Sized> TPwm<'a, R> {
    /// Program the module, both timers, the output path, pins, interrupts and
    /// the output trigger from `config`.
    ///
    /// Enable steps are skipped when another driver already enabled the module
    /// or timer. Nothing is validated; see [`Config::validate`].
    pub fn init_module(config: &Config<'a, R>) -> Self {
        let ccu6 = config.ccu6;

        enable_module(ccu6);

        if config.timer == TimerId::T13 {
            init_t13(config);
        }

        if config.uses_t12() {
            init_t12(config);
        }

        ccu6.enable_modulation_output(config.timer, config.channel_out);
        ccu6.set_output_passive_state(config.channel_out, config.base.active_state);

        if let Some(pins) = &config.pins {
            for pin in pins.outputs() {
                ccu6.init_output_pin(pin, pins.output_mode, pins.pin_driver);
            }
            for pin in pins.inputs() {
                ccu6.init_input_pin(pin, pins.t1xhr_input_mode);
            }
        }

        for slot in config.interrupts.iter().filter(|slot| slot.is_enabled()) {
            trace!("interrupt {:?} -> {:?} prio {:?}", slot.source, slot.service_request, slot.priority);
            ccu6.enable_interrupt(slot.source);
            ccu6.route_interrupt_node(slot.source, slot.service_request);
            ccu6.init_service_request(slot.service_request, slot.type_of_service, slot.priority);
            ccu6.enable_service_request(slot.service_request);
        }

        if config.trigger.output_trigger_enabled {
            ccu6.connect_trigger(config.trigger.output_line, config.trigger.output_trigger);
        }

        debug!(
            "tpwm init: timer {:?}, output {:?}, sync {:?}",
            config.timer,
            config.channel_out,
            config.trigger.t13_in_sync_with_t12
        );

        Self {
            ccu6,
            timer: config.timer,
            channel_out: config.channel_out,
            trigger: config.trigger,
            state: PwmState::Stopped,
        }
    }

    /// Arm shadow transfer and start the modulating timer(s).
    ///
    /// A T13 synchronized to T12 is not started here; it follows the T12
    /// sync event once T12 runs.
    pub fn start(&mut self) {
        let ccu6 = self.ccu6;

        if self.timer == TimerId::T13 {
            ccu6.enable_shadow_transfer(TimerId::T13);

            if !self.trigger.t13_in_sync_with_t12 {
                match &self.trigger.t13_ext_input_trigger {
                    Some(input) => {
                        ccu6.set_external_run_mode(TimerId::T13, self.trigger.ext_input_trigger_mode);
                        ccu6.set_input_signal(TimerId::T13, input);
                    }
                    None => ccu6.start_timer(TimerId::T13),
                }
            }
        }

        if self.drives_t12() {
            ccu6.enable_shadow_transfer(TimerId::T12);

            match &self.trigger.t12_ext_input_trigger {
                Some(input) => {
                    ccu6.set_external_run_mode(TimerId::T12, self.trigger.ext_input_trigger_mode);
                    ccu6.set_input_signal(TimerId::T12, input);
                }
                None => ccu6.start_timer(TimerId::T12),
            }
        }

        trace!("tpwm start: timer {:?}", self.timer);
        self.state = PwmState::Running;
    }

    /// Stop the modulating timer, undo external run and sync wiring, and gate
    /// the output off.
    pub fn stop(&mut self) {
        let ccu6 = self.ccu6;

        if self.timer == TimerId::T13 || self.trigger.t13_in_sync_with_t12 {
            ccu6.disable_shadow_transfer(TimerId::T13);

            if self.trigger.t13_ext_input_trigger.is_some() {
                ccu6.set_external_run_mode(TimerId::T13, ExternalTriggerMode::Disable);
            }

            if self.trigger.t13_in_sync_with_t12 {
                ccu6.set_t13_trigger_event_mode(T13TriggerEvent::NoAction);
                ccu6.set_t13_trigger_event_direction(T13TriggerDirection::NoAction);
            }

            ccu6.stop_timer(TimerId::T13);
        } else {
            ccu6.disable_shadow_transfer(TimerId::T12);

            if self.trigger.t12_ext_input_trigger.is_some() {
                ccu6.set_external_run_mode(TimerId::T12, ExternalTriggerMode::Disable);
            }

            ccu6.stop_timer(TimerId::T12);
        }

        ccu6.disable_modulation_output(self.timer, self.channel_out);

        trace!("tpwm stop: timer {:?}", self.timer);
        self.state = PwmState::Stopped;
    }

    /// Gate the modulation output off, counters keep running
    pub fn pause(&mut self) {
        self.ccu6.disable_modulation_output(self.timer, self.channel_out);
        if self.state == PwmState::Running {
            self.state = PwmState::Paused;
        }
        trace!("tpwm pause: {:?}", self.state);
    }

    /// Gate the modulation output back on
    pub fn resume(&mut self) {
        self.ccu6.enable_modulation_output(self.timer, self.channel_out);
        if self.state == PwmState::Paused {
            self.state = PwmState::Running;
        }
        trace!("tpwm resume: {:?}", self.state);
    }
}

impl<'a, R: ?Sized> TPwm<'a, R> {
    pub fn state(&self) -> PwmState {
        self.state
    }

    /// Timer driving the modulation output
    pub fn timer(&self) -> TimerId {
        self.timer
    }

    pub fn channel_out(&self) -> ChannelOut {
        self.channel_out
    }

    pub fn trigger(&self) -> &TriggerConfig {
        &self.trigger
    }

    fn drives_t12(&self) -> bool {
        self.timer == TimerId::T12 || self.trigger.t13_in_sync_with_t12
    }
}

fn enable_module<R: Ccu6 + ?Sized>(ccu6: &R) {
    critical_section::with(|_| {
        if !ccu6.is_module_enabled() {
            ccu6.enable_module();
        }
    });
}

fn enable_timer<R: Ccu6 + ?Sized>(ccu6: &R, timer: TimerId) {
    critical_section::with(|_| {
        if !ccu6.is_timer_available(timer) {
            ccu6.enable_timer(timer);
        }
    });
}

fn init_t13<R: Ccu6 + ?Sized>(config: &Config<'_, R>) {
    let ccu6 = config.ccu6;
    let clock = &config.clock;

    enable_timer(ccu6, TimerId::T13);

    if clock.t13_ext_clock_enabled {
        if let Some(input) = &clock.t13_ext_clock_input {
            ccu6.set_input_signal(TimerId::T13, input);
        }
        ccu6.set_counting_input_mode(TimerId::T13, clock.t13_counting_input_mode);
        ccu6.set_t13_period_value(config.base.period as u16);
    } else {
        let actual = ccu6.set_t13_frequency(config.base.frequency, config.base.period);
        trace!("T13 count rate {:?} Hz", actual);
    }

    ccu6.set_t13_counter_value(config.timer13.counter_value);
    ccu6.set_t13_compare_value(config.timer13.compare_value);

    if config.trigger.t13_in_sync_with_t12 {
        ccu6.set_t13_trigger_event_mode(config.timer13.t12_sync_event);
        ccu6.set_t13_trigger_event_direction(config.timer13.t12_sync_direction);
    }
}

fn init_t12<R: Ccu6 + ?Sized>(config: &Config<'_, R>) {
    let ccu6 = config.ccu6;
    let clock = &config.clock;
    let t12 = &config.timer12;

    enable_timer(ccu6, TimerId::T12);

    if timing::waiting_time_use(config) == timing::WaitingTimeUse::Dropped {
        warn!(
            "T13 synchronized with no-action event, waiting time {:?} ignored",
            config.base.waiting_time
        );
    }
    let effective = timing::t12_timing(config);
    trace!(
        "T12 period {:?} compare {:?}",
        effective.period,
        effective.compare
    );

    if clock.t12_ext_clock_enabled {
        if let Some(input) = &clock.t12_ext_clock_input {
            ccu6.set_input_signal(TimerId::T12, input);
        }
        ccu6.set_counting_input_mode(TimerId::T12, clock.t12_counting_input_mode);
        ccu6.set_t12_count_mode(t12.count_mode);
        ccu6.set_t12_period_value(timing::t12_period_register(effective.period, t12.count_mode));
    } else {
        let actual = ccu6.set_t12_frequency(config.base.frequency, effective.period, t12.count_mode);
        trace!("T12 count rate {:?} Hz", actual);
    }

    ccu6.set_t12_counter_value(t12.counter_value);
    ccu6.set_t12_channel_mode(t12.channel_id, t12.channel_mode);
    ccu6.set_t12_compare_value(t12.channel_id, effective.compare as u16);

    if t12.dead_time_value != 0 {
        ccu6.set_dead_time_value(t12.dead_time_value);
        ccu6.enable_dead_time(t12.channel_id);
    }
}
