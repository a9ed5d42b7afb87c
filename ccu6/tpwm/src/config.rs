//! PWM configuration record and its defaults

use ccu6_core::{
    ActiveState, Ccu6Error, Ccu6Result, ChannelOut, CountingInputMode, ExternalTriggerMode,
    InputMode, InputPin, InterruptConfig, InterruptSource, OutputMode, OutputPin, PadDriver,
    ServiceRequest, T12Channel, T12ChannelMode, T12CountMode, T13TriggerDirection,
    T13TriggerEvent, TimerId, TimerValue, TrigOut, TrigSel, INTERRUPT_SLOTS,
    TIMER_REGISTER_MAX,
};

use crate::timing::{self, WaitingTimeUse};

/// Timing and polarity shared by both timers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BaseConfig {
    /// Count frequency in Hz when clocked internally
    pub frequency: u32,
    pub period: TimerValue,
    /// Delay between the T12 start and the T13 sync event, in T12 ticks
    pub waiting_time: TimerValue,
    /// T12 period used when the waiting time is placed in the compare register
    pub active_count: TimerValue,
    pub active_state: ActiveState,
}

impl Default for BaseConfig {
    fn default() -> Self {
        Self {
            frequency: 400_000,
            period: 100,
            waiting_time: 20,
            active_count: 0,
            active_state: ActiveState::High,
        }
    }
}

/// Clock source of both timers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockConfig {
    pub t12_ext_clock_enabled: bool,
    pub t12_ext_clock_input: Option<InputPin>,
    pub t12_counting_input_mode: CountingInputMode,
    pub t13_ext_clock_enabled: bool,
    pub t13_ext_clock_input: Option<InputPin>,
    pub t13_counting_input_mode: CountingInputMode,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            t12_ext_clock_enabled: false,
            t12_ext_clock_input: None,
            t12_counting_input_mode: CountingInputMode::Internal,
            t13_ext_clock_enabled: false,
            t13_ext_clock_input: None,
            t13_counting_input_mode: CountingInputMode::Internal,
        }
    }
}

/// T12 channel setup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timer12Config {
    pub channel_id: T12Channel,
    pub channel_mode: T12ChannelMode,
    pub count_mode: T12CountMode,
    pub counter_value: u16,
    pub compare_value: TimerValue,
    /// Dead time in module clock ticks, 0 disables insertion
    pub dead_time_value: u8,
}

impl Default for Timer12Config {
    fn default() -> Self {
        Self {
            channel_id: T12Channel::Ch0,
            channel_mode: T12ChannelMode::CompareMode,
            count_mode: T12CountMode::EdgeAligned,
            counter_value: 0,
            compare_value: 0,
            dead_time_value: 0,
        }
    }
}

/// T13 setup and its coupling to T12
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timer13Config {
    pub counter_value: u16,
    pub compare_value: u16,
    pub t12_sync_event: T13TriggerEvent,
    pub t12_sync_direction: T13TriggerDirection,
}

impl Default for Timer13Config {
    fn default() -> Self {
        Self {
            counter_value: 0,
            compare_value: 0,
            t12_sync_event: T13TriggerEvent::OnCC60RCompare,
            t12_sync_direction: T13TriggerDirection::OnT12CountingUp,
        }
    }
}

/// Run triggers and output trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TriggerConfig {
    /// External input that starts T12, internal start if `None`
    pub t12_ext_input_trigger: Option<InputPin>,
    /// External input that starts T13, internal start if `None`
    pub t13_ext_input_trigger: Option<InputPin>,
    pub ext_input_trigger_mode: ExternalTriggerMode,
    pub t13_in_sync_with_t12: bool,
    pub output_trigger_enabled: bool,
    pub output_line: TrigOut,
    pub output_trigger: TrigSel,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            t12_ext_input_trigger: None,
            t13_ext_input_trigger: None,
            ext_input_trigger_mode: ExternalTriggerMode::RisingEdge,
            t13_in_sync_with_t12: true,
            output_trigger_enabled: true,
            output_line: TrigOut::Out0,
            output_trigger: TrigSel::Cout63,
        }
    }
}

/// Optional pin bindings. Absent entries are left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PwmPins {
    pub cc60_out: Option<OutputPin>,
    pub cc61_out: Option<OutputPin>,
    pub cc62_out: Option<OutputPin>,
    pub cout60: Option<OutputPin>,
    pub cout61: Option<OutputPin>,
    pub cout62: Option<OutputPin>,
    pub cout63: Option<OutputPin>,
    pub t12hr: Option<InputPin>,
    pub t13hr: Option<InputPin>,
    pub output_mode: OutputMode,
    pub pin_driver: PadDriver,
    pub t1xhr_input_mode: InputMode,
}

impl PwmPins {
    /// Configured output pins in CC60..COUT63 order
    pub fn outputs(&self) -> impl Iterator<Item = &OutputPin> {
        [
            &self.cc60_out,
            &self.cc61_out,
            &self.cc62_out,
            &self.cout60,
            &self.cout61,
            &self.cout62,
            &self.cout63,
        ]
        .into_iter()
        .flatten()
    }

    /// Configured high-resolution inputs, T12HR first
    pub fn inputs(&self) -> impl Iterator<Item = &InputPin> {
        [&self.t12hr, &self.t13hr].into_iter().flatten()
    }
}

/// Complete description of one PWM generator on a CCU6 module
pub struct Config<'a, R: ?Sized> {
    pub ccu6: &'a R,
    pub base: BaseConfig,
    /// Timer driving the modulation output
    pub timer: TimerId,
    pub clock: ClockConfig,
    pub timer12: Timer12Config,
    pub timer13: Timer13Config,
    pub channel_out: ChannelOut,
    pub pins: Option<PwmPins>,
    /// Interrupt slots, processed in order. Priority 0 leaves a slot unused.
    pub interrupts: [InterruptConfig; INTERRUPT_SLOTS],
    pub trigger: TriggerConfig,
}

impl<R: ?Sized> Clone for Config<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: ?Sized> Copy for Config<'_, R> {}

impl<'a, R: ?Sized> Config<'a, R> {
    /// Default configuration for `ccu6`: T13 modulating COUT63, started by the
    /// T12 CC60 compare match while counting up, 100-tick period at 400 kHz,
    /// output trigger 0 forwarding COUT63, all interrupts unused.
    pub fn new(ccu6: &'a R) -> Self {
        Self {
            ccu6,
            base: BaseConfig::default(),
            timer: TimerId::T13,
            clock: ClockConfig::default(),
            timer12: Timer12Config::default(),
            timer13: Timer13Config::default(),
            channel_out: ChannelOut::Cout3,
            pins: None,
            interrupts: [
                InterruptConfig::disabled(InterruptSource::T12PeriodMatch, ServiceRequest::Sr0),
                InterruptConfig::disabled(InterruptSource::T13PeriodMatch, ServiceRequest::Sr1),
                InterruptConfig::disabled(InterruptSource::T12OneMatch, ServiceRequest::Sr2),
                InterruptConfig::disabled(InterruptSource::Trap, ServiceRequest::Sr3),
            ],
            trigger: TriggerConfig::default(),
        }
    }

    /// True if T12 has to be programmed and run, either as the modulation
    /// source or to generate the T13 sync event
    pub fn uses_t12(&self) -> bool {
        self.timer == TimerId::T12 || self.trigger.t13_in_sync_with_t12
    }

    /// Report combinations the hardware accepts but that do not do what they
    /// look like. `TPwm::init_module` never calls this.
    pub fn validate(&self) -> Ccu6Result<()> {
        if timing::waiting_time_use(self) == WaitingTimeUse::Dropped {
            return Err(Ccu6Error::SyncEventNoAction);
        }

        if self.timer == TimerId::T13 && self.base.period > TIMER_REGISTER_MAX {
            return Err(Ccu6Error::PeriodOutOfRange);
        }

        if self.uses_t12() {
            let t12 = timing::t12_timing(self);
            if self.clock.t12_ext_clock_enabled
                && self.timer12.count_mode == T12CountMode::CenterAligned
                && t12.period < 2
            {
                return Err(Ccu6Error::CenterAlignedPeriodTooSmall);
            }
            if t12.period > TIMER_REGISTER_MAX {
                return Err(Ccu6Error::PeriodOutOfRange);
            }
            if t12.compare > TIMER_REGISTER_MAX {
                return Err(Ccu6Error::CompareOutOfRange);
            }
        }

        Ok(())
    }
}
