//! Timer identifiers, counting modes and cross-timer events

/// Logical timer value (period, compare, waiting time).
///
/// Registers are 16 bits wide; values are truncated at the write site.
pub type TimerValue = u32;

/// Maximum value a T12/T13 period or compare register can hold
pub const TIMER_REGISTER_MAX: TimerValue = u16::MAX as TimerValue;

/// Raw T12 period register value for a logical period.
///
/// Center-aligned counting covers the period twice (up, then down), so the
/// register holds `period / 2 - 1`. The subtraction wraps for periods below 2.
pub const fn t12_period_register(period: TimerValue, mode: T12CountMode) -> u16 {
    match mode {
        T12CountMode::EdgeAligned => period as u16,
        T12CountMode::CenterAligned => (period / 2).wrapping_sub(1) as u16,
    }
}

/// CCU6 counter selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum TimerId {
    /// Timer 12, three compare channels
    T12 = 0,
    /// Timer 13, single compare channel
    T13 = 1,
}

/// T12 compare channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum T12Channel {
    Ch0 = 0,
    Ch1 = 1,
    Ch2 = 2,
}

impl T12Channel {
    /// Channel index as used in per-channel register arrays
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// T12 channel operating mode (MSEL field)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum T12ChannelMode {
    Off = 0,
    CompareMode = 1,
    DoubleRegisterCaptureRisingAndFalling = 4,
    DoubleRegisterCaptureRising = 5,
    DoubleRegisterCaptureFalling = 6,
    DoubleRegisterCaptureAnyEdge = 7,
    HallSensor = 8,
    HysteresisLikeCompare = 9,
    MultiInputCaptureRisingAndFalling = 10,
    MultiInputCaptureFallingAndRising = 11,
    MultiInputCaptureBothRising = 12,
    MultiInputCaptureBothFalling = 13,
    MultiInputCaptureAnyEdge = 14,
}

/// T12 counting mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum T12CountMode {
    /// Counts up and resets at period match
    EdgeAligned = 0,
    /// Counts up to the period value, then back down to zero
    CenterAligned = 1,
}

/// Source of the counting input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum CountingInputMode {
    /// Prescaled module clock
    Internal = 0,
    /// Count on T1xHR software trigger
    Manual = 1,
    /// Count on rising edge of T1xHR
    ExternalRising = 2,
    /// Count on falling edge of T1xHR
    ExternalFalling = 3,
}

/// T12 event that starts or stops T13 (T13TEC field)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum T13TriggerEvent {
    NoAction = 0,
    OnCC60RCompare = 1,
    OnCC61RCompare = 2,
    OnCC62RCompare = 3,
    OnAnyT12Compare = 4,
    OnT12Period = 5,
    OnT12Zero = 6,
    OnCCPOSxEdge = 7,
}

impl T13TriggerEvent {
    /// True unless this is the no-action sentinel
    pub const fn is_action(self) -> bool {
        !matches!(self, T13TriggerEvent::NoAction)
    }
}

/// T12 counting direction qualifying the T13 trigger event (T13TED field)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum T13TriggerDirection {
    NoAction = 0,
    OnT12CountingUp = 1,
    OnT12CountingDown = 2,
    Anyway = 3,
}

/// Edge selection for external run control of a timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ExternalTriggerMode {
    Disable = 0,
    RisingEdge = 1,
    FallingEdge = 2,
    AnyEdge = 3,
}
