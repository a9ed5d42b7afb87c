//! Pin descriptors for CCU6 outputs and high-resolution timer inputs

/// CCU6 output signals that can be routed to a port pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputSignal {
    Cc60,
    Cc61,
    Cc62,
    Cout60,
    Cout61,
    Cout62,
    Cout63,
}

/// CCU6 inputs that can be fed from a port pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputSignal {
    /// T12 high-resolution (external clock / run) input
    T12hr,
    /// T13 high-resolution (external clock / run) input
    T13hr,
}

/// Input multiplexer selection of a CCU6 input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum InputSelect {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
}

/// Port pin driving one CCU6 output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutputPin {
    pub signal: OutputSignal,
    pub port: u8,
    pub pin: u8,
    /// Alternate output function index of the pad
    pub alt: u8,
}

impl OutputPin {
    pub const fn new(signal: OutputSignal, port: u8, pin: u8, alt: u8) -> Self {
        Self { signal, port, pin, alt }
    }
}

/// Port pin feeding one CCU6 input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputPin {
    pub signal: InputSignal,
    pub port: u8,
    pub pin: u8,
    pub select: InputSelect,
}

impl InputPin {
    pub const fn new(signal: InputSignal, port: u8, pin: u8, select: InputSelect) -> Self {
        Self { signal, port, pin, select }
    }
}

/// Output stage configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputMode {
    #[default]
    PushPull,
    OpenDrain,
}

/// Pad driver strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PadDriver {
    #[default]
    CmosAutomotiveSpeed1,
    CmosAutomotiveSpeed2,
    CmosAutomotiveSpeed3,
    CmosAutomotiveSpeed4,
    TtlSpeed1,
    TtlSpeed2,
    TtlSpeed3,
    TtlSpeed4,
}

/// Input stage configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputMode {
    #[default]
    NoPullDevice,
    PullDown,
    PullUp,
}
