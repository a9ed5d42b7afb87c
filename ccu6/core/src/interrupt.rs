//! Interrupt sources, service request lines and slot descriptors

/// CCU6 interrupt source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum InterruptSource {
    Cc60RisingEdge = 0,
    Cc60FallingEdge = 1,
    Cc61RisingEdge = 2,
    Cc61FallingEdge = 3,
    Cc62RisingEdge = 4,
    Cc62FallingEdge = 5,
    T12OneMatch = 6,
    T12PeriodMatch = 7,
    T13CompareMatch = 8,
    T13PeriodMatch = 9,
    Trap = 10,
    CorrectHallEvent = 12,
    WrongHallEvent = 13,
}

/// CCU6 service request output (SR0..SR3)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ServiceRequest {
    Sr0 = 0,
    Sr1 = 1,
    Sr2 = 2,
    Sr3 = 3,
}

impl ServiceRequest {
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Service provider handling a service request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum TypeOfService {
    #[default]
    Cpu0 = 0,
    Cpu1 = 1,
    Cpu2 = 2,
    Dma = 3,
}

/// Number of interrupt slots a PWM configuration carries
pub const INTERRUPT_SLOTS: usize = 4;

/// One interrupt slot: which event fires, where it is routed and at which priority.
///
/// Priority 0 marks the slot as unused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterruptConfig {
    pub source: InterruptSource,
    pub service_request: ServiceRequest,
    pub priority: u8,
    pub type_of_service: TypeOfService,
}

impl InterruptConfig {
    /// Slot wired to `source` on `service_request`, left disabled
    pub const fn disabled(source: InterruptSource, service_request: ServiceRequest) -> Self {
        Self {
            source,
            service_request,
            priority: 0,
            type_of_service: TypeOfService::Cpu0,
        }
    }

    pub const fn is_enabled(&self) -> bool {
        self.priority > 0
    }
}
