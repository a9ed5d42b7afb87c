//! Output channels, passive levels and output trigger selection

/// CCU6 output signal driven by the modulation path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ChannelOut {
    Cc0 = 0,
    Cout0 = 1,
    Cc1 = 2,
    Cout1 = 3,
    Cc2 = 4,
    Cout2 = 5,
    Cout3 = 6,
}

impl ChannelOut {
    /// Bit of this output in a modulation/passive-level mask
    pub const fn mask(self) -> u8 {
        1 << (self as u8)
    }
}

/// Level of an output while it is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ActiveState {
    Low = 0,
    High = 1,
}

/// Output trigger line of the module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum TrigOut {
    Out0 = 0,
    Out1 = 1,
    Out2 = 2,
}

/// Internal signal forwarded to an output trigger line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum TrigSel {
    Cout63 = 0,
    Cc60 = 1,
    Cc61 = 2,
    Cc62 = 3,
    Cout60 = 4,
    Cout61 = 5,
    Cout62 = 6,
    T13PeriodMatch = 7,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_out_mask() {
        assert_eq!(ChannelOut::Cc0.mask(), 0b0000_0001);
        assert_eq!(ChannelOut::Cout3.mask(), 0b0100_0000);
    }
}
