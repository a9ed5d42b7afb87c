//! Clock derivation model for T12/T13
//!
//! Each timer counts the module clock divided by `2^clk` (`clk` in 0..=7),
//! optionally followed by an additional /256 prescaler. The derivation picks
//! the smallest divider whose count rate does not exceed the request.

/// Default CCU6 module clock
pub const DEFAULT_MODULE_CLOCK_HZ: u32 = 100_000_000;

/// Divider setting chosen for a timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Prescaler {
    /// Clock select, divides by `2^clk`
    pub clk: u8,
    /// Additional /256 stage
    pub pre: bool,
}

impl Prescaler {
    pub const fn divider(self) -> u32 {
        let base = 1u32 << self.clk;
        if self.pre {
            base * 256
        } else {
            base
        }
    }
}

/// Pick the prescaler for `frequency` and return it with the achieved count rate
pub fn derive(module_clock: u32, frequency: u32) -> (Prescaler, u32) {
    let mut chosen = Prescaler { clk: 7, pre: true };
    'search: for pre in [false, true] {
        for clk in 0..=7u8 {
            let candidate = Prescaler { clk, pre };
            if module_clock / candidate.divider() <= frequency {
                chosen = candidate;
                break 'search;
            }
        }
    }
    (chosen, module_clock / chosen.divider())
}
