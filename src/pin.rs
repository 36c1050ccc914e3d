//! Output pin state and the pin seam.
//!
//! The relay drives exactly one digital output. Its level is a two-state
//! machine with no history: every update overwrites the previous level.

use crate::error::Result;

/// Logic level of the output pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PinState {
    /// Logic low.
    #[default]
    Deasserted,
    /// Logic high.
    Asserted,
}

impl PinState {
    /// Check if the pin is driven high.
    #[inline]
    pub fn is_asserted(self) -> bool {
        self == PinState::Asserted
    }

    /// Convert to string for log output.
    pub fn as_str(self) -> &'static str {
        match self {
            PinState::Asserted => "ASSERTED",
            PinState::Deasserted => "DEASSERTED",
        }
    }
}

/// A digital pin already configured as an output.
///
/// Implemented by the ESP-IDF pin driver on hardware and by mocks in tests.
/// The relay is the only writer, so implementations need no locking.
pub trait OutputPin {
    /// Drive the pin to `state`.
    ///
    /// Called unconditionally on every command byte, even when the level
    /// does not change.
    fn set_state(&mut self, state: PinState) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_deasserted() {
        assert_eq!(PinState::default(), PinState::Deasserted);
        assert!(!PinState::default().is_asserted());
    }
}
