//! Command byte interpretation.
//!
//! Only two byte values carry meaning. Everything else is relayed but
//! leaves the pin alone.

use crate::pin::PinState;

/// Byte that drives the pin high.
pub const ASSERT_BYTE: u8 = b'1';

/// Byte that drives the pin low.
pub const DEASSERT_BYTE: u8 = b'0';

/// A recognized pin command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `'1'`: drive the pin high.
    Assert,
    /// `'0'`: drive the pin low.
    Deassert,
}

impl Command {
    /// Decode a received byte.
    ///
    /// Returns `None` for every byte other than `'1'` and `'0'`.
    #[inline]
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            ASSERT_BYTE => Some(Command::Assert),
            DEASSERT_BYTE => Some(Command::Deassert),
            _ => None,
        }
    }

    /// Pin level this command selects.
    #[inline]
    pub fn target_state(self) -> PinState {
        match self {
            Command::Assert => PinState::Asserted,
            Command::Deassert => PinState::Deasserted,
        }
    }
}
