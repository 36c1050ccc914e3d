//! Module: config
//!
//! Purpose: Runtime configuration for the relay.
//!
//! Architecture:
//! - `RelayConfig`: line speed, LED pin, initial level, echo terminator
//! - `board`: per-board UART pin assignment, selected by cargo feature
//!
//! Nothing is persisted. Every boot starts from `RelayConfig::DEFAULT`.

pub mod board;

use crate::logging::LogLevel;
use crate::pin::PinState;

/// Line terminator written after every echoed byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    /// `\n`
    Lf,
    /// `\r\n`, as written by Arduino-style `println`
    CrLf,
}

impl LineEnding {
    /// Terminator bytes.
    pub fn as_bytes(self) -> &'static [u8] {
        match self {
            LineEnding::Lf => b"\n",
            LineEnding::CrLf => b"\r\n",
        }
    }
}

/// Relay configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayConfig {
    /// Line speed for both channels (8N1, no flow control).
    pub baud_rate: u32,
    /// GPIO number of the output pin.
    pub led_pin: u8,
    /// Level driven onto the pin before the first relay step.
    pub initial_pin_state: PinState,
    /// Terminator appended to every echoed byte.
    pub line_ending: LineEnding,
    /// RTOS ticks to sleep after an idle poll. 0 busy-polls.
    pub idle_yield_ticks: u32,
    /// Most verbose level accepted by the log stream.
    pub log_level: LogLevel,
}

impl RelayConfig {
    /// HC-05 AT-mode defaults, LED on GPIO13, pin starts low.
    pub const DEFAULT: Self = Self {
        baud_rate: 9600,
        led_pin: 13,
        initial_pin_state: PinState::Deasserted,
        line_ending: LineEnding::Lf,
        idle_yield_ticks: 1,
        log_level: LogLevel::Info,
    };
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
