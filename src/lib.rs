//! # BtRelay
//!
//! Serial relay between an HC-05 Bluetooth module and the host console,
//! with the on-board LED driven by `'1'` / `'0'` command bytes.
//!
//! ## Architecture
//!
//! Everything the loop touches is owned by [`Relay`]:
//! - [`channel::Inbound`]: HC-05 UART, polled without waiting
//! - [`channel::Outbound`]: console UART, one echo line per byte
//! - [`pin::OutputPin`]: the LED
//!
//! Hardware adapters live in `hal` and only build for `target_os = "espidf"`.
//! Everything else builds and tests on the host.

#![cfg_attr(not(test), no_std)]

pub mod channel;
pub mod command;
pub mod config;
pub mod error;
pub mod globals;
pub mod log_sink;
pub mod logging;
pub mod pin;
pub mod relay;
pub mod stats;

#[cfg(target_os = "espidf")]
pub mod hal;

pub use command::Command;
pub use config::{LineEnding, RelayConfig};
pub use error::RelayError;
pub use globals::{LOG, STATS};
pub use pin::PinState;
pub use relay::{Relay, Step};
pub use stats::{RelayStats, StatsSnapshot};
