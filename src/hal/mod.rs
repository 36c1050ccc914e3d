//! Hardware Abstraction Layer for BtRelay.
//!
//! Thin adapters from ESP-IDF drivers to the relay's channel and pin traits.
//! Relay logic stays in core modules, HAL is just I/O.

pub mod board;
pub mod gpio;
pub mod uart;

pub use board::{init, BtRelay, InitError};

/// Microseconds since boot.
#[inline]
pub fn now_us() -> i64 {
    // SAFETY: esp_timer is started by the IDF before app_main.
    unsafe { esp_idf_svc::sys::esp_timer_get_time() }
}

/// Sleep the calling task for `ticks` RTOS ticks.
#[inline]
pub fn yield_ticks(ticks: u32) {
    // SAFETY: called from a task context, never from an ISR.
    unsafe { esp_idf_svc::sys::vTaskDelay(ticks) }
}
