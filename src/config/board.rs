//! Board pin assignment.
//!
//! ```text
//! Host PC  ◀──── UART0 (console) ◀──┐
//!                                   relay ──▶ GPIO13 (LED)
//! HC-05    ────▶ UART1 ─────────────┘
//!                UART2 TX ──▶ USB-UART adapter (log)
//! ```

/// TX/RX GPIO numbers of one UART.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UartPins {
    pub tx: u8,
    pub rx: u8,
}

/// Log UART configuration.
pub struct LogUartConfig {
    pub baud_rate: u32,
    pub tx_pin: u8,
}

#[cfg(not(feature = "esp32p4"))]
mod pins {
    use super::UartPins;

    /// ESP32-S3 UART0 default pins (USB-UART bridge on devkits).
    pub const CONSOLE: UartPins = UartPins { tx: 43, rx: 44 };
    pub const BLUETOOTH: UartPins = UartPins { tx: 17, rx: 18 };
    /// GPIO6 conflicts with Octal PSRAM. Quad flash boards only.
    pub const LOG_TX: u8 = 6;
}

#[cfg(feature = "esp32p4")]
mod pins {
    use super::UartPins;

    pub const CONSOLE: UartPins = UartPins { tx: 37, rx: 38 };
    pub const BLUETOOTH: UartPins = UartPins { tx: 17, rx: 18 };
    pub const LOG_TX: u8 = 6;
}

/// Outbound channel: host console.
pub const CONSOLE_UART: UartPins = pins::CONSOLE;

/// Inbound channel: HC-05 module (its TX goes to our RX).
pub const BLUETOOTH_UART: UartPins = pins::BLUETOOTH;

impl Default for LogUartConfig {
    fn default() -> Self {
        Self {
            baud_rate: 115200,
            tx_pin: pins::LOG_TX,
        }
    }
}
