//! Log output on a dedicated UART.
//!
//! The console UART carries the echo stream, so logs leave through UART2
//! TX on GPIO6. Requires an external USB-UART adapter (CH340, CP2102, etc).
//!
//! # Hardware Setup
//!
//! ```text
//! ESP32-S3 GPIO6 (UART2 TX) ──────▶ USB-UART RX
//!                                   └─▶ PC Serial Monitor
//! ```

use crate::channel::Outbound;
use crate::error::Result;
use crate::logging::{format_to_buffer, LogEntry, LogStream};

/// Size of one formatted log line.
pub const LINE_BUF_SIZE: usize = 160;

/// Format log entry to a line.
///
/// Format: `[timestamp_us] LEVEL: message\n`
pub fn format_log_entry(entry: &LogEntry, buf: &mut [u8]) -> usize {
    format_to_buffer(
        buf,
        format_args!(
            "[{:10}] {}: {}\n",
            entry.timestamp_us,
            entry.level.as_str(),
            entry.message()
        ),
    )
}

/// Write every pending entry of `stream` to `sink`.
///
/// Reports and resets the dropped counter after the entries. Returns the
/// number of entries written.
pub fn drain_log<const N: usize, O: Outbound>(stream: &LogStream<N>, sink: &mut O) -> Result<usize> {
    let mut buf = [0u8; LINE_BUF_SIZE];
    let mut written = 0;

    while let Some(entry) = stream.drain() {
        let len = format_log_entry(&entry, &mut buf);
        sink.write_all(&buf[..len])?;
        written += 1;
    }

    let dropped = stream.take_dropped();
    if dropped > 0 {
        let len = format_to_buffer(&mut buf, format_args!("[WARN] Dropped: {} log entries\n", dropped));
        sink.write_all(&buf[..len])?;
    }

    Ok(written)
}

#[cfg(target_os = "espidf")]
pub use espidf::init_log_uart;

#[cfg(target_os = "espidf")]
mod espidf {
    use crate::config::board::LogUartConfig;
    use esp_idf_svc::hal::gpio::{AnyIOPin, AnyOutputPin};
    use esp_idf_svc::hal::uart::{self, UartTxDriver, UART2};
    use esp_idf_svc::hal::units::Hertz;
    use esp_idf_svc::sys::EspError;

    /// Initialize UART2 TX-only for logging output.
    pub fn init_log_uart(uart: UART2, config: &LogUartConfig) -> Result<UartTxDriver<'static>, EspError> {
        let uart_config = uart::config::Config::default().baudrate(Hertz(config.baud_rate));

        // SAFETY: the log TX pin is reserved for this driver and never
        // taken from `Peripherals::pins`.
        let tx = unsafe { AnyOutputPin::new(config.tx_pin as i32) };

        UartTxDriver::new(
            uart,
            tx,
            Option::<AnyIOPin>::None, // CTS
            Option::<AnyIOPin>::None, // RTS
            &uart_config,
        )
    }
}
