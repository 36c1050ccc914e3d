//! Board bring-up: LED pin, console UART, HC-05 UART.

use esp_idf_svc::hal::gpio::AnyIOPin;
use esp_idf_svc::hal::peripheral::Peripheral;
use esp_idf_svc::hal::uart::config::{DataBits, FlowControl, StopBits};
use esp_idf_svc::hal::uart::{self, Uart, UartDriver, UART0, UART1};
use esp_idf_svc::hal::units::Hertz;
use esp_idf_svc::sys::EspError;

use super::gpio::{init_led, LedDriver};
use crate::config::board::{UartPins, BLUETOOTH_UART, CONSOLE_UART};
use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::relay::Relay;
use crate::stats::RelayStats;

/// The relay wired to real drivers.
pub type BtRelay<'s> = Relay<'s, UartDriver<'static>, UartDriver<'static>, LedDriver>;

/// Bring-up failure.
#[derive(Debug)]
pub enum InitError {
    /// A driver could not be installed.
    Driver(EspError),
    /// The initial pin level could not be driven.
    Pin(RelayError),
}

impl From<EspError> for InitError {
    fn from(e: EspError) -> Self {
        InitError::Driver(e)
    }
}

impl From<RelayError> for InitError {
    fn from(e: RelayError) -> Self {
        InitError::Pin(e)
    }
}

impl core::fmt::Display for InitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InitError::Driver(e) => write!(f, "driver: {}", e),
            InitError::Pin(e) => write!(f, "pin: {}", e),
        }
    }
}

/// Open a UART at `baud_rate`, 8N1, no flow control.
fn open_uart<U: Uart + 'static>(
    uart: impl Peripheral<P = U> + 'static,
    pins: UartPins,
    baud_rate: u32,
) -> Result<UartDriver<'static>, EspError> {
    let uart_config = uart::config::Config::default()
        .baudrate(Hertz(baud_rate))
        .data_bits(DataBits::DataBits8)
        .parity_none()
        .stop_bits(StopBits::STOP1)
        .flow_control(FlowControl::None);

    // SAFETY: these pins are reserved for this UART and never taken from
    // `Peripherals::pins`.
    let (tx, rx) = unsafe { (AnyIOPin::new(pins.tx as i32), AnyIOPin::new(pins.rx as i32)) };

    UartDriver::new(
        uart,
        tx,
        rx,
        Option::<AnyIOPin>::None, // CTS
        Option::<AnyIOPin>::None, // RTS
        &uart_config,
    )
}

/// Configure the LED, open the console (outbound) and HC-05 (inbound)
/// UARTs, and hand them to a relay that starts at the configured level.
///
/// Runs once. Any failure is fatal for the caller.
pub fn init(
    console: UART0,
    bluetooth: UART1,
    config: &RelayConfig,
    stats: &'static RelayStats,
) -> Result<BtRelay<'static>, InitError> {
    let led = init_led(config.led_pin)?;
    let outbound = open_uart(console, CONSOLE_UART, config.baud_rate)?;
    let inbound = open_uart(bluetooth, BLUETOOTH_UART, config.baud_rate)?;

    Ok(Relay::new(inbound, outbound, led, config, stats)?)
}
