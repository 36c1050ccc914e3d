//! GPIO adapter for the LED output.

use esp_idf_svc::hal::gpio::{AnyOutputPin, Output, PinDriver};
use esp_idf_svc::sys::EspError;

use super::now_us;
use crate::error::{RelayError, Result};
use crate::pin::{OutputPin, PinState};
use crate::{relay_error, LOG};

/// Push-pull output driver for the LED.
pub type LedDriver = PinDriver<'static, AnyOutputPin, Output>;

/// Configure `gpio` as a push-pull output.
///
/// Direction only. The level stays at the hardware default until the relay
/// drives its configured initial state.
pub fn init_led(gpio: u8) -> core::result::Result<LedDriver, EspError> {
    // SAFETY: the LED pin is reserved for this driver and never taken from
    // `Peripherals::pins`.
    let pin = unsafe { AnyOutputPin::new(gpio as i32) };
    PinDriver::output(pin)
}

impl OutputPin for LedDriver {
    fn set_state(&mut self, state: PinState) -> Result<()> {
        let result = match state {
            PinState::Asserted => self.set_high(),
            PinState::Deasserted => self.set_low(),
        };

        result.map_err(|e| {
            relay_error!(LOG, now_us(), "led {}: {}", state.as_str(), e);
            RelayError::PinWrite
        })
    }
}
