//! UART channel adapters.

use esp_idf_svc::hal::delay::BLOCK;
use esp_idf_svc::hal::uart::{UartDriver, UartTxDriver};
use esp_idf_svc::sys::EspError;

use super::now_us;
use crate::channel::{Inbound, Outbound};
use crate::error::{RelayError, Result};
use crate::{relay_error, LOG};

impl Inbound for UartDriver<'_> {
    fn available(&mut self) -> Result<bool> {
        match self.remaining_read() {
            Ok(pending) => Ok(pending > 0),
            Err(e) => {
                relay_error!(LOG, now_us(), "uart poll: {}", e);
                Err(RelayError::InboundRead)
            }
        }
    }

    fn read_byte(&mut self) -> Result<u8> {
        let mut buf = [0u8; 1];
        match self.read(&mut buf, BLOCK) {
            Ok(1) => Ok(buf[0]),
            Ok(_) => {
                relay_error!(LOG, now_us(), "uart read: no byte after poll");
                Err(RelayError::InboundRead)
            }
            Err(e) => {
                relay_error!(LOG, now_us(), "uart read: {}", e);
                Err(RelayError::InboundRead)
            }
        }
    }
}

impl Outbound for UartDriver<'_> {
    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        write_all_with(bytes, |chunk| self.write(chunk))
    }
}

impl Outbound for UartTxDriver<'_> {
    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        write_all_with(bytes, |chunk| self.write(chunk))
    }
}

// Driver writes may accept only part of the slice when the TX ring is full.
fn write_all_with<F>(bytes: &[u8], mut write: F) -> Result<()>
where
    F: FnMut(&[u8]) -> core::result::Result<usize, EspError>,
{
    let mut rest = bytes;
    while !rest.is_empty() {
        match write(rest) {
            Ok(0) => {
                relay_error!(LOG, now_us(), "uart write: zero bytes accepted");
                return Err(RelayError::OutboundWrite);
            }
            Ok(n) => rest = &rest[n..],
            Err(e) => {
                relay_error!(LOG, now_us(), "uart write: {}", e);
                return Err(RelayError::OutboundWrite);
            }
        }
    }
    Ok(())
}
