//! Byte channel seams.
//!
//! Each channel is one direction of a serial link. The inbound side is
//! polled, never waited on; the outbound side accepts whole slices.

use crate::error::Result;

/// Read side of a serial link.
pub trait Inbound {
    /// Non-blocking check for at least one received byte.
    fn available(&mut self) -> Result<bool>;

    /// Read exactly one byte.
    ///
    /// Only called after [`Inbound::available`] returned `true`, so it must
    /// not wait in practice.
    fn read_byte(&mut self) -> Result<u8>;
}

/// Write side of a serial link.
pub trait Outbound {
    /// Write every byte of `bytes`, in order.
    fn write_all(&mut self, bytes: &[u8]) -> Result<()>;
}
