//! Relay error types

/// Result type for channel and pin operations
pub type Result<T> = core::result::Result<T, RelayError>;

/// Hardware I/O failure seen by the relay.
///
/// Input bytes never fail; only the drivers underneath can.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayError {
    /// E01: Inbound channel poll or read failed
    InboundRead,
    /// E02: Outbound channel write failed
    OutboundWrite,
    /// E03: Output pin could not be driven
    PinWrite,
}

impl RelayError {
    /// Get error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::InboundRead => "E01",
            Self::OutboundWrite => "E02",
            Self::PinWrite => "E03",
        }
    }

    /// Get error message
    pub fn message(&self) -> &'static str {
        match self {
            Self::InboundRead => "inbound read failed",
            Self::OutboundWrite => "outbound write failed",
            Self::PinWrite => "pin write failed",
        }
    }
}

impl core::fmt::Display for RelayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}
