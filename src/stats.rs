//! Relay counters.
//!
//! Written by the relay loop, read by whoever reports them. The firmware
//! resets them after each periodic report, so a snapshot covers one
//! reporting interval. Counters wrap on overflow.

use core::sync::atomic::{AtomicU32, Ordering};

use crate::command::Command;

/// Thread-safe relay statistics.
///
/// ```ignore
/// static STATS: RelayStats = RelayStats::new();
///
/// let snap = STATS.snapshot();
/// relay_info!(LOG, now_us, "relayed={} errors={}", snap.bytes, snap.errors);
/// ```
pub struct RelayStats {
    /// Bytes read from inbound and echoed.
    bytes: AtomicU32,
    /// `'1'` commands applied.
    asserts: AtomicU32,
    /// `'0'` commands applied.
    deasserts: AtomicU32,
    /// Bytes that were not commands.
    ignored: AtomicU32,
    /// Failed channel or pin operations.
    errors: AtomicU32,
}

impl RelayStats {
    pub const fn new() -> Self {
        Self {
            bytes: AtomicU32::new(0),
            asserts: AtomicU32::new(0),
            deasserts: AtomicU32::new(0),
            ignored: AtomicU32::new(0),
            errors: AtomicU32::new(0),
        }
    }

    #[inline]
    pub fn record_byte(&self) {
        self.bytes.fetch_add(1, Ordering::Relaxed);
    }

    /// Count one applied command, or one ignored byte for `None`.
    #[inline]
    pub fn record_command(&self, command: Option<Command>) {
        let counter = match command {
            Some(Command::Assert) => &self.asserts,
            Some(Command::Deassert) => &self.deasserts,
            None => &self.ignored,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_error(&self) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Zero every counter.
    pub fn reset(&self) {
        self.bytes.store(0, Ordering::Relaxed);
        self.asserts.store(0, Ordering::Relaxed);
        self.deasserts.store(0, Ordering::Relaxed);
        self.ignored.store(0, Ordering::Relaxed);
        self.errors.store(0, Ordering::Relaxed);
    }

    /// Get a snapshot of the current counters.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            bytes: self.bytes.load(Ordering::Relaxed),
            asserts: self.asserts.load(Ordering::Relaxed),
            deasserts: self.deasserts.load(Ordering::Relaxed),
            ignored: self.ignored.load(Ordering::Relaxed),
            errors: self.errors.load(Ordering::Relaxed),
        }
    }
}

impl Default for RelayStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Counters at a point in time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub bytes: u32,
    pub asserts: u32,
    pub deasserts: u32,
    pub ignored: u32,
    pub errors: u32,
}

impl StatsSnapshot {
    /// Total command bytes applied.
    pub fn commands(&self) -> u32 {
        self.asserts.wrapping_add(self.deasserts)
    }
}
