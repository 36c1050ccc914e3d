//! Global instances shared by the relay task and its reporting.

use crate::logging::LogStream;
use crate::stats::RelayStats;

/// Log stream for the relay task.
///
/// Single producer (relay task and its HAL adapters), single consumer
/// (idle-time drain to the log UART).
pub static LOG: LogStream = LogStream::new();

/// Relay counters, reported periodically in the log.
pub static STATS: RelayStats = RelayStats::new();
