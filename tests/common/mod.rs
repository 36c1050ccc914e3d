//! In-memory channel and pin mocks shared by the integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;

use bt_relay::channel::{Inbound, Outbound};
use bt_relay::error::{RelayError, Result};
use bt_relay::pin::{OutputPin, PinState};

/// Inbound channel backed by a byte queue.
#[derive(Debug, Default)]
pub struct MockInbound {
    rx: VecDeque<u8>,
    polls: usize,
    fail_reads: bool,
}

impl MockInbound {
    pub fn new(data: &[u8]) -> Self {
        Self {
            rx: data.iter().copied().collect(),
            ..Self::default()
        }
    }

    /// Inject receive data (for test setup)
    pub fn inject(&mut self, data: &[u8]) {
        self.rx.extend(data.iter().copied());
    }

    /// Make every read fail while data stays queued.
    pub fn fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    pub fn pending(&self) -> usize {
        self.rx.len()
    }

    pub fn polls(&self) -> usize {
        self.polls
    }
}

impl Inbound for MockInbound {
    fn available(&mut self) -> Result<bool> {
        self.polls += 1;
        Ok(!self.rx.is_empty())
    }

    fn read_byte(&mut self) -> Result<u8> {
        if self.fail_reads {
            return Err(RelayError::InboundRead);
        }
        self.rx.pop_front().ok_or(RelayError::InboundRead)
    }
}

/// Outbound channel that records everything written.
#[derive(Debug, Default)]
pub struct MockOutbound {
    tx: Vec<u8>,
    writes: usize,
    fail_writes: bool,
}

impl MockOutbound {
    /// Make every write fail without recording data.
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn bytes(&self) -> &[u8] {
        &self.tx
    }

    /// Number of `write_all` calls.
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Transmitted data split into `\n`-terminated lines, terminators removed.
    pub fn lines(&self) -> Vec<Vec<u8>> {
        let mut lines: Vec<Vec<u8>> = self
            .tx
            .split(|&b| b == b'\n')
            .map(|line| line.to_vec())
            .collect();
        // Trailing terminator leaves one empty tail.
        if lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        lines
    }
}

impl Outbound for MockOutbound {
    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        if self.fail_writes {
            return Err(RelayError::OutboundWrite);
        }
        self.tx.extend_from_slice(bytes);
        self.writes += 1;
        Ok(())
    }
}

/// Output pin that records every level written.
#[derive(Debug, Default)]
pub struct MockPin {
    level: Option<PinState>,
    history: Vec<PinState>,
}

impl MockPin {
    /// Last level written, `None` before the first write.
    pub fn level(&self) -> Option<PinState> {
        self.level
    }

    pub fn history(&self) -> &[PinState] {
        &self.history
    }
}

impl OutputPin for MockPin {
    fn set_state(&mut self, state: PinState) -> Result<()> {
        self.level = Some(state);
        self.history.push(state);
        Ok(())
    }
}
