//! The relay loop.
//!
//! One step: poll inbound, read one byte, echo it with a line terminator,
//! then apply it to the pin if it is a command. Steps never wait for input.
//!
//! ```text
//! HC-05 ──▶ Inbound ──▶ [byte] ──▶ Outbound ──▶ console ("<byte>\n")
//!                          │
//!                          └──▶ '1' / '0' ──▶ OutputPin
//! ```

use crate::channel::{Inbound, Outbound};
use crate::command::Command;
use crate::config::{LineEnding, RelayConfig};
use crate::error::Result;
use crate::pin::{OutputPin, PinState};
use crate::stats::RelayStats;

/// Outcome of one relay step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Nothing was available. No writes, no pin change.
    Idle,
    /// One byte was read and echoed.
    Relayed {
        byte: u8,
        /// Decoded command, `None` for non-command bytes.
        command: Option<Command>,
        /// Pin level after the step, and whether it differs from before.
        state: PinState,
        changed: bool,
    },
}

/// Relay context owning both channels and the output pin.
pub struct Relay<'s, I, O, P> {
    inbound: I,
    outbound: O,
    pin: P,
    state: PinState,
    line_ending: LineEnding,
    stats: &'s RelayStats,
}

impl<'s, I, O, P> Relay<'s, I, O, P>
where
    I: Inbound,
    O: Outbound,
    P: OutputPin,
{
    /// Take ownership of ready channels and pin, and drive the configured
    /// initial level onto the pin.
    pub fn new(inbound: I, outbound: O, mut pin: P, config: &RelayConfig, stats: &'s RelayStats) -> Result<Self> {
        pin.set_state(config.initial_pin_state).inspect_err(|_| stats.record_error())?;

        Ok(Self {
            inbound,
            outbound,
            pin,
            state: config.initial_pin_state,
            line_ending: config.line_ending,
            stats,
        })
    }

    /// Run one iteration.
    ///
    /// A failed echo still applies the byte's command before the error is
    /// returned. A failed pin write leaves the previous state.
    pub fn step(&mut self) -> Result<Step> {
        if !self.inbound.available().inspect_err(|_| self.stats.record_error())? {
            return Ok(Step::Idle);
        }

        let byte = self.inbound.read_byte().inspect_err(|_| self.stats.record_error())?;

        // The byte is already consumed: a failed echo must not lose its command.
        let echoed = self.echo(byte);
        if echoed.is_ok() {
            self.stats.record_byte();
        }

        let command = Command::from_byte(byte);
        let before = self.state;
        let applied = match command {
            Some(cmd) => self.apply(cmd.target_state()),
            None => Ok(()),
        };
        if applied.is_ok() {
            self.stats.record_command(command);
        }

        echoed?;
        applied?;

        Ok(Step::Relayed {
            byte,
            command,
            state: self.state,
            changed: self.state != before,
        })
    }

    /// Step forever, handing every outcome to `observe`.
    ///
    /// `observe` is where callers yield on `Step::Idle` and report errors.
    pub fn run<F>(&mut self, mut observe: F) -> !
    where
        F: FnMut(Result<Step>),
    {
        loop {
            let outcome = self.step();
            observe(outcome);
        }
    }

    /// Current pin level as last driven.
    #[inline]
    pub fn state(&self) -> PinState {
        self.state
    }

    pub fn inbound_mut(&mut self) -> &mut I {
        &mut self.inbound
    }

    pub fn outbound(&self) -> &O {
        &self.outbound
    }

    pub fn pin(&self) -> &P {
        &self.pin
    }

    /// Give back channels and pin.
    pub fn into_parts(self) -> (I, O, P) {
        (self.inbound, self.outbound, self.pin)
    }

    fn echo(&mut self, byte: u8) -> Result<()> {
        let terminator = self.line_ending.as_bytes();
        let mut line = [0u8; 3];
        line[0] = byte;
        line[1..1 + terminator.len()].copy_from_slice(terminator);

        self.outbound
            .write_all(&line[..1 + terminator.len()])
            .inspect_err(|_| self.stats.record_error())
    }

    // Unconditional overwrite: repeated commands still write the pin.
    fn apply(&mut self, state: PinState) -> Result<()> {
        self.pin.set_state(state).inspect_err(|_| self.stats.record_error())?;
        self.state = state;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RelayError;
    use std::collections::VecDeque;
    use std::vec::Vec;

    #[derive(Default)]
    struct Rx(VecDeque<u8>);

    impl Inbound for Rx {
        fn available(&mut self) -> Result<bool> {
            Ok(!self.0.is_empty())
        }

        fn read_byte(&mut self) -> Result<u8> {
            self.0.pop_front().ok_or(RelayError::InboundRead)
        }
    }

    #[derive(Default)]
    struct Tx(Vec<u8>);

    impl Outbound for Tx {
        fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
            self.0.extend_from_slice(bytes);
            Ok(())
        }
    }

    #[derive(Default)]
    struct Led {
        writes: Vec<PinState>,
        fail: bool,
    }

    impl OutputPin for Led {
        fn set_state(&mut self, state: PinState) -> Result<()> {
            if self.fail {
                return Err(RelayError::PinWrite);
            }
            self.writes.push(state);
            Ok(())
        }
    }

    fn relay_with<'s>(input: &[u8], stats: &'s RelayStats) -> Relay<'s, Rx, Tx, Led> {
        let rx = Rx(input.iter().copied().collect());
        Relay::new(rx, Tx::default(), Led::default(), &RelayConfig::DEFAULT, stats).unwrap()
    }

    #[test]
    fn test_new_drives_initial_state() {
        let stats = RelayStats::new();
        let relay = relay_with(b"", &stats);

        assert_eq!(relay.pin().writes, [PinState::Deasserted]);
        assert_eq!(relay.state(), PinState::Deasserted);
    }

    #[test]
    fn test_idle_step_has_no_effects() {
        let stats = RelayStats::new();
        let mut relay = relay_with(b"", &stats);

        assert_eq!(relay.step(), Ok(Step::Idle));
        assert!(relay.outbound().0.is_empty());
        assert_eq!(relay.pin().writes.len(), 1);
    }

    #[test]
    fn test_step_reports_transition() {
        let stats = RelayStats::new();
        let mut relay = relay_with(b"11", &stats);

        assert_eq!(
            relay.step(),
            Ok(Step::Relayed {
                byte: b'1',
                command: Some(Command::Assert),
                state: PinState::Asserted,
                changed: true,
            })
        );
        assert_eq!(
            relay.step(),
            Ok(Step::Relayed {
                byte: b'1',
                command: Some(Command::Assert),
                state: PinState::Asserted,
                changed: false,
            })
        );
        // Both commands hit the pin.
        assert_eq!(relay.pin().writes.len(), 3);
    }

    #[test]
    fn test_crlf_line_ending() {
        let stats = RelayStats::new();
        let config = RelayConfig {
            line_ending: LineEnding::CrLf,
            ..RelayConfig::DEFAULT
        };
        let rx = Rx(b"x".iter().copied().collect());
        let mut relay = Relay::new(rx, Tx::default(), Led::default(), &config, &stats).unwrap();

        relay.step().unwrap();
        assert_eq!(relay.outbound().0, b"x\r\n");
    }

    #[test]
    fn test_pin_failure_keeps_previous_state() {
        let stats = RelayStats::new();
        let mut relay = relay_with(b"1", &stats);
        relay.pin.fail = true;

        assert_eq!(relay.step(), Err(RelayError::PinWrite));
        assert_eq!(relay.state(), PinState::Deasserted);
        // Echo happens before the command is applied.
        assert_eq!(relay.outbound().0, b"1\n");
        assert_eq!(stats.snapshot().errors, 1);
    }
}
