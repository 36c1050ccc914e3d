//! Command byte decoding tests

use bt_relay::command::{ASSERT_BYTE, DEASSERT_BYTE};
use bt_relay::{Command, PinState};

#[test]
fn test_one_asserts() {
    assert_eq!(Command::from_byte(b'1'), Some(Command::Assert));
    assert_eq!(Command::Assert.target_state(), PinState::Asserted);
}

#[test]
fn test_zero_deasserts() {
    assert_eq!(Command::from_byte(b'0'), Some(Command::Deassert));
    assert_eq!(Command::Deassert.target_state(), PinState::Deasserted);
}

#[test]
fn test_only_two_bytes_are_commands() {
    let commands: Vec<u8> = (0..=255u8).filter(|&b| Command::from_byte(b).is_some()).collect();
    assert_eq!(commands, vec![DEASSERT_BYTE, ASSERT_BYTE]);
}

#[test]
fn test_near_misses_are_not_commands() {
    // Digits other than 0/1, NUL/SOH, and the high-bit twins of '0'/'1'.
    for byte in [b'2', b'5', b'9', 0x00, 0x01, 0xB0, 0xB1, b'O', b'l'] {
        assert_eq!(Command::from_byte(byte), None, "byte 0x{:02x}", byte);
    }
}
