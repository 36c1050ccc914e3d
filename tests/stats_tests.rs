//! Relay statistics tests

use bt_relay::{Command, RelayStats};

#[test]
fn test_stats_start_at_zero() {
    let stats = RelayStats::new();
    let snap = stats.snapshot();

    assert_eq!(snap.bytes, 0);
    assert_eq!(snap.commands(), 0);
    assert_eq!(snap.errors, 0);
}

#[test]
fn test_record_command_routes_counters() {
    let stats = RelayStats::new();

    stats.record_command(Some(Command::Assert));
    stats.record_command(Some(Command::Assert));
    stats.record_command(Some(Command::Deassert));
    stats.record_command(None);

    let snap = stats.snapshot();
    assert_eq!(snap.asserts, 2);
    assert_eq!(snap.deasserts, 1);
    assert_eq!(snap.ignored, 1);
    assert_eq!(snap.commands(), 3);
}

#[test]
fn test_reset_clears_everything() {
    let stats = RelayStats::new();
    stats.record_byte();
    stats.record_error();
    stats.record_command(None);

    stats.reset();

    assert_eq!(stats.snapshot(), Default::default());
}

#[test]
fn test_counters_from_many_threads() {
    use std::sync::Arc;
    use std::thread;

    let stats = Arc::new(RelayStats::new());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let stats = Arc::clone(&stats);
            thread::spawn(move || {
                for _ in 0..250 {
                    stats.record_byte();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(stats.snapshot().bytes, 1000);
}
