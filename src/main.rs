//! BtRelay - Main entry point
//!
//! 1. Open the log UART
//! 2. Configure the LED, open console and HC-05 UARTs
//! 3. Relay forever; drain logs and yield while idle

#![cfg_attr(target_os = "espidf", no_std)]
#![cfg_attr(target_os = "espidf", no_main)]

#[cfg(target_os = "espidf")]
mod firmware {
    use esp_idf_svc::hal::peripherals::Peripherals;
    use esp_idf_svc::hal::uart::UartTxDriver;
    use esp_idf_svc::sys as esp_idf_sys;

    use bt_relay::config::board::LogUartConfig;
    use bt_relay::hal::{self, now_us, yield_ticks};
    use bt_relay::log_sink::{drain_log, init_log_uart};
    use bt_relay::{relay_debug, relay_error, relay_info, relay_warn};
    use bt_relay::{RelayConfig, Step, LOG, STATS};

    /// Version string (set by build.rs, includes git hash)
    const VERSION: &str = env!("VERSION_STRING");

    /// Interval between statistics reports.
    const STATS_INTERVAL_US: i64 = 10_000_000;

    #[no_mangle]
    fn main() {
        // Initialize ESP-IDF
        esp_idf_sys::link_patches();

        let config = RelayConfig::DEFAULT;
        LOG.set_max_level(config.log_level);

        let Some(peripherals) = Peripherals::take().ok() else {
            return;
        };

        // Without a log sink there is nowhere to report; keep going anyway.
        let mut log_uart = init_log_uart(peripherals.uart2, &LogUartConfig::default()).ok();

        relay_info!(LOG, now_us(), "{}", VERSION);

        let mut relay = match hal::init(peripherals.uart0, peripherals.uart1, &config, &STATS) {
            Ok(relay) => relay,
            Err(e) => {
                relay_error!(LOG, now_us(), "init failed: {}", e);
                flush_log(&mut log_uart);
                return;
            }
        };

        relay_info!(
            LOG,
            now_us(),
            "relay up: {} baud, LED GPIO{} {}",
            config.baud_rate,
            config.led_pin,
            relay.state().as_str()
        );
        flush_log(&mut log_uart);

        let mut last_report = now_us();

        relay.run(|outcome| match outcome {
            Ok(Step::Idle) => {
                let now = now_us();
                if now - last_report > STATS_INTERVAL_US {
                    let s = STATS.snapshot();
                    relay_info!(
                        LOG,
                        now,
                        "last 10s: bytes={} on={} off={} ignored={} errors={}",
                        s.bytes,
                        s.asserts,
                        s.deasserts,
                        s.ignored,
                        s.errors
                    );
                    STATS.reset();
                    last_report = now;
                }

                flush_log(&mut log_uart);
                yield_ticks(config.idle_yield_ticks);
            }
            Ok(Step::Relayed { byte, state, changed, .. }) => {
                if changed {
                    relay_debug!(LOG, now_us(), "0x{:02x} -> LED {}", byte, state.as_str());
                }
            }
            Err(e) => {
                relay_warn!(LOG, now_us(), "step: {}", e);
            }
        });
    }

    fn flush_log(sink: &mut Option<UartTxDriver<'static>>) {
        match sink {
            Some(uart) => {
                let _ = drain_log(&LOG, uart);
            }
            // Keep the ring from filling with entries nobody will read.
            None => while LOG.drain().is_some() {},
        }
    }
}

#[cfg(not(target_os = "espidf"))]
fn main() {
    eprintln!("bt-relay runs on ESP-IDF targets only; build with --target xtensa-esp32s3-espidf");
}
