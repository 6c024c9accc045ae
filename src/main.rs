//! LevelWatch Firmware — Main Entry Point
//!
//! Hexagonal architecture around a fixed-rate synchronous sampling loop.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   Adapters (outer ring)                  │
//! │                                                          │
//! │  HardwareAdapter      SerialRelay       LogEventSink     │
//! │  (Sensor+Actuator)    (RelayPort)       (EventSink)      │
//! │                                                          │
//! │  ───────────── Port Trait Boundary ──────────────        │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────┐      │
//! │  │          MonitorService (pure logic)           │      │
//! │  │          classify · encode · alert             │      │
//! │  └────────────────────────────────────────────────┘      │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use std::thread;
use std::time::Duration;

use anyhow::Result;
use log::info;

use levelwatch::adapters::hardware::HardwareAdapter;
use levelwatch::adapters::log_sink::LogEventSink;
use levelwatch::adapters::serial_relay::SerialRelay;
use levelwatch::app::service::MonitorService;
use levelwatch::config::MonitorConfig;
use levelwatch::drivers::buzzer::BuzzerDriver;
use levelwatch::drivers::hw_init;
use levelwatch::drivers::indicator::IndicatorLeds;
use levelwatch::error::Error;
use levelwatch::pins;
use levelwatch::sensors::UltrasonicSensor;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("LevelWatch v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Initialise hardware peripherals ────────────────────
    if let Err(e) = hw_init::init_peripherals() {
        // Peripheral init failure is critical — log and halt.
        log::error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }

    // ── 3. Configuration, validated once before the loop ──────
    let config = MonitorConfig::default();
    config
        .validate()
        .map_err(|msg| anyhow::anyhow!(Error::Config(msg)))?;

    // ── 4. Construct adapters ─────────────────────────────────
    let sensor = UltrasonicSensor::new(
        pins::ULTRASONIC_TRIG_GPIO,
        pins::ULTRASONIC_ECHO_GPIO,
        config.max_distance_cm,
        config.echo_timeout_us,
    );
    let mut hw = HardwareAdapter::new(sensor, IndicatorLeds::new(), BuzzerDriver::new());
    let mut relay = SerialRelay::new();
    let mut sink = LogEventSink::new();

    // ── 5. Construct the monitor service ──────────────────────
    let mut app = MonitorService::new(&config);
    app.start(&mut sink);

    info!("System ready. Entering sampling loop.");

    // ── 6. Fixed-rate sampling loop ───────────────────────────
    // Single-threaded and synchronous: one measurement per cycle, consumed
    // immediately, then a fixed delay. The sleep yields to FreeRTOS.
    loop {
        app.tick(&mut hw, &mut relay, &mut sink);
        thread::sleep(Duration::from_millis(u64::from(config.sample_interval_ms)));
    }
}
