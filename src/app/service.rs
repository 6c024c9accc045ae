//! Monitor service — the hexagonal core.
//!
//! [`MonitorService`] owns the band thresholds and the alert pattern
//! engine, and runs the per-cycle pipeline:
//!
//! ```text
//!  SensorPort ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                 │     MonitorService      │
//! ActuatorPort ◀──│  classify · encode      │──▶ RelayPort
//!                 └────────────────────────┘
//! ```
//!
//! Each cycle's band and action depend only on that cycle's measurement —
//! the only carried state is the previous band (for edge-triggered
//! `BandChanged` events) and the alert waveform phase.

use log::{info, warn};

use crate::config::MonitorConfig;
use crate::drivers::alert_patterns::AlertPatternEngine;
use crate::level::{classify, encode_action, StatusBand, Thresholds};

use super::events::AppEvent;
use super::ports::{ActuatorPort, EventSink, RelayPort, SensorPort};

/// The application service orchestrates all domain logic.
pub struct MonitorService {
    thresholds: Thresholds,
    alert: AlertPatternEngine,
    /// Milliseconds per sampling tick (drives the alert waveform phase).
    tick_ms: u32,
    tick_count: u64,
    last_band: StatusBand,
}

impl MonitorService {
    /// Construct the service from a validated configuration.
    pub fn new(config: &MonitorConfig) -> Self {
        Self {
            thresholds: Thresholds::from(config),
            alert: AlertPatternEngine::new(config.alert_pulse_period_ms),
            tick_ms: config.sample_interval_ms,
            tick_count: 0,
            last_band: StatusBand::Invalid,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started);
        info!(
            "MonitorService started (safe<={} warn<={} cm)",
            self.thresholds.safe_cm, self.thresholds.warning_cm
        );
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one full sampling cycle: read → classify → encode → actuate →
    /// relay.
    ///
    /// The `hw` parameter satisfies **both** [`SensorPort`] and
    /// [`ActuatorPort`] — this avoids a double mutable borrow while
    /// keeping the port boundary explicit.
    ///
    /// Returns the band classified this cycle.
    pub fn tick(
        &mut self,
        hw: &mut (impl SensorPort + ActuatorPort),
        relay: &mut impl RelayPort,
        sink: &mut impl EventSink,
    ) -> StatusBand {
        self.tick_count += 1;

        // 1. Read and classify. A failed read is not an error condition:
        //    it folds into the Invalid band (no actionable state).
        let (band, action) = match hw.read_distance_cm() {
            Ok(distance_cm) => {
                let band = classify(distance_cm, &self.thresholds);
                sink.emit(&AppEvent::Reading { distance_cm, band });
                (band, encode_action(band, distance_cm))
            }
            Err(e) => {
                warn!("sensor read failed: {e}");
                sink.emit(&AppEvent::SensorFault(e));
                (StatusBand::Invalid, encode_action(StatusBand::Invalid, 0.0))
            }
        };

        // 2. Apply outputs.
        hw.set_indicator(action.indicator);
        self.alert.set_pattern(action.alert);
        hw.set_buzzer(self.alert.tick(self.tick_ms));

        // 3. Relay the status line (live bands only).
        if let Some(line) = &action.message {
            relay.send_status(line);
        }

        // 4. Edge-triggered band change event.
        if band != self.last_band {
            sink.emit(&AppEvent::BandChanged {
                from: self.last_band,
                to: band,
            });
            self.last_band = band;
        }

        band
    }

    // ── Queries ───────────────────────────────────────────────

    /// Band classified on the most recent tick.
    pub fn band(&self) -> StatusBand {
        self.last_band
    }

    /// Total sampling ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SensorError;
    use crate::level::Indicator;

    struct StubHw {
        reading: Result<f32, SensorError>,
        indicator: Indicator,
        buzzer: bool,
    }

    impl SensorPort for StubHw {
        fn read_distance_cm(&mut self) -> Result<f32, SensorError> {
            self.reading
        }
    }

    impl ActuatorPort for StubHw {
        fn set_indicator(&mut self, selection: Indicator) {
            self.indicator = selection;
        }
        fn set_buzzer(&mut self, on: bool) {
            self.buzzer = on;
        }
        fn all_off(&mut self) {
            self.indicator = Indicator::Off;
            self.buzzer = false;
        }
    }

    struct NullRelay;
    impl RelayPort for NullRelay {
        fn send_status(&mut self, _line: &str) {}
    }

    struct NullSink;
    impl EventSink for NullSink {
        fn emit(&mut self, _event: &AppEvent) {}
    }

    fn service() -> MonitorService {
        MonitorService::new(&MonitorConfig::default())
    }

    #[test]
    fn tick_counts_accumulate() {
        let mut svc = service();
        let mut hw = StubHw {
            reading: Ok(2.0),
            indicator: Indicator::Off,
            buzzer: false,
        };
        for _ in 0..3 {
            svc.tick(&mut hw, &mut NullRelay, &mut NullSink);
        }
        assert_eq!(svc.tick_count(), 3);
        assert_eq!(svc.band(), StatusBand::Safe);
        assert_eq!(hw.indicator, Indicator::Green);
        assert!(!hw.buzzer);
    }

    #[test]
    fn sensor_fault_folds_into_invalid() {
        let mut svc = service();
        let mut hw = StubHw {
            reading: Err(SensorError::EchoTimeout),
            indicator: Indicator::Red,
            buzzer: true,
        };
        let band = svc.tick(&mut hw, &mut NullRelay, &mut NullSink);
        assert_eq!(band, StatusBand::Invalid);
        assert_eq!(hw.indicator, Indicator::Off);
        assert!(!hw.buzzer);
    }
}
