//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the logger (which goes to UART / USB-CDC in production). A future
//! telemetry adapter would implement the same trait.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Reading { distance_cm, band } => {
                info!("READ  | {:.1} cm -> {:?}", distance_cm, band);
            }
            AppEvent::BandChanged { from, to } => {
                info!("BAND  | {:?} -> {:?}", from, to);
            }
            AppEvent::SensorFault(e) => {
                warn!("FAULT | {e}");
            }
            AppEvent::Started => {
                info!("START | monitor running");
            }
        }
    }
}
