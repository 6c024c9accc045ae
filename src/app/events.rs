//! Outbound application events.
//!
//! The [`MonitorService`](super::service::MonitorService) emits these
//! through the [`EventSink`](super::ports::EventSink) port. Adapters on
//! the other side decide what to do with them — log to serial, forward to
//! telemetry, etc.

use crate::error::SensorError;
use crate::level::StatusBand;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, Copy)]
pub enum AppEvent {
    /// The monitor service has started.
    Started,

    /// One sampling cycle produced a classified reading.
    Reading {
        distance_cm: f32,
        band: StatusBand,
    },

    /// The classified band changed between cycles.
    BandChanged { from: StatusBand, to: StatusBand },

    /// The sensor failed to produce a usable reading this cycle.
    SensorFault(SensorError),
}
