//! Port traits — the hexagonal boundary between domain logic and the
//! outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ MonitorService (domain)
//! ```
//!
//! Driven adapters (sensor, actuators, relay link, event sinks) implement
//! these traits. The [`MonitorService`](super::service::MonitorService)
//! consumes them via generics, so the domain core never touches hardware
//! directly.

use crate::error::SensorError;
use crate::level::Indicator;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this once per cycle to obtain the
/// water distance in centimetres.
pub trait SensorPort {
    fn read_distance_cm(&mut self) -> Result<f32, SensorError>;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command the indicators.
pub trait ActuatorPort {
    /// Light exactly the LED for `selection` (or none for `Off`).
    fn set_indicator(&mut self, selection: Indicator);

    /// Apply the buzzer level for this cycle.
    fn set_buzzer(&mut self, on: bool);

    /// Kill all outputs (LEDs, buzzer) — safe shutdown.
    fn all_off(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Relay port (driven adapter: domain → downstream relay device)
// ───────────────────────────────────────────────────────────────

/// Carries one status line per cycle to the downstream relay device.
/// The line text is domain logic; the adapter owns only the transport
/// (framing newline included).
pub trait RelayPort {
    fn send_status(&mut self, line: &str);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port. Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
