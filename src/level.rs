//! Water-level classification — the domain core.
//!
//! Maps one distance measurement per cycle onto a discrete [`StatusBand`]
//! and derives the [`OutputAction`] (indicator LED, alert pattern, relay
//! message) for that band. Both functions are pure: no history, no hardware,
//! no hidden state, so every invariant is testable on the host.
//!
//! Band algebra, with thresholds `0 < safe < warning < critical`:
//!
//! ```text
//!   d <= 0          → Invalid
//!   0 < d <= safe   → Safe
//!   safe < d <= warn → Warning
//!   d > warn        → Critical
//! ```
//!
//! Boundary values belong to the lower band. Readings beyond the sensor's
//! measurable range never reach the classifier — the driver rejects them
//! with a typed error and the service treats the cycle as Invalid.

use core::fmt::Write as _;

use crate::config::MonitorConfig;

/// Relay status line, fixed capacity so the domain stays allocation-free.
/// 64 bytes covers `WATER:` + the longest decimal expansion of an in-range
/// f32 + `:AUTO`.
pub type StatusLine = heapless::String<64>;

/// Tag appended to every automated reading, distinguishing it from manually
/// injected entries elsewhere in the wider system.
const AUTO_TAG: &str = "AUTO";

// ───────────────────────────────────────────────────────────────
// Status bands
// ───────────────────────────────────────────────────────────────

/// Discrete classification of one distance measurement.
/// Exactly one band is active per sampling cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBand {
    /// Water well below the tank rim.
    Safe,
    /// Water approaching the warning mark.
    Warning,
    /// Water at or past the critical mark.
    Critical,
    /// Non-positive or unclassifiable measurement — no actionable state.
    Invalid,
}

/// Band thresholds in centimetres, lifted out of [`MonitorConfig`] so the
/// classifier's contract names exactly what it depends on.
#[derive(Debug, Clone, Copy)]
pub struct Thresholds {
    /// Upper edge of the Safe band.
    pub safe_cm: f32,
    /// Upper edge of the Warning band.
    pub warning_cm: f32,
    /// Nominal upper edge of the Critical band. Not consulted by
    /// [`classify`] — everything above `warning_cm` is Critical; range
    /// enforcement happens in the sensor driver.
    pub critical_cm: f32,
}

impl From<&MonitorConfig> for Thresholds {
    fn from(config: &MonitorConfig) -> Self {
        Self {
            safe_cm: config.safe_threshold_cm,
            warning_cm: config.warning_threshold_cm,
            critical_cm: config.critical_threshold_cm,
        }
    }
}

/// Classify a distance measurement into its status band.
///
/// Total over the reals: negative, zero, and NaN inputs all fold into
/// [`StatusBand::Invalid`]. Boundary values belong to the lower band
/// (`d == safe_cm` is Safe, `d == warning_cm` is Warning).
pub fn classify(distance_cm: f32, thresholds: &Thresholds) -> StatusBand {
    if !(distance_cm > 0.0) {
        // Catches d <= 0 and NaN in one comparison.
        StatusBand::Invalid
    } else if distance_cm <= thresholds.safe_cm {
        StatusBand::Safe
    } else if distance_cm <= thresholds.warning_cm {
        StatusBand::Warning
    } else {
        StatusBand::Critical
    }
}

// ───────────────────────────────────────────────────────────────
// Output actions
// ───────────────────────────────────────────────────────────────

/// Exclusive indicator LED selection — at most one LED lit per cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Green,
    Yellow,
    Red,
    Off,
}

/// Buzzer waveform for the cycle. The pattern engine turns these into
/// time-varying on/off levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertPattern {
    Silent,
    /// On/off square wave (50% duty).
    Intermittent,
    /// Solid on.
    Continuous,
}

/// Everything one cycle's band drives: indicator, alert, relay message.
/// Recomputed every cycle; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputAction {
    pub indicator: Indicator,
    pub alert: AlertPattern,
    /// `WATER:<distance>:AUTO` for live bands, `None` for Invalid.
    pub message: Option<StatusLine>,
}

/// Derive the output action for a band.
///
/// The indicator/alert mapping depends on the band alone; the message also
/// carries the formatted distance. Deterministic — identical inputs always
/// yield identical output.
pub fn encode_action(band: StatusBand, distance_cm: f32) -> OutputAction {
    let (indicator, alert) = match band {
        StatusBand::Safe => (Indicator::Green, AlertPattern::Silent),
        StatusBand::Warning => (Indicator::Yellow, AlertPattern::Intermittent),
        StatusBand::Critical => (Indicator::Red, AlertPattern::Continuous),
        StatusBand::Invalid => (Indicator::Off, AlertPattern::Silent),
    };

    let message = match band {
        StatusBand::Invalid => None,
        _ => Some(status_line(distance_cm)),
    };

    OutputAction {
        indicator,
        alert,
        message,
    }
}

/// Format the relay wire line: `WATER:<distance>:AUTO`.
///
/// Default float formatting, per the wire contract — the relay device
/// splits on the literal `:`. The transport adapter appends the newline.
pub fn status_line(distance_cm: f32) -> StatusLine {
    let mut line = StatusLine::new();
    // Cannot overflow for sensor-range distances; see StatusLine capacity.
    let _ = write!(line, "WATER:{distance_cm}:{AUTO_TAG}");
    line
}
