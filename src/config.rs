//! System configuration parameters
//!
//! All tunable parameters for the LevelWatch monitor. The band thresholds
//! used to be duplicated compile-time literals shared by comment convention
//! with the relay device; they now live here and are validated once at
//! startup before the control loop runs.

use serde::{Deserialize, Serialize};

/// Core monitor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    // --- Band thresholds (water distance, centimetres) ---
    /// Upper edge of the SAFE band. Boundary values belong to the lower band.
    pub safe_threshold_cm: f32,
    /// Upper edge of the WARNING band.
    pub warning_threshold_cm: f32,
    /// Nominal upper edge of the CRITICAL band. Informational only — the
    /// classifier treats everything above the warning threshold as CRITICAL;
    /// readings past the sensor ceiling are rejected by the driver instead.
    pub critical_threshold_cm: f32,

    // --- Sensor ---
    /// Echo readings above this are rejected as out of range (HC-SR04
    /// measures reliably up to ~400 cm).
    pub max_distance_cm: f32,
    /// Echo pulse timeout (microseconds). No echo within this window means
    /// the target is beyond the measurable range.
    pub echo_timeout_us: u32,

    // --- Timing ---
    /// Sampling loop period (milliseconds).
    pub sample_interval_ms: u32,
    /// Intermittent alert period (milliseconds, 50% duty).
    pub alert_pulse_period_ms: u32,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            // Thresholds match the deployed tank geometry.
            safe_threshold_cm: 3.0,
            warning_threshold_cm: 6.0,
            critical_threshold_cm: 10.0,

            // Sensor
            max_distance_cm: 400.0,
            echo_timeout_us: 30_000, // ~5 m round trip

            // Timing
            sample_interval_ms: 500, // 2 Hz
            alert_pulse_period_ms: 1000,
        }
    }
}

impl MonitorConfig {
    /// Validate the configuration. Called once at startup; the classifier
    /// assumes these invariants afterwards.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.safe_threshold_cm <= 0.0 {
            return Err("safe threshold must be positive");
        }
        if self.warning_threshold_cm <= self.safe_threshold_cm {
            return Err("warning threshold must exceed safe threshold");
        }
        if self.critical_threshold_cm <= self.warning_threshold_cm {
            return Err("critical threshold must exceed warning threshold");
        }
        if self.max_distance_cm < self.critical_threshold_cm {
            return Err("max distance must cover the critical threshold");
        }
        if self.sample_interval_ms == 0 {
            return Err("sample interval must be non-zero");
        }
        if self.alert_pulse_period_ms == 0 {
            return Err("alert pulse period must be non-zero");
        }
        if self.echo_timeout_us == 0 {
            return Err("echo timeout must be non-zero");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_sane() {
        let c = MonitorConfig::default();
        assert!(c.validate().is_ok());
        assert!(c.safe_threshold_cm > 0.0);
        assert!(c.safe_threshold_cm < c.warning_threshold_cm);
        assert!(c.warning_threshold_cm < c.critical_threshold_cm);
        assert!(c.sample_interval_ms > 0);
    }

    #[test]
    fn threshold_ordering_is_enforced() {
        let mut c = MonitorConfig::default();
        c.warning_threshold_cm = c.safe_threshold_cm;
        assert_eq!(
            c.validate(),
            Err("warning threshold must exceed safe threshold")
        );

        let mut c = MonitorConfig::default();
        c.safe_threshold_cm = -1.0;
        assert_eq!(c.validate(), Err("safe threshold must be positive"));

        let mut c = MonitorConfig::default();
        c.critical_threshold_cm = c.warning_threshold_cm - 0.5;
        assert_eq!(
            c.validate(),
            Err("critical threshold must exceed warning threshold")
        );
    }

    #[test]
    fn zero_timing_rejected() {
        let mut c = MonitorConfig::default();
        c.sample_interval_ms = 0;
        assert!(c.validate().is_err());

        let mut c = MonitorConfig::default();
        c.echo_timeout_us = 0;
        assert!(c.validate().is_err());
    }

    #[test]
    fn serde_roundtrip() {
        let c = MonitorConfig::default();
        let json = serde_json::to_string(&c).unwrap();
        let c2: MonitorConfig = serde_json::from_str(&json).unwrap();
        assert!((c.safe_threshold_cm - c2.safe_threshold_cm).abs() < 0.001);
        assert!((c.warning_threshold_cm - c2.warning_threshold_cm).abs() < 0.001);
        assert_eq!(c.sample_interval_ms, c2.sample_interval_ms);
    }

    #[test]
    fn postcard_roundtrip() {
        let c = MonitorConfig::default();
        let bytes = postcard::to_allocvec(&c).unwrap();
        let c2: MonitorConfig = postcard::from_bytes(&bytes).unwrap();
        assert!((c.max_distance_cm - c2.max_distance_cm).abs() < 0.001);
        assert_eq!(c.echo_timeout_us, c2.echo_timeout_us);
    }
}
