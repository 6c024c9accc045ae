//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the ultrasonic sensor and the actuator drivers, exposing them
//! through [`SensorPort`] and [`ActuatorPort`]. This is the only module
//! in the system that touches actual hardware. On non-espidf targets, the
//! underlying drivers use cfg-gated simulation stubs.

use crate::app::ports::{ActuatorPort, SensorPort};
use crate::drivers::buzzer::BuzzerDriver;
use crate::drivers::indicator::IndicatorLeds;
use crate::error::SensorError;
use crate::level::Indicator;
use crate::sensors::UltrasonicSensor;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter {
    sensor: UltrasonicSensor,
    leds: IndicatorLeds,
    buzzer: BuzzerDriver,
}

impl HardwareAdapter {
    pub fn new(sensor: UltrasonicSensor, leds: IndicatorLeds, buzzer: BuzzerDriver) -> Self {
        Self {
            sensor,
            leds,
            buzzer,
        }
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl SensorPort for HardwareAdapter {
    fn read_distance_cm(&mut self) -> Result<f32, SensorError> {
        self.sensor.read_distance_cm()
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl ActuatorPort for HardwareAdapter {
    fn set_indicator(&mut self, selection: Indicator) {
        self.leds.select(selection);
    }

    fn set_buzzer(&mut self, on: bool) {
        self.buzzer.set(on);
    }

    fn all_off(&mut self) {
        self.leds.all_off();
        self.buzzer.off();
    }
}
