//! HC-SR04 ultrasonic distance sensor driver.
//!
//! Fires a 10 µs trigger pulse, measures the echo pulse width, and converts
//! the round-trip time to centimetres (`us * 0.034 / 2` — speed of sound at
//! room temperature, halved for the return leg).
//!
//! A missing echo (timeout) or a converted distance above the configured
//! ceiling is reported as a typed [`SensorError`] rather than folded into a
//! band: "beyond measurable range" is a sensor condition, not a water level.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: real trigger/echo GPIO timing via hw_init helpers.
//! On host/test: echo width is read from a static `AtomicU32` for injection.

use core::sync::atomic::AtomicU32;
#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::Ordering;

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;
use crate::error::SensorError;

/// Centimetres per microsecond of round-trip echo time.
const CM_PER_US_ROUND_TRIP: f32 = 0.034 / 2.0;

static SIM_ECHO_US: AtomicU32 = AtomicU32::new(0);

/// Inject a raw echo pulse width (microseconds). `0` simulates a timeout.
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_echo_us(echo_us: u32) {
    SIM_ECHO_US.store(echo_us, Ordering::Relaxed);
}

/// Inject a distance directly; converts to the equivalent echo width.
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_distance_cm(distance_cm: f32) {
    let echo_us = (distance_cm / CM_PER_US_ROUND_TRIP) as u32;
    SIM_ECHO_US.store(echo_us.max(1), Ordering::Relaxed);
}

pub struct UltrasonicSensor {
    max_distance_cm: f32,
    _echo_timeout_us: u32,
    _trig_gpio: i32,
    _echo_gpio: i32,
}

impl UltrasonicSensor {
    pub fn new(trig_gpio: i32, echo_gpio: i32, max_distance_cm: f32, echo_timeout_us: u32) -> Self {
        Self {
            max_distance_cm,
            _echo_timeout_us: echo_timeout_us,
            _trig_gpio: trig_gpio,
            _echo_gpio: echo_gpio,
        }
    }

    /// Run one measurement cycle and return the distance in centimetres.
    ///
    /// The reading is consumed by the caller immediately; the driver keeps
    /// no history between cycles.
    pub fn read_distance_cm(&mut self) -> Result<f32, SensorError> {
        let echo_us = self.measure_echo_us();
        if echo_us == 0 {
            return Err(SensorError::EchoTimeout);
        }

        let distance_cm = echo_us as f32 * CM_PER_US_ROUND_TRIP;
        if distance_cm > self.max_distance_cm {
            return Err(SensorError::OutOfRange);
        }
        Ok(distance_cm)
    }

    #[cfg(target_os = "espidf")]
    fn measure_echo_us(&self) -> u32 {
        // Trigger sequence: settle low, then a 10 µs high pulse.
        hw_init::gpio_write(self._trig_gpio, false);
        hw_init::delay_us(2);
        hw_init::gpio_write(self._trig_gpio, true);
        hw_init::delay_us(10);
        hw_init::gpio_write(self._trig_gpio, false);

        hw_init::pulse_in_us(self._echo_gpio, self._echo_timeout_us)
    }

    #[cfg(not(target_os = "espidf"))]
    fn measure_echo_us(&self) -> u32 {
        SIM_ECHO_US.load(Ordering::Relaxed)
    }
}

#[cfg(all(test, not(target_os = "espidf")))]
mod tests {
    use super::*;

    // The sim echo atomic is process-global; serialise tests that touch it.
    static SIM_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

    fn sensor() -> UltrasonicSensor {
        UltrasonicSensor::new(4, 5, 400.0, 30_000)
    }

    #[test]
    fn echo_width_converts_to_centimetres() {
        let _guard = SIM_LOCK.lock().unwrap();
        // 588 µs round trip ≈ 10 cm at 0.034 cm/µs.
        sim_set_echo_us(588);
        let d = sensor().read_distance_cm().unwrap();
        assert!((d - 10.0).abs() < 0.05, "got {d}");
    }

    #[test]
    fn zero_echo_is_a_timeout() {
        let _guard = SIM_LOCK.lock().unwrap();
        sim_set_echo_us(0);
        assert_eq!(
            sensor().read_distance_cm(),
            Err(SensorError::EchoTimeout)
        );
    }

    #[test]
    fn beyond_ceiling_is_out_of_range() {
        let _guard = SIM_LOCK.lock().unwrap();
        sim_set_distance_cm(450.0);
        assert_eq!(
            sensor().read_distance_cm(),
            Err(SensorError::OutOfRange)
        );
    }

    #[test]
    fn distance_injection_round_trips() {
        let _guard = SIM_LOCK.lock().unwrap();
        sim_set_distance_cm(7.2);
        let d = sensor().read_distance_cm().unwrap();
        assert!((d - 7.2).abs() < 0.05, "got {d}");
    }
}
