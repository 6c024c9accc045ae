//! Buzzer driver (active piezo behind an NPN transistor).
//!
//! A dumb on/off actuator — the alert waveform is generated by the
//! [`AlertPatternEngine`](crate::drivers::alert_patterns::AlertPatternEngine)
//! and this driver just applies the level.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the real GPIO via hw_init helpers.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;
use crate::pins;

pub struct BuzzerDriver {
    on: bool,
}

impl BuzzerDriver {
    pub fn new() -> Self {
        Self { on: false }
    }

    pub fn set(&mut self, on: bool) {
        hw_init::gpio_write(pins::BUZZER_GPIO, on);
        self.on = on;
    }

    pub fn off(&mut self) {
        self.set(false);
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}
