//! Three-LED status indicator driver.
//!
//! Green / yellow / red LEDs on dedicated GPIOs, driven as an exclusive
//! set: selecting one band's LED switches the other two off in the same
//! call, so the hardware can never show two bands at once.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives real GPIO levels via hw_init helpers.
//! On host/test: tracks the selection in-memory only.

use crate::drivers::hw_init;
use crate::level::Indicator;
use crate::pins;

pub struct IndicatorLeds {
    current: Indicator,
}

impl IndicatorLeds {
    pub fn new() -> Self {
        Self {
            current: Indicator::Off,
        }
    }

    /// Light exactly the LED for `selection` (or none for `Off`).
    pub fn select(&mut self, selection: Indicator) {
        hw_init::gpio_write(pins::LED_GREEN_GPIO, selection == Indicator::Green);
        hw_init::gpio_write(pins::LED_YELLOW_GPIO, selection == Indicator::Yellow);
        hw_init::gpio_write(pins::LED_RED_GPIO, selection == Indicator::Red);
        self.current = selection;
    }

    pub fn all_off(&mut self) {
        self.select(Indicator::Off);
    }

    pub fn current(&self) -> Indicator {
        self.current
    }
}
