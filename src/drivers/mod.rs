//! Actuator drivers, hardware initialisation, and peripheral helpers.

pub mod alert_patterns;
pub mod buzzer;
pub mod hw_init;
pub mod indicator;
