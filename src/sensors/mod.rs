//! Sensor subsystem.
//!
//! A single ultrasonic distance sensor feeds the monitor; its driver lives
//! in [`ultrasonic`]. There is no multi-sensor hub — one tank, one sensor.

pub mod ultrasonic;

pub use ultrasonic::UltrasonicSensor;
