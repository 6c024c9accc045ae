//! GPIO / peripheral pin assignments for the LevelWatch main board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// HC-SR04 ultrasonic sensor
// ---------------------------------------------------------------------------

/// Digital output: 10 µs trigger pulse starts a measurement.
pub const ULTRASONIC_TRIG_GPIO: i32 = 4;
/// Digital input: echo pulse width encodes the round-trip time.
pub const ULTRASONIC_ECHO_GPIO: i32 = 5;

// ---------------------------------------------------------------------------
// Indicator LEDs (discrete, active HIGH, series resistors on-board)
// ---------------------------------------------------------------------------

/// Green — level in the SAFE band.
pub const LED_GREEN_GPIO: i32 = 11;
/// Yellow — level in the WARNING band.
pub const LED_YELLOW_GPIO: i32 = 12;
/// Red — level in the CRITICAL band.
pub const LED_RED_GPIO: i32 = 13;

// ---------------------------------------------------------------------------
// Buzzer (active piezo, driven through an NPN transistor, active HIGH)
// ---------------------------------------------------------------------------

pub const BUZZER_GPIO: i32 = 7;

// ---------------------------------------------------------------------------
// UART link to the relay device
// ---------------------------------------------------------------------------

/// UART1 TX into the relay device's RX.
pub const RELAY_UART_TX_GPIO: i32 = 17;
/// UART1 RX (unused — the link is one-way — but routed on the board).
pub const RELAY_UART_RX_GPIO: i32 = 18;
/// Baud rate agreed with the relay device.
pub const RELAY_UART_BAUD: u32 = 9_600;
