//! Adapters — implementations of the port traits over real hardware,
//! the relay UART, and the log facade.

pub mod hardware;
pub mod log_sink;
pub mod serial_relay;
