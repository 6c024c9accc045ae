//! Serial relay adapter.
//!
//! Implements [`RelayPort`] over the UART link to the downstream relay
//! device. The domain hands over the finished `WATER:<distance>:AUTO`
//! line; this adapter only frames it with the trailing newline and puts
//! it on the wire.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: writes through the UART driver installed by hw_init.
//! On host/test: logs the line and keeps the last one for inspection.

use crate::app::ports::RelayPort;
use crate::drivers::hw_init;

pub struct SerialRelay {
    lines_sent: u32,
    #[cfg(not(target_os = "espidf"))]
    last_line: Option<crate::level::StatusLine>,
}

impl SerialRelay {
    pub fn new() -> Self {
        Self {
            lines_sent: 0,
            #[cfg(not(target_os = "espidf"))]
            last_line: None,
        }
    }

    /// Number of status lines put on the wire since boot.
    pub fn lines_sent(&self) -> u32 {
        self.lines_sent
    }

    /// Last line handed to the transport (host/test builds only).
    #[cfg(not(target_os = "espidf"))]
    pub fn last_line(&self) -> Option<&str> {
        self.last_line.as_deref()
    }
}

impl RelayPort for SerialRelay {
    fn send_status(&mut self, line: &str) {
        hw_init::uart_write(line.as_bytes());
        hw_init::uart_write(b"\n");
        self.lines_sent = self.lines_sent.saturating_add(1);

        #[cfg(not(target_os = "espidf"))]
        {
            log::debug!("relay(sim): {line}");
            let mut stored = crate::level::StatusLine::new();
            let _ = stored.push_str(line);
            self.last_line = Some(stored);
        }
    }
}

#[cfg(all(test, not(target_os = "espidf")))]
mod tests {
    use super::*;

    #[test]
    fn lines_are_counted_and_retained() {
        let mut relay = SerialRelay::new();
        assert_eq!(relay.lines_sent(), 0);
        relay.send_status("WATER:2.5:AUTO");
        relay.send_status("WATER:7.2:AUTO");
        assert_eq!(relay.lines_sent(), 2);
        assert_eq!(relay.last_line(), Some("WATER:7.2:AUTO"));
    }
}
