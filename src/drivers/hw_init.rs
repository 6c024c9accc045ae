//! One-shot hardware peripheral initialization.
//!
//! Configures GPIO directions and the relay UART using raw ESP-IDF sys
//! calls. Called once from `main()` before the sampling loop starts.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
use log::info;

#[cfg(target_os = "espidf")]
use crate::pins;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    GpioConfigFailed(i32),
    UartInitFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::GpioConfigFailed(rc) => write!(f, "GPIO config failed (rc={})", rc),
            Self::UartInitFailed(rc) => write!(f, "UART init failed (rc={})", rc),
        }
    }
}

#[cfg(target_os = "espidf")]
pub fn init_peripherals() -> Result<(), HwInitError> {
    // SAFETY: Called once from main() before the sampling loop; single-threaded.
    unsafe {
        init_gpio_inputs()?;
        init_gpio_outputs()?;
        init_uart()?;
    }
    info!("hw_init: all peripherals configured");
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_peripherals() -> Result<(), HwInitError> {
    log::info!("hw_init(sim): peripheral init skipped");
    Ok(())
}

// ── GPIO Inputs ───────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_gpio_inputs() -> Result<(), HwInitError> {
    let cfg = gpio_config_t {
        pin_bit_mask: 1u64 << pins::ULTRASONIC_ECHO_GPIO,
        mode: gpio_mode_t_GPIO_MODE_INPUT,
        pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_ENABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
    };
    let ret = unsafe { gpio_config(&cfg) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::GpioConfigFailed(ret));
    }

    info!("hw_init: GPIO inputs configured");
    Ok(())
}

// ── GPIO Outputs ──────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_gpio_outputs() -> Result<(), HwInitError> {
    let output_pins = [
        pins::ULTRASONIC_TRIG_GPIO,
        pins::LED_GREEN_GPIO,
        pins::LED_YELLOW_GPIO,
        pins::LED_RED_GPIO,
        pins::BUZZER_GPIO,
    ];

    for &pin in &output_pins {
        let cfg = gpio_config_t {
            pin_bit_mask: 1u64 << pin,
            mode: gpio_mode_t_GPIO_MODE_OUTPUT,
            pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
            pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
            intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        };
        let ret = unsafe { gpio_config(&cfg) };
        if ret != ESP_OK as i32 {
            return Err(HwInitError::GpioConfigFailed(ret));
        }
        unsafe { gpio_set_level(pin, 0) };
    }

    info!("hw_init: GPIO outputs configured");
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_write(pin: i32, high: bool) {
    // SAFETY: gpio_set_level writes to an already-configured output pin;
    // pin was validated during init_gpio_outputs(). Main-loop only.
    unsafe {
        gpio_set_level(pin, if high { 1 } else { 0 });
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_write(_pin: i32, _high: bool) {}

// ── Microsecond timing ────────────────────────────────────────

#[cfg(target_os = "espidf")]
pub fn delay_us(us: u32) {
    // SAFETY: ets_delay_us is a busy-wait on the CPU cycle counter.
    unsafe { ets_delay_us(us) };
}

#[cfg(not(target_os = "espidf"))]
pub fn delay_us(_us: u32) {}

/// Measure a HIGH pulse width on `pin` in microseconds, `pulseIn`-style:
/// wait for the rising edge, then time until the falling edge. Returns 0
/// when either edge fails to arrive within `timeout_us`.
#[cfg(target_os = "espidf")]
pub fn pulse_in_us(pin: i32, timeout_us: u32) -> u32 {
    // SAFETY: esp_timer_get_time is a monotonic counter read; gpio_get_level
    // is a register read on a configured input. Main-loop only.
    let now = || unsafe { esp_timer_get_time() };

    let deadline = now() + i64::from(timeout_us);
    while unsafe { gpio_get_level(pin) } == 0 {
        if now() > deadline {
            return 0;
        }
    }

    let rise = now();
    while unsafe { gpio_get_level(pin) } != 0 {
        if now() > deadline {
            return 0;
        }
    }

    (now() - rise) as u32
}

#[cfg(not(target_os = "espidf"))]
pub fn pulse_in_us(_pin: i32, _timeout_us: u32) -> u32 {
    0
}

// ── Relay UART ────────────────────────────────────────────────

#[cfg(target_os = "espidf")]
const RELAY_UART_NUM: u32 = 1; // UART_NUM_1

#[cfg(target_os = "espidf")]
unsafe fn init_uart() -> Result<(), HwInitError> {
    let cfg = uart_config_t {
        baud_rate: pins::RELAY_UART_BAUD as i32,
        data_bits: uart_word_length_t_UART_DATA_8_BITS,
        parity: uart_parity_t_UART_PARITY_DISABLE,
        stop_bits: uart_stop_bits_t_UART_STOP_BITS_1,
        flow_ctrl: uart_hw_flowcontrol_t_UART_HW_FLOWCTRL_DISABLE,
        ..Default::default()
    };

    let ret = unsafe { uart_param_config(RELAY_UART_NUM as i32, &cfg) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::UartInitFailed(ret));
    }

    let ret = unsafe {
        uart_set_pin(
            RELAY_UART_NUM as i32,
            pins::RELAY_UART_TX_GPIO,
            pins::RELAY_UART_RX_GPIO,
            -1, // RTS unused
            -1, // CTS unused
        )
    };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::UartInitFailed(ret));
    }

    // TX-only link: small ring buffer, no RX buffer, no event queue.
    let ret = unsafe {
        uart_driver_install(RELAY_UART_NUM as i32, 256, 0, 0, core::ptr::null_mut(), 0)
    };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::UartInitFailed(ret));
    }

    info!(
        "hw_init: relay UART{} configured at {} baud",
        RELAY_UART_NUM,
        pins::RELAY_UART_BAUD
    );
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn uart_write(bytes: &[u8]) {
    // SAFETY: uart_write_bytes copies into the driver ring buffer installed
    // by init_uart(); main-loop only.
    unsafe {
        uart_write_bytes(
            RELAY_UART_NUM as i32,
            bytes.as_ptr().cast(),
            bytes.len(),
        );
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn uart_write(_bytes: &[u8]) {}
