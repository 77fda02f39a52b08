//! Sysfs GPIO control of the external RF path.
//!
//! The transmitter hardware hangs a power amplifier and a T/R relay off an
//! Odroid-C2 header; each transmission is bracketed by [`RfPath::prepare_tx`]
//! and [`RfPath::end_tx`]. Pin handles are RAII: on every exit path the pins
//! are driven low and unexported, so an aborted run never leaves the PA
//! keyed.

use std::fs;
use std::thread;
use std::time::Duration;

use snafu::{ResultExt, Snafu};
use tracing::{debug, warn};

// Odroid-C2 J2 header.
pub const GPIO_PA_ENABLE: u32 = 605; // pin 35
pub const GPIO_RELAY_TX: u32 = 609; // pin 36
pub const GPIO_LED_TX: u32 = 610; // pin 31
pub const GPIO_LED_STATUS: u32 = 615; // pin 32

const SYSFS_ROOT: &str = "/sys/class/gpio";
/// Sysfs needs a moment after export before the pin files appear.
const EXPORT_SETTLE: Duration = Duration::from_millis(100);
/// Relay contacts must be seated before the PA sees drive.
const RELAY_SETTLE: Duration = Duration::from_millis(50);

#[derive(Debug, Snafu)]
pub enum GpioError {
    #[snafu(display("gpio {gpio}: {operation} failed: {source}"))]
    Sysfs {
        gpio: u32,
        operation: &'static str,
        source: std::io::Error,
    },
}

struct GpioPin {
    gpio: u32,
}

impl GpioPin {
    fn output(gpio: u32) -> Result<Self, GpioError> {
        // Export can fail if a previous run left the pin exported; the
        // direction write is the real health check.
        match fs::write(format!("{SYSFS_ROOT}/export"), gpio.to_string()) {
            Ok(()) => thread::sleep(EXPORT_SETTLE),
            Err(source) => warn!(gpio, %source, "export failed, pin may already be exported"),
        }

        fs::write(format!("{SYSFS_ROOT}/gpio{gpio}/direction"), "out")
            .context(SysfsSnafu { gpio, operation: "set direction" })?;

        let pin = Self { gpio };
        pin.write(false)?;
        Ok(pin)
    }

    fn write(&self, high: bool) -> Result<(), GpioError> {
        fs::write(
            format!("{SYSFS_ROOT}/gpio{}/value", self.gpio),
            if high { "1" } else { "0" },
        )
        .context(SysfsSnafu { gpio: self.gpio, operation: "write value" })
    }
}

impl Drop for GpioPin {
    fn drop(&mut self) {
        let _ = fs::write(format!("{SYSFS_ROOT}/gpio{}/value", self.gpio), "0");
        let _ = fs::write(format!("{SYSFS_ROOT}/unexport"), self.gpio.to_string());
    }
}

/// Owns the four transmit-side pins for the duration of a run. The status
/// LED stays lit while the path is armed and drops with the handle.
pub struct RfPath {
    pa_enable: GpioPin,
    relay_tx: GpioPin,
    led_tx: GpioPin,
    led_status: GpioPin,
}

impl RfPath {
    pub fn new() -> Result<Self, GpioError> {
        let path = Self {
            pa_enable: GpioPin::output(GPIO_PA_ENABLE)?,
            relay_tx: GpioPin::output(GPIO_RELAY_TX)?,
            led_tx: GpioPin::output(GPIO_LED_TX)?,
            led_status: GpioPin::output(GPIO_LED_STATUS)?,
        };
        path.led_status.write(true)?;
        Ok(path)
    }

    /// Switch the antenna relay to TX, wait for the contacts, then key the
    /// PA.
    pub fn prepare_tx(&mut self) -> Result<(), GpioError> {
        debug!("rf path: relay to TX, PA on");
        self.relay_tx.write(true)?;
        thread::sleep(RELAY_SETTLE);
        self.pa_enable.write(true)?;
        self.led_tx.write(true)
    }

    /// Unkey the PA first so the relay never switches hot.
    pub fn end_tx(&mut self) -> Result<(), GpioError> {
        debug!("rf path: PA off, relay to RX");
        self.pa_enable.write(false)?;
        thread::sleep(RELAY_SETTLE);
        self.relay_tx.write(false)?;
        self.led_tx.write(false)
    }
}
