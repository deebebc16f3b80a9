//! Infrared break-beam proximity detector.
//!
//! The RFR359F-style detector pulls its output line high while the beam is
//! interrupted, so "object present" is a single GPIO level read.

use gpio_cdev::{Chip, LineHandle, LineRequestFlags};
use tracing::{info, warn};

/// Consumer label attached to the GPIO line request.
const GPIO_CONSUMER: &str = "close-call-reporter";

/// Boolean "object present" query over the detector.
///
/// There is no error path: a detector that cannot be read reports no object,
/// and the failure is logged.
pub trait ProximityDetector {
    fn object_detected(&mut self) -> bool;
}

/// Detector backed by a GPIO character device line.
pub struct GpioProximityDetector {
    handle: Option<LineHandle>,
}

impl GpioProximityDetector {
    /// Request the detector line as an input.
    ///
    /// A chip or line that cannot be opened is logged and leaves the detector
    /// permanently reporting "no object"; startup proceeds regardless, the
    /// same soft-failure policy the GPS UART gets.
    pub fn open(chip_path: &str, line: u32) -> Self {
        let handle = Chip::new(chip_path)
            .and_then(|mut chip| chip.get_line(line))
            .and_then(|line| line.request(LineRequestFlags::INPUT, 0, GPIO_CONSUMER));

        match handle {
            Ok(handle) => {
                info!(chip = %chip_path, line, "Proximity detector ready");
                Self {
                    handle: Some(handle),
                }
            }
            Err(e) => {
                warn!(
                    chip = %chip_path,
                    line,
                    error = %e,
                    "Failed to open proximity detector; it will report no object"
                );
                Self { handle: None }
            }
        }
    }
}

impl ProximityDetector for GpioProximityDetector {
    fn object_detected(&mut self) -> bool {
        let Some(handle) = &self.handle else {
            return false;
        };

        match handle.get_value() {
            Ok(level) => level == 1,
            Err(e) => {
                warn!(error = %e, "Detector read failed");
                false
            }
        }
    }
}
