//! Sensor device handles.
//!
//! The actual signal decoding lives in the hardware drivers (GPIO character
//! device, serial UART); this module only defines the seams the poll loop
//! talks through, plus the hardware-backed implementations.
//!
//! # Devices
//!
//! - [`proximity`]: infrared break-beam detector, a boolean "object present" query
//! - [`gps`]: serial GPS receiver, polled for raw NMEA text

pub mod gps;
pub mod proximity;

pub use gps::{GpsPort, GpsReader, UartGpsPort};
pub use proximity::{GpioProximityDetector, ProximityDetector};

use tracing::info;

/// The owning pair of sensor handles.
///
/// Constructed once at startup and dropped exactly once at shutdown; the
/// poll loop borrows it for the lifetime of the process.
pub struct Devices<D: ProximityDetector, P: GpsPort> {
    pub detector: D,
    pub gps: GpsReader<P>,
}

impl<D: ProximityDetector, P: GpsPort> Devices<D, P> {
    pub fn new(detector: D, port: P) -> Self {
        Self {
            detector,
            gps: GpsReader::new(port),
        }
    }
}

impl<D: ProximityDetector, P: GpsPort> Drop for Devices<D, P> {
    fn drop(&mut self) {
        info!("Device handles released");
    }
}
