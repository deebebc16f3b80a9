//! Serial GPS receiver.
//!
//! The receiver streams NMEA sentences over a UART; this module polls the
//! port and hands the raw text up without parsing it. A poll that produces no
//! text yields a sentinel [`GpsFix`] instead, so the caller always has a
//! string to report as a location.

use std::io::{self, Read};
use std::time::Duration;

use serialport::SerialPort;
use tracing::{info, warn};

use crate::model::GpsFix;

/// Maximum bytes taken from the receiver in one poll.
pub const FIX_BUFFER_LEN: usize = 256;

/// Blocking-read bound on the UART; polls never wait longer than this.
const PORT_READ_TIMEOUT: Duration = Duration::from_millis(200);

/// Raw byte access to the GPS UART.
pub trait GpsPort {
    /// Whether the receiver has bytes pending.
    fn data_available(&mut self) -> bool;

    /// Read pending bytes into `buf`.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;
}

/// Polls a [`GpsPort`] and maps the outcome onto [`GpsFix`].
pub struct GpsReader<P: GpsPort> {
    port: P,
}

impl<P: GpsPort> GpsReader<P> {
    pub fn new(port: P) -> Self {
        Self { port }
    }

    /// Fetch the current fix.
    ///
    /// - no data pending → [`GpsFix::NoData`]
    /// - read error → [`GpsFix::ReadError`]
    /// - zero bytes despite data pending → [`GpsFix::EmptyRead`]
    /// - otherwise the buffer contents, unmodified
    pub fn read_fix(&mut self) -> GpsFix {
        if !self.port.data_available() {
            return GpsFix::NoData;
        }

        let mut buf = [0u8; FIX_BUFFER_LEN];
        match self.port.read(&mut buf) {
            Ok(0) => {
                warn!("GPS reported data pending but the read returned no bytes");
                GpsFix::EmptyRead
            }
            Ok(count) => GpsFix::Raw(String::from_utf8_lossy(&buf[..count]).into_owned()),
            Err(e) => {
                warn!(error = %e, "GPS port read error");
                GpsFix::ReadError
            }
        }
    }
}

/// GPS port backed by a hardware serial device.
///
/// Opening the device configures the UART (baud, 8N1). A configuration
/// failure is logged but does not abort startup; the port then reports no
/// data forever and the poll loop keeps running without GPS.
pub struct UartGpsPort {
    port: Option<Box<dyn SerialPort>>,
}

impl UartGpsPort {
    pub fn open(device: &str, baud: u32) -> Self {
        match serialport::new(device, baud)
            .timeout(PORT_READ_TIMEOUT)
            .open()
        {
            Ok(port) => {
                info!(device = %device, baud, "GPS UART configured");
                Self { port: Some(port) }
            }
            Err(e) => {
                warn!(
                    device = %device,
                    baud,
                    error = %e,
                    "Failed to configure GPS UART; continuing without GPS"
                );
                Self { port: None }
            }
        }
    }
}

impl GpsPort for UartGpsPort {
    fn data_available(&mut self) -> bool {
        match &self.port {
            Some(port) => port.bytes_to_read().map(|n| n > 0).unwrap_or(false),
            None => false,
        }
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match &mut self.port {
            Some(port) => port.read(buf),
            None => Err(io::Error::new(io::ErrorKind::NotConnected, "UART not open")),
        }
    }
}
