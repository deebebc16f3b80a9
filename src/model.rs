//! Data models for the close-call reporter.
//!
//! Two value types cross the module boundaries here:
//!
//! - [`GpsFix`]: the result of one GPS poll, either a raw receiver line or a
//!   sentinel describing why no line was produced
//! - [`NotificationPayload`]: the JSON body sent to the remote datastore for
//!   one detection event

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Timestamp format stamped onto outgoing messages (ISO-8601, UTC).
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// The outcome of a single GPS poll.
///
/// The receiver output is opaque text (NMEA decoding happens inside the
/// driver); the remaining variants are sentinels for polls that produced no
/// text. `Display` renders the exact strings the datastore expects, so a fix
/// can be forwarded as a location without further mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GpsFix {
    /// Raw receiver output, forwarded unmodified.
    Raw(String),

    /// The receiver had no data pending.
    NoData,

    /// The port read failed.
    ReadError,

    /// Data was reported available but the read returned zero bytes.
    EmptyRead,
}

impl fmt::Display for GpsFix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpsFix::Raw(text) => f.write_str(text),
            GpsFix::NoData => f.write_str("No GPS Data"),
            GpsFix::ReadError => f.write_str("GPS Error"),
            GpsFix::EmptyRead => f.write_str("Empty Read"),
        }
    }
}

/// JSON body for one detection report.
///
/// Serialized with `serde_json`, so embedded quotes and control characters in
/// the message or the receiver output are escaped properly.
#[derive(Debug, Clone, Serialize)]
pub struct NotificationPayload {
    /// Free-text event message with the event timestamp appended.
    pub message: String,

    /// The GPS fix (or sentinel) current at detection time.
    pub location: String,
}

impl NotificationPayload {
    /// Build a payload for an event observed at `now`.
    ///
    /// The timestamp is appended to the message with a single space,
    /// formatted as ISO-8601 UTC (e.g. `object-detected 2011-10-08T07:07:09Z`).
    pub fn new(message: &str, location: &str, now: DateTime<Utc>) -> Self {
        Self {
            message: format!("{} {}", message, now.format(TIMESTAMP_FORMAT)),
            location: location.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fix_sentinels() {
        assert_eq!(GpsFix::NoData.to_string(), "No GPS Data");
        assert_eq!(GpsFix::ReadError.to_string(), "GPS Error");
        assert_eq!(GpsFix::EmptyRead.to_string(), "Empty Read");
    }

    #[test]
    fn test_fix_raw_passthrough() {
        let line = "$GPGGA,064036.289,4836.5375,N,00740.9373,E,1,04,3.2,200.2,M,,,,0000*0E";
        assert_eq!(GpsFix::Raw(line.to_string()).to_string(), line);
    }

    #[test]
    fn test_payload_timestamp_format() {
        let now = Utc.with_ymd_and_hms(2011, 10, 8, 7, 7, 9).unwrap();
        let payload = NotificationPayload::new("object-detected", "No GPS Data", now);

        assert_eq!(payload.message, "object-detected 2011-10-08T07:07:09Z");
        assert_eq!(payload.location, "No GPS Data");
    }

    #[test]
    fn test_payload_serializes_with_escaping() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let payload = NotificationPayload::new("object-detected", "line with \"quotes\"", now);

        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains(r#""location":"line with \"quotes\"""#));
        assert!(json.contains("object-detected 2024-01-15T10:30:00Z"));
    }
}
