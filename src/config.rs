//! Environment configuration.
//!
//! Reporting is opt-in: the network path is active only when both `SERVER`
//! and `AUTH_TOKEN` are present. Leaving either unset degrades the program to
//! local-only logging, which is the intended behavior for bench setups — not
//! an error.
//!
//! Everything else has a default matching the original deployment and exists
//! mainly so tests and non-standard wiring can override it.

use std::env;
use std::time::Duration;

/// Seconds between poll iterations.
const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;

/// Upper bound on one datastore PUT round trip.
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// UART device the GPS receiver is attached to (Edison exposes the
/// breakout-board UART here).
const DEFAULT_GPS_DEVICE: &str = "/dev/ttyMFD1";

/// GPS receiver baud rate.
const DEFAULT_GPS_BAUD: u32 = 9600;

/// GPIO character device holding the detector pin.
const DEFAULT_GPIO_CHIP: &str = "/dev/gpiochip0";

/// GPIO line the break-beam detector output is wired to.
const DEFAULT_DETECTOR_PIN: u32 = 2;

/// Runtime configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Datastore URL for detection reports (`SERVER`).
    pub server: Option<String>,

    /// Value for the `X-Auth-Token` header (`AUTH_TOKEN`).
    pub auth_token: Option<String>,

    /// Delay between poll iterations.
    pub poll_interval: Duration,

    /// Timeout applied to each datastore PUT.
    pub http_timeout: Duration,

    /// Serial device path of the GPS receiver.
    pub gps_device: String,

    /// GPS UART baud rate.
    pub gps_baud: u32,

    /// GPIO chip device path.
    pub gpio_chip: String,

    /// GPIO line number of the detector.
    pub detector_pin: u32,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Unparseable numeric overrides fall back to their defaults rather than
    /// aborting startup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let parse_secs = |key: &str, default: u64| {
            lookup(key)
                .and_then(|v| v.parse().ok())
                .unwrap_or(default)
        };

        Self {
            server: lookup("SERVER"),
            auth_token: lookup("AUTH_TOKEN"),
            poll_interval: Duration::from_secs(parse_secs(
                "REPORTER_POLL_INTERVAL_SECS",
                DEFAULT_POLL_INTERVAL_SECS,
            )),
            http_timeout: Duration::from_secs(parse_secs(
                "REPORTER_HTTP_TIMEOUT_SECS",
                DEFAULT_HTTP_TIMEOUT_SECS,
            )),
            gps_device: lookup("REPORTER_GPS_DEVICE")
                .unwrap_or_else(|| DEFAULT_GPS_DEVICE.to_string()),
            gps_baud: lookup("REPORTER_GPS_BAUD")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_GPS_BAUD),
            gpio_chip: lookup("REPORTER_GPIO_CHIP")
                .unwrap_or_else(|| DEFAULT_GPIO_CHIP.to_string()),
            detector_pin: lookup("REPORTER_DETECTOR_PIN")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_DETECTOR_PIN),
        }
    }

    /// Whether remote reporting is configured.
    ///
    /// Requires both the server URL and the auth token; either one alone is
    /// not enough to attempt a network call.
    pub fn reporting_enabled(&self) -> bool {
        self.server.is_some() && self.auth_token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_environment_empty() {
        let config = Config::from_lookup(|_| None);

        assert!(config.server.is_none());
        assert!(config.auth_token.is_none());
        assert!(!config.reporting_enabled());
        assert_eq!(config.poll_interval, Duration::from_secs(5));
        assert_eq!(config.http_timeout, Duration::from_secs(10));
        assert_eq!(config.gps_device, "/dev/ttyMFD1");
        assert_eq!(config.gps_baud, 9600);
        assert_eq!(config.gpio_chip, "/dev/gpiochip0");
        assert_eq!(config.detector_pin, 2);
    }

    #[test]
    fn test_reporting_requires_both_variables() {
        let server_only = Config::from_lookup(|key| match key {
            "SERVER" => Some("http://datastore.example/events".to_string()),
            _ => None,
        });
        assert!(!server_only.reporting_enabled());

        let token_only = Config::from_lookup(|key| match key {
            "AUTH_TOKEN" => Some("s3cret".to_string()),
            _ => None,
        });
        assert!(!token_only.reporting_enabled());

        let both = Config::from_lookup(|key| match key {
            "SERVER" => Some("http://datastore.example/events".to_string()),
            "AUTH_TOKEN" => Some("s3cret".to_string()),
            _ => None,
        });
        assert!(both.reporting_enabled());
    }

    #[test]
    fn test_overrides_applied() {
        let config = Config::from_lookup(|key| match key {
            "REPORTER_POLL_INTERVAL_SECS" => Some("1".to_string()),
            "REPORTER_HTTP_TIMEOUT_SECS" => Some("3".to_string()),
            "REPORTER_GPS_DEVICE" => Some("/dev/ttyUSB0".to_string()),
            "REPORTER_DETECTOR_PIN" => Some("17".to_string()),
            _ => None,
        });

        assert_eq!(config.poll_interval, Duration::from_secs(1));
        assert_eq!(config.http_timeout, Duration::from_secs(3));
        assert_eq!(config.gps_device, "/dev/ttyUSB0");
        assert_eq!(config.detector_pin, 17);
    }

    #[test]
    fn test_garbage_numeric_override_falls_back() {
        let config = Config::from_lookup(|key| match key {
            "REPORTER_POLL_INTERVAL_SECS" => Some("soon".to_string()),
            _ => None,
        });

        assert_eq!(config.poll_interval, Duration::from_secs(5));
    }
}
