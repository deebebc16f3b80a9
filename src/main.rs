//! Close-call reporter.
//!
//! # Overview
//!
//! Polls an infrared break-beam detector and reports detection events with a
//! GPS fix to a remote HTTP datastore.
//!
//! # Lifecycle
//!
//! 1. Validate the hardware platform (fatal if unsupported)
//! 2. Configure the sensor handles (UART/GPIO failures are soft)
//! 3. Poll on a fixed interval until interrupted
//! 4. Release the handles and exit with code 1
//!
//! # Environment
//!
//! - `SERVER` - datastore URL for detection PUTs
//! - `AUTH_TOKEN` - value for the `X-Auth-Token` header
//!
//! Both are optional; leaving either unset disables remote reporting.

use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use close_call_reporter::config::Config;
use close_call_reporter::devices::{Devices, GpioProximityDetector, UartGpsPort};
use close_call_reporter::notifier::Notifier;
use close_call_reporter::platform::Platform;
use close_call_reporter::reporter::Reporter;

/// Exit code after an interrupt-triggered shutdown.
const EXIT_INTERRUPTED: i32 = 1;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing with environment filter
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("close_call_reporter=info".parse()?))
        .init();

    // This program only runs on the boards its wiring assumes. Fatal, and
    // checked before any device handle is constructed.
    let platform = match Platform::detect() {
        Ok(platform) => platform,
        Err(e) => {
            error!(error = %e, "Unsupported platform");
            std::process::exit(e.exit_code());
        }
    };

    let config = Config::from_env();

    info!(
        ?platform,
        gps_device = %config.gps_device,
        poll_secs = config.poll_interval.as_secs(),
        reporting = config.reporting_enabled(),
        "Starting close-call reporter"
    );

    // Sensor setup failures are soft: a reporter without GPS (or even without
    // a working detector) keeps polling and logging.
    let detector = GpioProximityDetector::open(&config.gpio_chip, config.detector_pin);
    let port = UartGpsPort::open(&config.gps_device, config.gps_baud);
    let devices = Devices::new(detector, port);

    let notifier = Notifier::from_config(&config)?;
    let reporter = Reporter::new(devices, notifier, config.poll_interval);

    info!("Polling for objects");

    reporter
        .run(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!(error = %e, "Failed to listen for interrupt signal");
                std::future::pending::<()>().await;
            }
        })
        .await;

    // The interrupt is the only way out of the loop; the device handles were
    // released when the reporter dropped.
    info!("Shut down");
    std::process::exit(EXIT_INTERRUPTED);
}
