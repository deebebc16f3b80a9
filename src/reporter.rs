//! Poll loop driving the detector, the GPS reader, and the notifier.
//!
//! One iteration is a single detector query: on a detection the current GPS
//! fix is fetched and reported; otherwise the area is clear. Iterations run
//! on a fixed interval until the shutdown future resolves, at which point the
//! device handles are released and the loop returns. Shutdown is the only way
//! out — there is no normal termination condition.

use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tracing::info;

use crate::devices::{Devices, GpsPort, ProximityDetector};
use crate::notifier::Notifier;

/// Message reported for every detection event.
const DETECTION_MESSAGE: &str = "object-detected";

/// Owns the device pair and the notifier for the lifetime of the process.
pub struct Reporter<D: ProximityDetector, P: GpsPort> {
    devices: Devices<D, P>,
    notifier: Notifier,
    poll_interval: Duration,
}

impl<D: ProximityDetector, P: GpsPort> Reporter<D, P> {
    pub fn new(devices: Devices<D, P>, notifier: Notifier, poll_interval: Duration) -> Self {
        Self {
            devices,
            notifier,
            poll_interval,
        }
    }

    /// Run one poll iteration.
    pub async fn check_object_detected(&mut self) {
        if self.devices.detector.object_detected() {
            let fix = self.devices.gps.read_fix();
            self.notifier
                .notify(DETECTION_MESSAGE, &fix.to_string())
                .await;
        } else {
            info!("Area is clear");
        }
    }

    /// Poll until `shutdown` resolves.
    ///
    /// The first iteration runs immediately; later ones follow at the poll
    /// interval regardless of which branch the previous iteration took. A
    /// slow datastore call delays the next tick rather than bursting.
    ///
    /// Consumes the reporter so the device handles are dropped, exactly once,
    /// when the loop exits.
    pub async fn run<F>(mut self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        let mut interval = tokio::time::interval(self.poll_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("Shutdown requested");
                    break;
                }
                _ = interval.tick() => {
                    self.check_object_detected().await;
                }
            }
        }
    }
}
