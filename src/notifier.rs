//! Detection reporting to the remote datastore.
//!
//! Every detection is logged locally; if a datastore URL and auth token are
//! configured, it is additionally PUT to the datastore as a timestamped JSON
//! payload. Network failures are logged and swallowed — a detector that keeps
//! polling matters more than a report that got through.

use std::time::Duration;

use chrono::Utc;
use reqwest::header::CONTENT_TYPE;
use tracing::{info, warn};

use crate::config::Config;
use crate::model::NotificationPayload;

/// Header carrying the datastore auth token.
const AUTH_HEADER: &str = "X-Auth-Token";

/// Content type the datastore expects for the JSON body.
const PAYLOAD_CONTENT_TYPE: &str = "text/json";

/// Formats detection payloads and reports them over HTTP.
#[derive(Clone)]
pub struct Notifier {
    client: reqwest::Client,
    server: Option<String>,
    auth_token: Option<String>,
}

impl Notifier {
    /// Create a notifier.
    ///
    /// `server` and `auth_token` are both required for the network path; if
    /// either is absent the notifier degrades to local-only logging. The
    /// timeout bounds each PUT round trip.
    pub fn new(
        server: Option<String>,
        auth_token: Option<String>,
        http_timeout: Duration,
    ) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(http_timeout).build()?;

        if server.is_none() || auth_token.is_none() {
            info!("SERVER or AUTH_TOKEN not set; reporting locally only");
        }

        Ok(Self {
            client,
            server,
            auth_token,
        })
    }

    /// Create a notifier from the runtime configuration.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Self::new(
            config.server.clone(),
            config.auth_token.clone(),
            config.http_timeout,
        )
    }

    /// Report one detection event.
    ///
    /// The message and location are always logged locally. With a datastore
    /// configured, exactly one PUT is issued carrying the timestamped JSON
    /// payload; its status and body are logged and any failure ends here —
    /// nothing is retried and nothing propagates to the poll loop.
    pub async fn notify(&self, message: &str, location: &str) {
        info!(%message, %location, "Close call");

        let (Some(server), Some(token)) = (&self.server, &self.auth_token) else {
            return;
        };

        let payload = NotificationPayload::new(message, location, Utc::now());
        let body = match serde_json::to_string(&payload) {
            Ok(body) => body,
            Err(e) => {
                warn!(error = %e, "Failed to serialize payload");
                return;
            }
        };

        let result = self
            .client
            .put(server)
            .header(AUTH_HEADER, token)
            .header(CONTENT_TYPE, PAYLOAD_CONTENT_TYPE)
            .body(body)
            .send()
            .await;

        match result {
            Ok(response) => {
                let status = response.status().as_u16();
                let body = response.text().await.unwrap_or_default();
                info!(status, body = %body, "Datastore called");
            }
            Err(e) => {
                warn!(error = %e, "Datastore call failed");
            }
        }
    }
}
