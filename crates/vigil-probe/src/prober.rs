//! Health check probe logic.
//!
//! Issues a GET against one endpoint and classifies the outcome. An
//! attempt succeeds when the request completes without a transport
//! error and the status code is below 400; anything else consumes one
//! attempt from the budget.

use std::fmt;
use std::time::Duration;

use tracing::{debug, warn};

use vigil_core::retry::with_retry;
use vigil_core::{AuthMode, Endpoint, HealthVerdict};

/// Total attempts per endpoint. The second attempt fires immediately;
/// backoff is reserved for notification delivery.
const PROBE_ATTEMPTS: u32 = 2;

/// Header carrying the backend credential.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Why a single probe attempt failed.
#[derive(Debug)]
enum AttemptError {
    /// The request never completed (DNS, connect, timeout).
    Transport(reqwest::Error),
    /// The endpoint answered with a status >= 400.
    Status(reqwest::StatusCode),
}

impl fmt::Display for AttemptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttemptError::Transport(e) => write!(f, "network error: {e}"),
            AttemptError::Status(code) => write!(f, "status code {code}"),
        }
    }
}

/// Issues health probes over a shared HTTP client.
pub struct Prober {
    client: reqwest::Client,
}

impl Prober {
    /// Default per-request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(7);

    /// Build a prober with a capped request timeout, so a single hung
    /// request cannot stall the whole survey.
    pub fn new(timeout: Duration) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Reuse an existing client; the connection pool is shared with
    /// the caller.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Probe one endpoint and return its verdict.
    ///
    /// The API key is attached only for [`AuthMode::ApiKey`] endpoints;
    /// sites never receive it. Failures are logged and folded into the
    /// verdict, never propagated.
    pub async fn probe(&self, endpoint: &Endpoint, api_key: Option<&str>) -> HealthVerdict {
        let outcome = with_retry(PROBE_ATTEMPTS, Duration::ZERO, |attempt| {
            let request = self.build_request(endpoint, api_key);
            async move {
                match request.send().await {
                    Ok(resp) if resp.status().as_u16() < 400 => Ok(()),
                    Ok(resp) => {
                        let status = resp.status();
                        warn!(url = %endpoint.url, attempt, %status, "probe attempt failed");
                        Err(AttemptError::Status(status))
                    }
                    Err(e) => {
                        warn!(url = %endpoint.url, attempt, error = %e, "probe attempt failed");
                        Err(AttemptError::Transport(e))
                    }
                }
            }
        })
        .await;

        match outcome {
            Ok(()) => HealthVerdict::Healthy,
            Err(e) => {
                debug!(url = %endpoint.url, error = %e, "endpoint judged unhealthy");
                HealthVerdict::Unhealthy
            }
        }
    }

    fn build_request(&self, endpoint: &Endpoint, api_key: Option<&str>) -> reqwest::RequestBuilder {
        let mut request = self.client.get(&endpoint.url);
        if endpoint.auth == AuthMode::ApiKey {
            if let Some(key) = api_key {
                request = request.header(API_KEY_HEADER, key);
            }
        }
        request
    }
}
