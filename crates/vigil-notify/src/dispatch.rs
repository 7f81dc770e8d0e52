//! Notification delivery with a single retry and a fixed backoff.
//!
//! The two attempts form an explicit Attempt1 → Attempt2 → Terminal
//! sequence rather than a retry loop: the payload's attempt label is
//! rewritten between POSTs, and an encoding failure must escape
//! immediately instead of consuming the retry budget.

use std::time::Duration;

use tracing::{info, warn};

use crate::error::{DeliveryError, DispatchError};
use crate::notification::{FIRST_ATTEMPT, Notification, SECOND_ATTEMPT};

/// Total delivery attempts.
const DISPATCH_ATTEMPTS: u32 = 2;

/// Header carrying the notification-server credential.
const API_KEY_HEADER: &str = "X-API-Key";

/// Outcome of a single POST.
enum AttemptFailure {
    Encode(serde_json::Error),
    Delivery(DeliveryError),
}

/// Delivers composed notifications to the notification server.
pub struct Dispatcher {
    client: reqwest::Client,
    endpoint: Option<String>,
    api_key: Option<String>,
    backoff: Duration,
}

impl Dispatcher {
    /// Fixed wait before the second delivery attempt. Not exponential
    /// and without jitter.
    pub const DEFAULT_BACKOFF: Duration = Duration::from_secs(2);

    /// Build a dispatcher. Missing destination or credential is not an
    /// error until [`dispatch`](Self::dispatch) is called.
    pub fn new(
        client: reqwest::Client,
        endpoint: Option<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            client,
            endpoint,
            api_key,
            backoff: Self::DEFAULT_BACKOFF,
        }
    }

    /// Override the inter-attempt backoff (tests use a short value).
    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    /// Deliver `notification`, retrying once after the fixed backoff.
    ///
    /// The attempt label in the payload's `status` field is rewritten
    /// before each POST. Fails with [`DispatchError::ConfigMissing`],
    /// without a network attempt, when the destination or credential
    /// is not configured.
    pub async fn dispatch(&self, notification: &mut Notification) -> Result<(), DispatchError> {
        let (Some(endpoint), Some(api_key)) = (self.endpoint.as_deref(), self.api_key.as_deref())
        else {
            return Err(DispatchError::ConfigMissing);
        };

        notification.status = FIRST_ATTEMPT.to_string();
        let first = match self.post(endpoint, api_key, notification).await {
            Ok(()) => {
                info!("notification sent");
                return Ok(());
            }
            Err(AttemptFailure::Encode(e)) => return Err(DispatchError::Encode(e)),
            Err(AttemptFailure::Delivery(e)) => e,
        };
        warn!(error = %first, "first delivery attempt failed");

        tokio::time::sleep(self.backoff).await;

        notification.status = SECOND_ATTEMPT.to_string();
        match self.post(endpoint, api_key, notification).await {
            Ok(()) => {
                info!("notification sent on retry");
                Ok(())
            }
            Err(AttemptFailure::Encode(e)) => Err(DispatchError::Encode(e)),
            Err(AttemptFailure::Delivery(e)) => {
                warn!(error = %e, "second delivery attempt failed, giving up");
                Err(DispatchError::Delivery {
                    attempts: DISPATCH_ATTEMPTS,
                    source: e,
                })
            }
        }
    }

    async fn post(
        &self,
        endpoint: &str,
        api_key: &str,
        notification: &Notification,
    ) -> Result<(), AttemptFailure> {
        let body = serde_json::to_vec(notification).map_err(AttemptFailure::Encode)?;

        let response = self
            .client
            .post(endpoint)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, api_key)
            .body(body)
            .send()
            .await
            .map_err(|e| AttemptFailure::Delivery(DeliveryError::Transport(e)))?;

        let status = response.status();
        if status.as_u16() < 400 {
            Ok(())
        } else {
            Err(AttemptFailure::Delivery(DeliveryError::Status(status)))
        }
    }
}
