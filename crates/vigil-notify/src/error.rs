//! Dispatch error types.

use thiserror::Error;

/// Why a single delivery attempt failed.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The POST never completed (DNS, connect, timeout).
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The notification server answered with a status >= 400.
    #[error("received status code {0}")]
    Status(reqwest::StatusCode),
}

/// Errors surfaced by the notification dispatcher.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Destination URL or access credential absent from configuration;
    /// delivery is not attempted.
    #[error("notification server endpoint and/or API key missing")]
    ConfigMissing,

    /// The payload could not be encoded; fatal to the delivery.
    #[error("failed to encode notification: {0}")]
    Encode(#[from] serde_json::Error),

    /// Every delivery attempt failed; carries the final cause.
    #[error("failed to send notification after {attempts} attempts: {source}")]
    Delivery {
        attempts: u32,
        #[source]
        source: DeliveryError,
    },
}
