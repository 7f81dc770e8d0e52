//! vigild — one monitoring run, from survey to terminal outcome.
//!
//! The orchestration lives in this library target so integration tests
//! can drive a complete run; the binary wires configuration, logging,
//! and the HTTP client around [`run_once`].
//!
//! ```text
//! Idle ──▶ Surveying ──all healthy──▶ Done ("Health check completed")
//!              │
//!              └─unhealthy─▶ Notifying ──▶ Done | Failed(DispatchError)
//! ```
//!
//! A dispatch failure is the invocation's failure signal: it reaches
//! the external scheduler as a non-zero exit so persistent breakage of
//! the alert channel is itself observable.

use tracing::{error, info};

use vigil_core::MonitorConfig;
use vigil_notify::{DispatchError, Dispatcher, compose};
use vigil_probe::{Prober, survey};

/// Completion message returned to the invocation trigger on success.
pub const COMPLETION_MESSAGE: &str = "Health check completed";

/// Run one full survey-and-alert pass.
///
/// The notification is composed and dispatched only when at least one
/// endpoint is unhealthy.
pub async fn run_once(
    config: &MonitorConfig,
    prober: &Prober,
    dispatcher: &Dispatcher,
) -> Result<&'static str, DispatchError> {
    let sites = config.site_list();
    let servers = config.server_list();

    info!(?sites, "monitoring sites");
    info!(?servers, "monitoring servers");

    let result = survey(prober, &sites, &servers, config.backend_api_key.as_deref()).await;

    if result.all_healthy() {
        info!("all endpoints healthy - notification not sent");
        return Ok(COMPLETION_MESSAGE);
    }

    let mut notification = compose(&result, config.recipient_list());
    match dispatcher.dispatch(&mut notification).await {
        Ok(()) => Ok(COMPLETION_MESSAGE),
        Err(e) => {
            error!(error = %e, "failed to deliver health notification");
            Err(e)
        }
    }
}
