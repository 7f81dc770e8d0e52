//! vigild — scheduled endpoint health monitor.
//!
//! Probes the configured sites and backend servers once, sends an
//! aggregated alert when anything is unhealthy, and exits. Meant to be
//! fired by an external timer (cron, systemd timer); a non-zero exit
//! tells the scheduler that alert delivery itself is broken.
//!
//! # Usage
//!
//! ```text
//! SITES_TO_MONITOR=https://example.org,https://example.net \
//! SERVERS_TO_MONITOR=https://api.internal.example \
//! BACKEND_API_KEY=... \
//! NOTIFICATION_SERVER_ENDPOINT=https://notify.internal.example \
//! NOTIFICATION_API_KEY=... \
//! EMAIL_NOTIFICATION_RECIPIENTS=oncall@example.org \
//! vigild
//! ```

use std::time::Duration;

use clap::Parser;
use envconfig::Envconfig;
use tracing::info;

use vigil_core::MonitorConfig;
use vigil_notify::Dispatcher;
use vigil_probe::Prober;

#[derive(Parser)]
#[command(name = "vigild", about = "Scheduled endpoint health monitor")]
struct Cli {
    /// Per-request probe timeout in seconds.
    #[arg(long, default_value = "7")]
    probe_timeout: u64,

    /// Wait between the two notification delivery attempts, in seconds.
    #[arg(long, default_value = "2")]
    dispatch_backoff: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "info,vigild=debug,vigil_probe=debug,vigil_notify=debug"
                    .parse()
                    .unwrap()
            }),
        )
        .init();

    let cli = Cli::parse();
    let config = MonitorConfig::init_from_env()?;

    // One client per run: probes and the notification POSTs share the
    // connection pool and the request timeout cap.
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(cli.probe_timeout))
        .build()?;

    let prober = Prober::with_client(client.clone());
    let dispatcher = Dispatcher::new(
        client,
        config.notification_endpoint.clone(),
        config.notification_api_key.clone(),
    )
    .with_backoff(Duration::from_secs(cli.dispatch_backoff));

    let outcome = vigild::run_once(&config, &prober, &dispatcher).await?;
    info!("{outcome}");
    Ok(())
}
