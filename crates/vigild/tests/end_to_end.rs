//! End-to-end regression tests for a full monitoring run.
//!
//! Drives `run_once` against in-process HTTP fixtures standing in for
//! the monitored endpoints and the notification server.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::extract::{Json, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use serde_json::Value;

use vigil_core::MonitorConfig;
use vigil_notify::{DispatchError, Dispatcher};
use vigil_probe::Prober;
use vigild::{COMPLETION_MESSAGE, run_once};

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/")
}

/// Monitored-endpoint fixture: fixed status, counted hits.
async fn endpoint_fixture(status: StatusCode) -> (String, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let router = Router::new().route(
        "/",
        get(move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                status
            }
        }),
    );
    (serve(router).await, hits)
}

/// Backend-server fixture: healthy only when the probe key arrives.
async fn keyed_endpoint_fixture(expected: &'static str) -> String {
    let router = Router::new().route(
        "/",
        get(move |headers: HeaderMap| async move {
            match headers.get("x-api-key") {
                Some(value) if value == expected => StatusCode::OK,
                _ => StatusCode::UNAUTHORIZED,
            }
        }),
    );
    serve(router).await
}

/// Notification-server fixture: answers `statuses` in order (repeating
/// the last), records every body.
#[derive(Clone)]
struct NotifyFixture {
    hits: Arc<AtomicUsize>,
    bodies: Arc<Mutex<Vec<Value>>>,
    statuses: Arc<Vec<StatusCode>>,
}

async fn notify_fixture(statuses: Vec<StatusCode>) -> (String, NotifyFixture) {
    let fixture = NotifyFixture {
        hits: Arc::new(AtomicUsize::new(0)),
        bodies: Arc::new(Mutex::new(Vec::new())),
        statuses: Arc::new(statuses),
    };

    async fn record(
        State(fixture): State<NotifyFixture>,
        Json(body): Json<Value>,
    ) -> StatusCode {
        let n = fixture.hits.fetch_add(1, Ordering::SeqCst);
        fixture.bodies.lock().unwrap().push(body);
        *fixture
            .statuses
            .get(n)
            .unwrap_or_else(|| fixture.statuses.last().unwrap())
    }

    let router = Router::new()
        .route("/", post(record))
        .with_state(fixture.clone());
    (serve(router).await, fixture)
}

fn config(sites: String, servers: String, notify_url: Option<String>) -> MonitorConfig {
    MonitorConfig {
        sites,
        servers,
        backend_api_key: Some("probe-key".to_string()),
        notification_endpoint: notify_url,
        notification_api_key: Some("notify-key".to_string()),
        recipients: "oncall@example.test".to_string(),
    }
}

fn harness(config: &MonitorConfig) -> (Prober, Dispatcher) {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();
    let prober = Prober::with_client(client.clone());
    let dispatcher = Dispatcher::new(
        client,
        config.notification_endpoint.clone(),
        config.notification_api_key.clone(),
    )
    .with_backoff(Duration::from_millis(50));
    (prober, dispatcher)
}

#[tokio::test]
async fn all_healthy_run_skips_notification() {
    let (site, _) = endpoint_fixture(StatusCode::OK).await;
    let server = keyed_endpoint_fixture("probe-key").await;
    let (notify_url, notify) = notify_fixture(vec![StatusCode::OK]).await;

    let config = config(site, server, Some(notify_url));
    let (prober, dispatcher) = harness(&config);

    let outcome = run_once(&config, &prober, &dispatcher).await.unwrap();
    assert_eq!(outcome, COMPLETION_MESSAGE);
    assert_eq!(notify.hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn unhealthy_server_sends_high_urgency_alert() {
    let (site, site_hits) = endpoint_fixture(StatusCode::OK).await;
    let (server, server_hits) = endpoint_fixture(StatusCode::SERVICE_UNAVAILABLE).await;
    let (notify_url, notify) = notify_fixture(vec![StatusCode::OK]).await;

    let config = config(site, server.clone(), Some(notify_url));
    let (prober, dispatcher) = harness(&config);

    let outcome = run_once(&config, &prober, &dispatcher).await.unwrap();
    assert_eq!(outcome, COMPLETION_MESSAGE);

    // The healthy site needs one probe, the failing server both.
    assert_eq!(site_hits.load(Ordering::SeqCst), 1);
    assert_eq!(server_hits.load(Ordering::SeqCst), 2);

    assert_eq!(notify.hits.load(Ordering::SeqCst), 1);
    let bodies = notify.bodies.lock().unwrap();
    assert_eq!(bodies[0]["urgency"], "high");
    assert_eq!(bodies[0]["status"], "1st Attempt");
    assert_eq!(bodies[0]["recipient"][0], "oncall@example.test");
    assert!(
        bodies[0]["message"]
            .as_str()
            .unwrap()
            .contains(server.as_str())
    );
}

#[tokio::test]
async fn persistent_dispatch_failure_fails_the_run() {
    let (site, _) = endpoint_fixture(StatusCode::SERVICE_UNAVAILABLE).await;
    let (notify_url, notify) =
        notify_fixture(vec![StatusCode::INTERNAL_SERVER_ERROR]).await;

    let config = config(site, String::new(), Some(notify_url));
    let (prober, dispatcher) = harness(&config);

    let err = run_once(&config, &prober, &dispatcher).await.unwrap_err();
    assert!(matches!(err, DispatchError::Delivery { attempts: 2, .. }));

    assert_eq!(notify.hits.load(Ordering::SeqCst), 2);
    let bodies = notify.bodies.lock().unwrap();
    assert_eq!(bodies[0]["status"], "1st Attempt");
    assert_eq!(bodies[1]["status"], "2nd Attempt");
}

#[tokio::test]
async fn missing_notification_config_fails_without_delivery() {
    let (site, _) = endpoint_fixture(StatusCode::SERVICE_UNAVAILABLE).await;

    let mut config = config(site, String::new(), None);
    config.notification_api_key = None;
    let (prober, dispatcher) = harness(&config);

    let err = run_once(&config, &prober, &dispatcher).await.unwrap_err();
    assert!(matches!(err, DispatchError::ConfigMissing));
}
