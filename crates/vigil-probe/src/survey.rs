//! One full pass over all configured endpoints.

use tracing::info;

use vigil_core::{Endpoint, SurveyResult};

use crate::prober::Prober;

/// Probe every site (unauthenticated), then every server (with the API
/// key), strictly sequentially, and collect the unhealthy URLs in
/// encounter order.
///
/// An empty group is trivially healthy; probe failures never abort the
/// pass.
pub async fn survey(
    prober: &Prober,
    sites: &[String],
    servers: &[String],
    api_key: Option<&str>,
) -> SurveyResult {
    let mut unhealthy = Vec::new();

    for url in sites {
        let endpoint = Endpoint::site(url.clone());
        if !prober.probe(&endpoint, None).await.is_healthy() {
            unhealthy.push(endpoint.url);
        }
    }

    for url in servers {
        let endpoint = Endpoint::server(url.clone());
        if !prober.probe(&endpoint, api_key).await.is_healthy() {
            unhealthy.push(endpoint.url);
        }
    }

    let result = SurveyResult { unhealthy };
    if result.all_healthy() {
        info!(
            sites = sites.len(),
            servers = servers.len(),
            "survey complete: all endpoints healthy"
        );
    } else {
        info!(
            unhealthy = result.unhealthy.len(),
            "survey complete: unhealthy endpoints found"
        );
    }
    result
}
