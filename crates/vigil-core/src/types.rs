//! Shared types used across Vigil crates.

use serde::{Deserialize, Serialize};

/// How a probe request authenticates against its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthMode {
    /// Public endpoint, no credential attached.
    None,
    /// Backend endpoint, authorized via the `X-API-Key` header.
    ApiKey,
}

/// A network-reachable URL subject to health probing.
///
/// Endpoints carry no persisted identity; they are rebuilt from
/// configuration on every run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    pub url: String,
    pub auth: AuthMode,
}

impl Endpoint {
    /// A public site, probed without credentials.
    pub fn site(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            auth: AuthMode::None,
        }
    }

    /// A backend server, probed with the API key attached.
    pub fn server(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            auth: AuthMode::ApiKey,
        }
    }
}

/// Health classification for one endpoint in one survey run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthVerdict {
    /// The endpoint answered below 400 within the attempt budget.
    Healthy,
    /// Every attempt ended in a transport error or a status >= 400.
    Unhealthy,
}

impl HealthVerdict {
    pub fn is_healthy(&self) -> bool {
        matches!(self, HealthVerdict::Healthy)
    }
}

/// Outcome of one full pass over all configured endpoints.
///
/// `unhealthy` preserves encounter order: sites before servers, list
/// order within each group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyResult {
    pub unhealthy: Vec<String>,
}

impl SurveyResult {
    pub fn all_healthy(&self) -> bool {
        self.unhealthy.is_empty()
    }
}
