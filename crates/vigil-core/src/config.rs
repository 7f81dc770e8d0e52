//! Environment-sourced monitor configuration.

use envconfig::Envconfig;

/// Configuration for one monitoring run, read from the environment and
/// handed to the orchestrator as an explicit value.
///
/// List-valued entries are comma-separated opaque strings; splitting is
/// this module's responsibility, URL well-formedness validation is not.
#[derive(Debug, Clone, Envconfig)]
pub struct MonitorConfig {
    #[envconfig(from = "SITES_TO_MONITOR", default = "")]
    pub sites: String,

    #[envconfig(from = "SERVERS_TO_MONITOR", default = "")]
    pub servers: String,

    #[envconfig(from = "BACKEND_API_KEY")]
    pub backend_api_key: Option<String>,

    #[envconfig(from = "NOTIFICATION_SERVER_ENDPOINT")]
    pub notification_endpoint: Option<String>,

    #[envconfig(from = "NOTIFICATION_API_KEY")]
    pub notification_api_key: Option<String>,

    #[envconfig(from = "EMAIL_NOTIFICATION_RECIPIENTS", default = "")]
    pub recipients: String,
}

impl MonitorConfig {
    /// Site URLs, probed without authentication.
    pub fn site_list(&self) -> Vec<String> {
        split_list(&self.sites)
    }

    /// Backend server URLs, probed with the API key attached.
    pub fn server_list(&self) -> Vec<String> {
        split_list(&self.servers)
    }

    /// Notification recipient addresses. An unset or empty variable
    /// yields no recipients.
    pub fn recipient_list(&self) -> Vec<String> {
        split_list(&self.recipients)
    }
}

/// Split a comma-separated value, trimming entries and dropping empty
/// ones, so an unset variable yields an empty group rather than a
/// single empty string.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(String::from)
        .collect()
}
