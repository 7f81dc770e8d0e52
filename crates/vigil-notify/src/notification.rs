//! The notification payload sent to the messaging service.

use serde::{Deserialize, Serialize};

/// Delivery-attempt labels written into the `status` wire field.
pub const FIRST_ATTEMPT: &str = "1st Attempt";
pub const SECOND_ATTEMPT: &str = "2nd Attempt";

/// Notification urgency, derived from the survey outcome.
///
/// `Low` if and only if every probed endpoint was healthy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    High,
}

/// The alert payload, serialized verbatim for the notification server.
///
/// Field tags are the wire contract and must not change. `password`
/// is part of that contract but is never populated with a secret; it
/// stays empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    #[serde(rename = "sendEmail")]
    pub send_email: bool,
    #[serde(rename = "sendSms")]
    pub send_sms: bool,
    pub urgency: Urgency,
    #[serde(rename = "recipient")]
    pub recipients: Vec<String>,
    /// Delivery-attempt label, rewritten before each POST.
    pub status: String,
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub source: String,
    pub time: String,
    pub date: String,
    pub timezone: String,
    pub subject: String,
    pub message: String,
    pub password: String,
}
