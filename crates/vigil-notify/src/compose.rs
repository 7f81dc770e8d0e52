//! Builds the notification payload from a survey result.

use chrono::Utc;

use vigil_core::SurveyResult;

use crate::notification::{Notification, Urgency};

/// Fixed labels identifying this channel to the notification server.
const NOTIFICATION_TYPE: &str = "Scheduled CRON";
const NOTIFICATION_SOURCE: &str = "Vigil Health Monitor";
const NOTIFICATION_SUBJECT: &str = "Health Monitor Notification";

/// Build the notification describing `result`.
///
/// The message body is a pure function of the unhealthy list; only the
/// id and the timestamp fields vary between calls. Timestamps are UTC
/// wall-clock at composition time.
pub fn compose(result: &SurveyResult, recipients: Vec<String>) -> Notification {
    let now = Utc::now();

    Notification {
        send_email: true,
        send_sms: true,
        urgency: if result.all_healthy() {
            Urgency::Low
        } else {
            Urgency::High
        },
        recipients,
        status: String::new(),
        id: format!("health-{}", now.timestamp()),
        kind: NOTIFICATION_TYPE.to_string(),
        source: NOTIFICATION_SOURCE.to_string(),
        time: now.format("%H:%M:%S").to_string(),
        date: now.format("%Y-%m-%d").to_string(),
        timezone: now.format("%Z").to_string(),
        subject: NOTIFICATION_SUBJECT.to_string(),
        message: message_body(result),
        password: String::new(),
    }
}

/// Render the human-readable summary: a header line plus one bullet
/// per unhealthy URL in survey order, or a clean bill of health. The
/// markup is rendered by the downstream messaging service.
fn message_body(result: &SurveyResult) -> String {
    if result.all_healthy() {
        return "<strong>All Endpoints Healthy.</strong><br/>".to_string();
    }

    let mut body = String::from("<strong>Unhealthy Endpoints:</strong><br/>");
    for url in &result.unhealthy {
        body.push_str("• ");
        body.push_str(url);
        body.push_str("<br/>");
    }
    body
}
