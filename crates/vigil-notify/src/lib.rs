//! vigil-notify — alert composition and delivery.
//!
//! Builds the aggregated health notification from a survey result and
//! delivers it to the notification server with a single retry:
//!
//! ```text
//! SurveyResult ──compose()──▶ Notification
//!                                  │
//!                            dispatch(): POST "1st Attempt"
//!                                  │ status < 400 ⇒ done
//!                                  ▼
//!                            fixed backoff, relabel "2nd Attempt",
//!                            POST again ⇒ done | DispatchError
//! ```
//!
//! Delivery failures, once the retry is exhausted, escalate to the
//! caller; they are the invocation's failure signal.

pub mod compose;
pub mod dispatch;
pub mod error;
pub mod notification;

pub use compose::compose;
pub use dispatch::Dispatcher;
pub use error::{DeliveryError, DispatchError};
pub use notification::{Notification, Urgency};
