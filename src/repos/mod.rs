//! Typed repositories over the namespaced collection store, one per entity
//! kind.

pub mod contact;
pub mod newsletter;

use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

pub use contact::ContactSubmissionRepository;
pub use newsletter::NewsletterSubscriberRepository;

/// Generates an opaque record id: a v7 UUID, i.e. a millisecond timestamp
/// plus random bits. Collision resistance is probabilistic; collisions are
/// not detected downstream.
pub(crate) fn generate_id() -> String {
    format!("id-{}", Uuid::now_v7())
}

/// Current time as an ISO-8601 string with millisecond precision.
pub(crate) fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
