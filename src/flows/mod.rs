//! Per-form submission flows.
//!
//! Each form owns an independent state machine: `Idle -> Submitting ->
//! Success | Failed`, with an explicit `reset()` back to `Idle` ("send
//! another message"). The two flows touch disjoint namespaces and may run
//! concurrently without interference.

pub mod contact;
pub mod newsletter;

pub use contact::ContactFlow;
pub use newsletter::NewsletterFlow;

/// Where a form currently is in its submission lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Success,
    Failed,
}

/// User-visible outcome of one submission attempt. `Failed` carries the
/// inline message to show next to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowResult {
    Success,
    Failed { message: String },
}

impl FlowResult {
    fn failed(message: &str) -> Self {
        Self::Failed {
            message: message.to_string(),
        }
    }
}

pub(crate) const CONTACT_SEND_FAILED: &str =
    "Unable to send your message. Please try again later or contact us directly.";
pub(crate) const NEWSLETTER_UNAVAILABLE: &str =
    "Newsletter subscription is currently unavailable. Please try again later.";
pub(crate) const ALREADY_SUBSCRIBED: &str =
    "This email is already subscribed to our newsletter.";
pub(crate) const NEWSLETTER_FAILED: &str =
    "There was an error subscribing. Please try again.";
