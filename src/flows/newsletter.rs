use tracing::error;

use super::{
    ALREADY_SUBSCRIBED, FlowResult, NEWSLETTER_FAILED, NEWSLETTER_UNAVAILABLE, SubmissionState,
};
use crate::errors::SubscribeError;
use crate::repos::NewsletterSubscriberRepository;
use crate::storage::probe;

/// Newsletter subscription flow.
///
/// There is no remote channel here: local storage is authoritative, so an
/// unavailable store or a failed insert fails the attempt outright.
pub struct NewsletterFlow {
    repository: NewsletterSubscriberRepository,
    storage_available: bool,
    state: SubmissionState,
}

impl NewsletterFlow {
    /// Probes storage availability once, up front.
    pub fn new(repository: NewsletterSubscriberRepository) -> Self {
        let storage_available = probe::is_available(repository.backing());
        Self {
            repository,
            storage_available,
            state: SubmissionState::Idle,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Returns the flow to `Idle` after a terminal state.
    pub fn reset(&mut self) {
        self.state = SubmissionState::Idle;
    }

    /// Runs one subscription attempt.
    pub fn subscribe(&mut self, email: &str) -> FlowResult {
        self.state = SubmissionState::Submitting;

        if !self.storage_available {
            self.state = SubmissionState::Failed;
            return FlowResult::failed(NEWSLETTER_UNAVAILABLE);
        }

        match self.repository.insert(email) {
            Ok(()) => {
                self.state = SubmissionState::Success;
                FlowResult::Success
            }
            Err(SubscribeError::AlreadySubscribed) => {
                self.state = SubmissionState::Failed;
                FlowResult::failed(ALREADY_SUBSCRIBED)
            }
            Err(SubscribeError::Storage(e)) => {
                error!("Newsletter subscription error: {}", e);
                self.state = SubmissionState::Failed;
                FlowResult::failed(NEWSLETTER_FAILED)
            }
        }
    }
}
