use std::sync::Arc;

use tracing::warn;

use super::{CONTACT_SEND_FAILED, FlowResult, SubmissionState};
use crate::clients::SubmissionGateway;
use crate::core::models::ContactForm;
use crate::errors::StorageError;
use crate::repos::ContactSubmissionRepository;
use crate::storage::probe;

type MirrorDiagnostic = Box<dyn Fn(&StorageError) + Send + Sync>;

/// Contact-form submission flow.
///
/// The webhook is the authoritative channel: its failure fails the attempt
/// and skips local storage entirely. On webhook success the submission is
/// mirrored into the local repository as a best-effort secondary record — a
/// mirror failure is logged and swallowed, never downgrading the result.
pub struct ContactFlow {
    gateway: Arc<dyn SubmissionGateway>,
    repository: ContactSubmissionRepository,
    storage_available: bool,
    state: SubmissionState,
    mirror_diagnostic: Option<MirrorDiagnostic>,
}

impl ContactFlow {
    /// Probes storage availability once, up front; the result gates the local
    /// mirror for the flow's lifetime.
    pub fn new(
        gateway: Arc<dyn SubmissionGateway>,
        repository: ContactSubmissionRepository,
    ) -> Self {
        let storage_available = probe::is_available(repository.backing());
        if !storage_available {
            warn!("Local storage is not available; contact submissions will not be mirrored");
        }
        Self {
            gateway,
            repository,
            storage_available,
            state: SubmissionState::Idle,
            mirror_diagnostic: None,
        }
    }

    /// Registers an observer for swallowed mirror failures, so the
    /// suppression stays visible to diagnostics without affecting the
    /// submission result.
    pub fn with_mirror_diagnostic(
        mut self,
        diagnostic: impl Fn(&StorageError) + Send + Sync + 'static,
    ) -> Self {
        self.mirror_diagnostic = Some(Box::new(diagnostic));
        self
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Returns the flow to `Idle` after a terminal state.
    pub fn reset(&mut self) {
        self.state = SubmissionState::Idle;
    }

    /// Runs one submission: webhook first, then the opportunistic local
    /// mirror. Steps execute strictly in that order.
    pub async fn submit(&mut self, form: &ContactForm) -> FlowResult {
        self.state = SubmissionState::Submitting;

        let outcome = self.gateway.submit(form).await;
        if !outcome.success {
            self.state = SubmissionState::Failed;
            return FlowResult::failed(CONTACT_SEND_FAILED);
        }

        if self.storage_available {
            if let Err(e) = self.repository.insert(form) {
                warn!("Failed to save contact submission locally: {}", e);
                if let Some(diagnostic) = &self.mirror_diagnostic {
                    diagnostic(&e);
                }
            }
        }

        self.state = SubmissionState::Success;
        FlowResult::Success
    }
}
