//! Webhook delivery client.
//!
//! Sends contact-form payloads to the automation webhook. Delivery policy is
//! a single attempt: no retry, no backoff, no timeout. The endpoint does not
//! follow conventional status-code semantics, so any completed HTTP exchange
//! counts as delivered and the body is only parsed opportunistically.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::{info, warn};

use crate::core::config::AppConfig;
use crate::core::models::ContactForm;

// No timeout on purpose: a hung request stalls only the submitting flow.
static HTTP_CLIENT: Lazy<Client> = Lazy::new(Client::new);

/// Result of a webhook submission attempt. Always produced — transport
/// failures are folded into `success: false` rather than surfaced as errors,
/// so callers branch on the flag.
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    pub success: bool,
    /// Parsed response body on success. Advisory; no schema is enforced.
    pub response: Option<Value>,
    /// Transport error description on failure.
    pub error: Option<String>,
}

impl SubmitOutcome {
    fn delivered(response: Value) -> Self {
        Self {
            success: true,
            response: Some(response),
            error: None,
        }
    }

    fn failed(error: String) -> Self {
        Self {
            success: false,
            response: None,
            error: Some(error),
        }
    }
}

/// Seam for form delivery, so flows can run against the real webhook, the
/// simulated one, or a test double.
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    async fn submit(&self, form: &ContactForm) -> SubmitOutcome;
}

/// Delivers forms to the automation webhook over HTTPS.
#[derive(Debug, Clone)]
pub struct WebhookGateway {
    endpoint: String,
}

impl WebhookGateway {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.webhook_endpoint.clone())
    }
}

impl Default for WebhookGateway {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

#[async_trait]
impl SubmissionGateway for WebhookGateway {
    async fn submit(&self, form: &ContactForm) -> SubmitOutcome {
        let attempt = async {
            let response = HTTP_CLIENT.post(&self.endpoint).json(form).send().await?;
            response.text().await
        };

        match attempt.await {
            Ok(body) => {
                // Status code ignored: reaching the endpoint is what counts.
                let response = serde_json::from_str::<Value>(&body)
                    .unwrap_or_else(|_| json!({ "message": body }));
                SubmitOutcome::delivered(response)
            }
            Err(e) => {
                warn!("Failed to send form data to webhook: {}", e);
                SubmitOutcome::failed(e.to_string())
            }
        }
    }
}

/// Local-development stand-in that reports success without touching the
/// network.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedGateway;

#[async_trait]
impl SubmissionGateway for SimulatedGateway {
    async fn submit(&self, form: &ContactForm) -> SubmitOutcome {
        info!("Simulating successful webhook call for {}", form.email);
        SubmitOutcome::delivered(json!({ "message": "Message received (simulated)" }))
    }
}
