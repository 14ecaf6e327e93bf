//! Clients for external services.

pub mod webhook;

pub use webhook::{SimulatedGateway, SubmissionGateway, SubmitOutcome, WebhookGateway};
