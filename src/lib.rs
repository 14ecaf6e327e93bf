/// formgate - the persistence and form-submission core of the HBS Automations site.
///
/// This crate implements the two submission pipelines behind the marketing
/// site's forms:
/// 1. The contact form, delivered to an automation webhook and opportunistically
///    mirrored into local storage
/// 2. The newsletter signup, stored locally with a case-insensitive uniqueness
///    check on the email
///
/// # Architecture
///
/// The system uses:
/// - A `KeyValueStore` trait with in-memory and file-backed implementations
/// - Namespaced `{items, nextId}` collections persisted as single JSON documents
/// - reqwest for webhook delivery (single attempt, status code ignored)
/// - Tracing for structured logging
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use formgate::clients::WebhookGateway;
/// use formgate::core::models::ContactForm;
/// use formgate::flows::{ContactFlow, FlowResult};
/// use formgate::repos::ContactSubmissionRepository;
/// use formgate::storage::FileStore;
///
/// #[tokio::main]
/// async fn main() {
///     formgate::setup_logging();
///
///     let store = Arc::new(FileStore::new("./data"));
///     let repository = ContactSubmissionRepository::new(store);
///     let gateway = Arc::new(WebhookGateway::default());
///     let mut flow = ContactFlow::new(gateway, repository);
///
///     let result = flow
///         .submit(&ContactForm {
///             name: "Jo".into(),
///             email: "jo@example.com".into(),
///             company: None,
///             message: "Hi".into(),
///         })
///         .await;
///
///     match result {
///         FlowResult::Success => println!("Message sent"),
///         FlowResult::Failed { message } => eprintln!("{message}"),
///     }
/// }
/// ```
// Module declarations
pub mod clients;
pub mod core;
pub mod errors;
pub mod flows;
pub mod repos;
pub mod storage;

/// Configure structured logging for whatever hosts this core.
///
/// Sets up tracing-subscriber with an env-filter (`RUST_LOG`, defaulting to
/// `info`). Call once at startup.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
