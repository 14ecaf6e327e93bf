/// Production webhook endpoint for contact-form delivery.
///
/// The endpoint's success semantics are conveyed out-of-band; see
/// [`crate::clients::webhook::WebhookGateway`] for how responses are
/// interpreted.
pub const WEBHOOK_ENDPOINT: &str =
    "https://hook.eu2.make.com/piaco7o4p14flv6amg5a1vm8qtsqyvjw";

/// Application configuration.
///
/// There is deliberately no environment-variable lookup here: the webhook
/// endpoint is a fixed literal in production, and anything else (a staging
/// hook, a test server) constructs the config explicitly.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub webhook_endpoint: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            webhook_endpoint: WEBHOOK_ENDPOINT.to_string(),
        }
    }
}
