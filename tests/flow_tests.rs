use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use formgate::clients::{SubmissionGateway, SubmitOutcome};
use formgate::core::models::ContactForm;
use formgate::errors::StorageError;
use formgate::flows::{ContactFlow, FlowResult, NewsletterFlow, SubmissionState};
use formgate::repos::{ContactSubmissionRepository, NewsletterSubscriberRepository};
use formgate::storage::{KeyValueStore, MemoryStore};
use serde_json::json;

/// Gateway double with a scripted outcome.
struct StubGateway {
    succeed: bool,
}

#[async_trait]
impl SubmissionGateway for StubGateway {
    async fn submit(&self, _form: &ContactForm) -> SubmitOutcome {
        if self.succeed {
            SubmitOutcome {
                success: true,
                response: Some(json!({ "message": "ok" })),
                error: None,
            }
        } else {
            SubmitOutcome {
                success: false,
                response: None,
                error: Some("connection reset".to_string()),
            }
        }
    }
}

/// Store double that passes the availability probe but rejects collection
/// writes, to exercise the swallowed-mirror path.
struct MirrorRejectingStore {
    inner: MemoryStore,
}

impl MirrorRejectingStore {
    fn new() -> Self {
        Self {
            inner: MemoryStore::new(),
        }
    }
}

impl KeyValueStore for MirrorRejectingStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if key == "contactSubmissions" {
            return Err(StorageError::WriteFailed("quota exceeded".to_string()));
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key)
    }
}

/// Store double that rejects everything, so the probe reports unavailable.
struct DisabledStore;

impl KeyValueStore for DisabledStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::ReadFailed("storage disabled".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::WriteFailed("storage disabled".to_string()))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::WriteFailed("storage disabled".to_string()))
    }
}

fn jo() -> ContactForm {
    ContactForm {
        name: "Jo".to_string(),
        email: "jo@x.com".to_string(),
        company: None,
        message: "hi".to_string(),
    }
}

#[tokio::test]
async fn test_contact_submit_success_mirrors_locally() {
    // Scenario A: remote succeeds and storage is available
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let repo = ContactSubmissionRepository::new(Arc::clone(&store));
    let mut flow = ContactFlow::new(Arc::new(StubGateway { succeed: true }), repo.clone());

    let result = flow.submit(&jo()).await;

    assert_eq!(result, FlowResult::Success);
    assert_eq!(flow.state(), SubmissionState::Success);

    let stored = repo.get_all().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, "Jo");
    assert_eq!(stored[0].email, "jo@x.com");
    assert_eq!(stored[0].message, "hi");
}

#[tokio::test]
async fn test_contact_submit_remote_failure_skips_mirror() {
    // Scenario B: remote fails, so nothing is stored locally
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let repo = ContactSubmissionRepository::new(Arc::clone(&store));
    let mut flow = ContactFlow::new(Arc::new(StubGateway { succeed: false }), repo.clone());

    let result = flow.submit(&jo()).await;

    match result {
        FlowResult::Failed { message } => {
            assert_eq!(
                message,
                "Unable to send your message. Please try again later or contact us directly."
            );
        }
        FlowResult::Success => panic!("Expected failure"),
    }
    assert_eq!(flow.state(), SubmissionState::Failed);
    assert!(repo.get_all().unwrap().is_empty());
}

#[tokio::test]
async fn test_contact_mirror_failure_is_swallowed_but_observable() {
    // Remote is authoritative: a failed local mirror never downgrades success
    let store: Arc<dyn KeyValueStore> = Arc::new(MirrorRejectingStore::new());
    let repo = ContactSubmissionRepository::new(store);
    let fired = Arc::new(AtomicUsize::new(0));
    let fired_in_flow = Arc::clone(&fired);

    let mut flow = ContactFlow::new(Arc::new(StubGateway { succeed: true }), repo)
        .with_mirror_diagnostic(move |e| {
            assert!(matches!(e, StorageError::WriteFailed(_)));
            fired_in_flow.fetch_add(1, Ordering::SeqCst);
        });

    let result = flow.submit(&jo()).await;

    assert_eq!(result, FlowResult::Success);
    assert_eq!(flow.state(), SubmissionState::Success);
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_contact_flow_skips_mirror_when_storage_unavailable() {
    // Probe fails up front; the submission still goes through remotely
    let repo = ContactSubmissionRepository::new(Arc::new(DisabledStore));
    let mut flow = ContactFlow::new(Arc::new(StubGateway { succeed: true }), repo);

    let result = flow.submit(&jo()).await;
    assert_eq!(result, FlowResult::Success);
}

#[tokio::test]
async fn test_contact_flow_reset_returns_to_idle() {
    let repo = ContactSubmissionRepository::new(Arc::new(MemoryStore::new()));
    let mut flow = ContactFlow::new(Arc::new(StubGateway { succeed: true }), repo);

    assert_eq!(flow.state(), SubmissionState::Idle);
    flow.submit(&jo()).await;
    assert_eq!(flow.state(), SubmissionState::Success);

    flow.reset();
    assert_eq!(flow.state(), SubmissionState::Idle);
}

#[test]
fn test_newsletter_subscribe_twice_reports_already_subscribed() {
    // Scenario C: first subscribe stores, second is rejected without writing
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let repo = NewsletterSubscriberRepository::new(Arc::clone(&store));
    let mut flow = NewsletterFlow::new(repo.clone());

    assert_eq!(flow.subscribe("a@b.com"), FlowResult::Success);
    assert_eq!(repo.get_all().unwrap().len(), 1);

    flow.reset();
    match flow.subscribe("a@b.com") {
        FlowResult::Failed { message } => {
            assert_eq!(message, "This email is already subscribed to our newsletter.");
        }
        FlowResult::Success => panic!("Expected duplicate to be rejected"),
    }
    assert_eq!(flow.state(), SubmissionState::Failed);
    assert_eq!(repo.get_all().unwrap().len(), 1);
}

#[test]
fn test_newsletter_unavailable_storage_is_fatal() {
    // Local storage is the authoritative channel for the newsletter
    let repo = NewsletterSubscriberRepository::new(Arc::new(DisabledStore));
    let mut flow = NewsletterFlow::new(repo);

    match flow.subscribe("a@b.com") {
        FlowResult::Failed { message } => {
            assert_eq!(
                message,
                "Newsletter subscription is currently unavailable. Please try again later."
            );
        }
        FlowResult::Success => panic!("Expected failure"),
    }
    assert_eq!(flow.state(), SubmissionState::Failed);
}

#[test]
fn test_newsletter_storage_fault_maps_to_generic_message() {
    // Probe passes but the collection write fails mid-subscribe
    struct SubscribeRejectingStore {
        inner: MemoryStore,
    }

    impl KeyValueStore for SubscribeRejectingStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if key == "newsletterSubscribers" {
                return Err(StorageError::WriteFailed("quota exceeded".to_string()));
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.inner.remove(key)
        }
    }

    let repo = NewsletterSubscriberRepository::new(Arc::new(SubscribeRejectingStore {
        inner: MemoryStore::new(),
    }));
    let mut flow = NewsletterFlow::new(repo);

    match flow.subscribe("a@b.com") {
        FlowResult::Failed { message } => {
            assert_eq!(message, "There was an error subscribing. Please try again.");
        }
        FlowResult::Success => panic!("Expected failure"),
    }
}

#[tokio::test]
async fn test_contact_and_newsletter_flows_are_independent() {
    // Both flows share one store but touch disjoint namespaces
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let contacts = ContactSubmissionRepository::new(Arc::clone(&store));
    let subscribers = NewsletterSubscriberRepository::new(Arc::clone(&store));

    let mut contact_flow =
        ContactFlow::new(Arc::new(StubGateway { succeed: true }), contacts.clone());
    let mut newsletter_flow = NewsletterFlow::new(subscribers.clone());

    assert_eq!(contact_flow.submit(&jo()).await, FlowResult::Success);
    assert_eq!(newsletter_flow.subscribe("jo@x.com"), FlowResult::Success);

    assert_eq!(contacts.get_all().unwrap().len(), 1);
    assert_eq!(subscribers.get_all().unwrap().len(), 1);
}
