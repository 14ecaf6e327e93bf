use std::sync::Arc;

use super::{generate_id, now_timestamp};
use crate::core::models::NewsletterSubscriber;
use crate::errors::{StorageError, SubscribeError};
use crate::storage::{CollectionStore, KeyValueStore};

/// Namespace key for stored subscriber emails.
pub const NEWSLETTER_SUBSCRIBERS: &str = "newsletterSubscribers";

/// Stores newsletter subscribers, keeping emails unique case-insensitively.
#[derive(Clone)]
pub struct NewsletterSubscriberRepository {
    collections: CollectionStore,
}

impl NewsletterSubscriberRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            collections: CollectionStore::new(store),
        }
    }

    /// Whether `email` is already subscribed, compared case-insensitively.
    /// Linear scan; the list stays small.
    pub fn email_exists(&self, email: &str) -> Result<bool, StorageError> {
        let collection = self
            .collections
            .load_or_init::<NewsletterSubscriber>(NEWSLETTER_SUBSCRIBERS)?;
        let needle = email.to_lowercase();
        Ok(collection
            .items
            .iter()
            .any(|subscriber| subscriber.email.to_lowercase() == needle))
    }

    /// Appends a new subscriber unless the email is already present.
    ///
    /// The existence check runs here even if the caller already checked, so
    /// calling `insert` directly cannot bypass the uniqueness rule. The check
    /// and the append are still two store operations with no lock between
    /// them; concurrent writers can slip a duplicate through. Accepted
    /// limitation.
    pub fn insert(&self, email: &str) -> Result<(), SubscribeError> {
        if self.email_exists(email)? {
            return Err(SubscribeError::AlreadySubscribed);
        }

        let mut collection = self
            .collections
            .load_or_init::<NewsletterSubscriber>(NEWSLETTER_SUBSCRIBERS)?;

        collection.push(NewsletterSubscriber {
            id: generate_id(),
            email: email.to_string(),
            created_at: now_timestamp(),
        });

        self.collections
            .save(NEWSLETTER_SUBSCRIBERS, &collection)?;
        Ok(())
    }

    /// All stored subscribers in insertion order.
    pub fn get_all(&self) -> Result<Vec<NewsletterSubscriber>, StorageError> {
        Ok(self
            .collections
            .load_or_init::<NewsletterSubscriber>(NEWSLETTER_SUBSCRIBERS)?
            .items)
    }

    pub(crate) fn backing(&self) -> &dyn KeyValueStore {
        self.collections.backing()
    }
}
