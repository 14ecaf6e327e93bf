use std::sync::Arc;

use super::{generate_id, now_timestamp};
use crate::core::models::{ContactForm, ContactSubmission};
use crate::errors::StorageError;
use crate::storage::{CollectionStore, KeyValueStore};

/// Namespace key for stored contact messages.
pub const CONTACT_SUBMISSIONS: &str = "contactSubmissions";

/// Stores contact messages in the local collection store.
#[derive(Clone)]
pub struct ContactSubmissionRepository {
    collections: CollectionStore,
}

impl ContactSubmissionRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            collections: CollectionStore::new(store),
        }
    }

    /// Appends a new submission with a generated id and timestamp.
    ///
    /// Each insert is a single load / mutate / save against one namespace; no
    /// transaction spans other entities.
    pub fn insert(&self, form: &ContactForm) -> Result<(), StorageError> {
        let mut collection = self
            .collections
            .load_or_init::<ContactSubmission>(CONTACT_SUBMISSIONS)?;

        collection.push(ContactSubmission {
            id: generate_id(),
            name: form.name.clone(),
            email: form.email.clone(),
            company: form.company.clone(),
            message: form.message.clone(),
            created_at: now_timestamp(),
        });

        self.collections.save(CONTACT_SUBMISSIONS, &collection)
    }

    /// All stored submissions in insertion order. Inspection only; the
    /// submission flow never reads this back.
    pub fn get_all(&self) -> Result<Vec<ContactSubmission>, StorageError> {
        Ok(self
            .collections
            .load_or_init::<ContactSubmission>(CONTACT_SUBMISSIONS)?
            .items)
    }

    pub(crate) fn backing(&self) -> &dyn KeyValueStore {
        self.collections.backing()
    }
}
