use serde::{Deserialize, Serialize};

/// One persisted collection: the records for a single namespace plus an
/// advisory insertion counter.
///
/// `next_id` only ever increases and is never reused as a record id; record
/// ids are generated separately. Serialized field names are part of the
/// stored format and must not change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection<T> {
    pub items: Vec<T>,
    #[serde(rename = "nextId")]
    pub next_id: u64,
}

impl<T> Collection<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Appends a record and bumps the insertion counter.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.next_id += 1;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Field values of a submitted contact form. Doubles as the webhook request
/// body, so the serialized shape matches what the endpoint expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub message: String,
}

/// A stored contact message. Immutable once written; this core never updates
/// or deletes submissions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub message: String,
    pub created_at: String,
}

/// A stored newsletter subscriber. Emails are unique case-insensitively,
/// enforced at insert time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsletterSubscriber {
    pub id: String,
    pub email: String,
    pub created_at: String,
}
