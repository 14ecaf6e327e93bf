use thiserror::Error;

/// Failures of the local key/value store or of (de)serializing the records
/// kept in it.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read from storage: {0}")]
    ReadFailed(String),

    #[error("Failed to write to storage: {0}")]
    WriteFailed(String),

    #[error("Stored data is corrupt: {0}")]
    CorruptData(String),

    #[error("Failed to serialize record: {0}")]
    SerializeFailed(String),
}

/// Outcome of a newsletter insert that did not store a record.
///
/// `AlreadySubscribed` is a business rule, not a fault; everything else is a
/// wrapped [`StorageError`].
#[derive(Debug, Error)]
pub enum SubscribeError {
    #[error("Email is already subscribed")]
    AlreadySubscribed,

    #[error(transparent)]
    Storage(#[from] StorageError),
}
