use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::KeyValueStore;
use crate::core::models::Collection;
use crate::errors::StorageError;

/// Namespaced collection persistence over a [`KeyValueStore`].
///
/// Each namespace holds one serialized [`Collection`]. The store is
/// append-only from this layer's point of view: records are added via a
/// load / push / save cycle and never updated or deleted.
#[derive(Clone)]
pub struct CollectionStore {
    store: Arc<dyn KeyValueStore>,
}

impl CollectionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// The underlying key/value store.
    pub fn backing(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    /// Loads the collection at `namespace`, creating and persisting an empty
    /// one on first access.
    ///
    /// A present-but-unparseable value is reported as
    /// [`StorageError::CorruptData`] rather than silently reset; the caller
    /// decides what a corrupt namespace means.
    pub fn load_or_init<T>(&self, namespace: &str) -> Result<Collection<T>, StorageError>
    where
        T: Serialize + DeserializeOwned,
    {
        match self.store.get(namespace)? {
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| StorageError::CorruptData(format!("{namespace}: {e}"))),
            None => {
                let fresh = Collection::new();
                self.save(namespace, &fresh)?;
                Ok(fresh)
            }
        }
    }

    /// Serializes `collection` and overwrites the value at `namespace`.
    pub fn save<T>(&self, namespace: &str, collection: &Collection<T>) -> Result<(), StorageError>
    where
        T: Serialize,
    {
        let raw = serde_json::to_string(collection)
            .map_err(|e| StorageError::SerializeFailed(format!("{namespace}: {e}")))?;
        self.store.set(namespace, &raw)
    }
}
