use crate::error::StorageError;

/// Durable string key-value storage used for client-side state.
///
/// Values are opaque strings; callers own the serialization format.
pub trait KeyValueStore: Send + Sync {
    /// Get the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value under `key`.
    /// Returns Ok(true) if a value was removed.
    fn remove(&self, key: &str) -> Result<bool, StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<bool, StorageError> {
        (**self).remove(key)
    }
}

// In-memory implementation for testing
#[cfg(any(test, feature = "test-utils"))]
pub mod memory {
    use super::*;
    use std::collections::HashMap;
    use std::sync::RwLock;

    /// In-memory key-value store for testing.
    #[derive(Default)]
    pub struct InMemoryKeyValueStore {
        entries: RwLock<HashMap<String, String>>,
        writes: RwLock<usize>,
    }

    impl InMemoryKeyValueStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// Number of `set` calls made so far.
        pub fn write_count(&self) -> usize {
            *self.writes.read().unwrap()
        }
    }

    impl KeyValueStore for InMemoryKeyValueStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.entries.read().unwrap().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.entries
                .write()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            *self.writes.write().unwrap() += 1;
            Ok(())
        }

        fn remove(&self, key: &str) -> Result<bool, StorageError> {
            Ok(self.entries.write().unwrap().remove(key).is_some())
        }
    }

}
