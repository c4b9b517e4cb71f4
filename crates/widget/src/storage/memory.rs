use std::collections::HashMap;

use super::{KeyValueStore, StorageError};

/// In-memory key-value store.
///
/// An optional quota bounds the total size of keys plus values in bytes,
/// mimicking the capacity limit of browser storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryStore {
    /// Create an empty, unbounded store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store holding at most `quota` bytes.
    #[must_use]
    pub fn with_quota(quota: usize) -> Self {
        Self {
            items: HashMap::new(),
            quota: Some(quota),
        }
    }

    /// Seed `key` with `value`, bypassing the quota.
    #[must_use]
    pub fn with_item(mut self, key: &str, value: &str) -> Self {
        self.items.insert(key.to_string(), value.to_string());
        self
    }

    /// Total bytes used by keys and values.
    #[must_use]
    pub fn used_bytes(&self) -> usize {
        self.items.iter().map(|(k, v)| k.len() + v.len()).sum()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(quota) = self.quota {
            let replaced = self.items.get(key).map_or(0, |old| key.len() + old.len());
            let needed = self.used_bytes() - replaced + key.len() + value.len();
            if needed > quota {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    quota,
                });
            }
        }
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.items.remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get_item("cart").unwrap(), None);
        store.set_item("cart", "[]").unwrap();
        assert_eq!(store.get_item("cart").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_remove() {
        let mut store = MemoryStore::new().with_item("cart", "[]");
        store.remove_item("cart").unwrap();
        store.remove_item("cart").unwrap();
        assert_eq!(store.get_item("cart").unwrap(), None);
    }

    #[test]
    fn test_quota_exceeded() {
        let mut store = MemoryStore::with_quota(8);
        store.set_item("cart", "[]").unwrap();
        let err = store.set_item("cart", "[1,2,3]").unwrap_err();
        assert!(matches!(
            err,
            StorageError::QuotaExceeded {
                needed: 11,
                quota: 8,
                ..
            }
        ));
        // Failed write leaves the old value in place
        assert_eq!(store.get_item("cart").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_quota_counts_replaced_value_once() {
        let mut store = MemoryStore::with_quota(8);
        store.set_item("cart", "1234").unwrap();
        store.set_item("cart", "abcd").unwrap();
        assert_eq!(store.used_bytes(), 8);
    }
}
