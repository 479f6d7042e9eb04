//! In-process preference backend
//!
//! Keeps every option variable in a `HashMap` behind a `parking_lot::RwLock`.
//! Nothing survives the process. Used for headless sessions and tests.

use optionvars_core::{KeyValueBackend, Result, Scalar, Stored};
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::trace;

/// In-memory [`KeyValueBackend`].
#[derive(Debug, Default)]
pub struct MemoryBackend {
    data: RwLock<HashMap<String, Stored>>,
}

impl MemoryBackend {
    /// Create an empty backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Check if nothing is stored
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}

impl KeyValueBackend for MemoryBackend {
    fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.data.read().contains_key(key))
    }

    fn query(&self, key: &str) -> Result<Option<Stored>> {
        Ok(self.data.read().get(key).cloned())
    }

    fn write_scalar(&self, key: &str, value: Scalar) -> Result<()> {
        trace!(key, kind = %value.kind(), "write scalar");
        self.data
            .write()
            .insert(key.to_string(), Stored::Scalar(value));
        Ok(())
    }

    fn write_array_first(&self, key: &str, first: Scalar) -> Result<()> {
        trace!(key, kind = %first.kind(), "write array");
        self.data
            .write()
            .insert(key.to_string(), Stored::Array(vec![first]));
        Ok(())
    }

    fn append_array(&self, key: &str, element: Scalar) -> Result<()> {
        trace!(key, kind = %element.kind(), "append array");
        let mut data = self.data.write();
        let current = data.remove(key);
        // Restore the old value if the append is rejected.
        match Stored::appended(current.clone(), key, element) {
            Ok(updated) => {
                data.insert(key.to_string(), updated);
                Ok(())
            }
            Err(e) => {
                if let Some(current) = current {
                    data.insert(key.to_string(), current);
                }
                Err(e)
            }
        }
    }

    fn clear_array(&self, key: &str) -> Result<()> {
        trace!(key, "clear array");
        self.data.write().remove(key);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        trace!(key, "remove");
        self.data.write().remove(key);
        Ok(())
    }

    fn list_keys(&self) -> Result<Vec<String>> {
        Ok(self.data.read().keys().cloned().collect())
    }

    fn write_array(&self, key: &str, items: &[Scalar]) -> Result<()> {
        if items.is_empty() {
            return self.clear_array(key);
        }
        trace!(key, len = items.len(), "write array");
        self.data
            .write()
            .insert(key.to_string(), Stored::Array(items.to_vec()));
        Ok(())
    }
}
