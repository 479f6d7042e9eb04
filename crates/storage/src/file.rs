//! Preference-file backend
//!
//! Durable [`KeyValueBackend`] that keeps option variables in a JSON document:
//!
//! ```json
//! {
//!   "gridSpacing": { "scalar": { "int": 5 } },
//!   "recentFiles": { "array": [ { "string": "a.ma" }, { "string": "b.ma" } ] }
//! }
//! ```
//!
//! The whole document is loaded on open and held in memory. Every mutation is
//! applied to a copy, written to `<file>.tmp` and renamed over the original,
//! then committed to memory. A failed write leaves both the file and the
//! in-memory state unchanged.

use optionvars_core::{KeyValueBackend, Result, Scalar, Stored};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

type Document = BTreeMap<String, Stored>;

/// JSON preference file backend.
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
    data: RwLock<Document>,
}

impl FileBackend {
    /// Open the preference file at `path`.
    ///
    /// A missing file is an empty store; it is created on the first write.
    /// Parent directories are created as needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let data: Document = if path.exists() {
            let text = fs::read_to_string(&path)?;
            if text.trim().is_empty() {
                Document::new()
            } else {
                serde_json::from_str(&text)?
            }
        } else {
            Document::new()
        };

        debug!(path = %path.display(), keys = data.len(), "loaded preference file");
        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    /// Path of the preference file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Apply `change` to a copy of the document, persist it, then commit.
    fn mutate<F>(&self, change: F) -> Result<()>
    where
        F: FnOnce(&mut Document) -> Result<()>,
    {
        let mut data = self.data.write();
        let mut next = data.clone();
        change(&mut next)?;
        self.persist(&next)?;
        *data = next;
        Ok(())
    }

    fn persist(&self, doc: &Document) -> Result<()> {
        let text = serde_json::to_string_pretty(doc)?;
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, text)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), keys = doc.len(), "flushed preference file");
        Ok(())
    }
}

impl KeyValueBackend for FileBackend {
    fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.data.read().contains_key(key))
    }

    fn query(&self, key: &str) -> Result<Option<Stored>> {
        Ok(self.data.read().get(key).cloned())
    }

    fn write_scalar(&self, key: &str, value: Scalar) -> Result<()> {
        trace!(key, kind = %value.kind(), "write scalar");
        self.mutate(|doc| {
            doc.insert(key.to_string(), Stored::Scalar(value));
            Ok(())
        })
    }

    fn write_array_first(&self, key: &str, first: Scalar) -> Result<()> {
        trace!(key, kind = %first.kind(), "write array");
        self.mutate(|doc| {
            doc.insert(key.to_string(), Stored::Array(vec![first]));
            Ok(())
        })
    }

    fn append_array(&self, key: &str, element: Scalar) -> Result<()> {
        trace!(key, kind = %element.kind(), "append array");
        self.mutate(|doc| {
            let current = doc.remove(key);
            let updated = Stored::appended(current, key, element)?;
            doc.insert(key.to_string(), updated);
            Ok(())
        })
    }

    fn clear_array(&self, key: &str) -> Result<()> {
        trace!(key, "clear array");
        self.remove(key)
    }

    fn remove(&self, key: &str) -> Result<()> {
        if !self.data.read().contains_key(key) {
            return Ok(());
        }
        trace!(key, "remove");
        self.mutate(|doc| {
            doc.remove(key);
            Ok(())
        })
    }

    fn list_keys(&self) -> Result<Vec<String>> {
        Ok(self.data.read().keys().cloned().collect())
    }

    fn write_array(&self, key: &str, items: &[Scalar]) -> Result<()> {
        if items.is_empty() {
            return self.clear_array(key);
        }
        trace!(key, len = items.len(), "write array");
        self.mutate(|doc| {
            doc.insert(key.to_string(), Stored::Array(items.to_vec()));
            Ok(())
        })
    }
}
