//! Option Variable Comprehensive Test Suite
//!
//! Exercises the typed store and its list views through the public API,
//! against both the in-memory and the preference-file backend.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test option_vars_comprehensive
//!
//! # List semantics only
//! cargo test --test option_vars_comprehensive list_ops::
//! ```

use std::sync::Arc;

use optionvars::{FileBackend, KeyValueBackend, MemoryBackend, OptionVars};

// Test modules
pub mod basic_ops;
pub mod errors;
pub mod persistence;

// =============================================================================
// SHARED TEST UTILITIES
// =============================================================================

/// Create a store over a fresh in-memory backend
pub fn create_store() -> OptionVars {
    OptionVars::new(Arc::new(MemoryBackend::new()))
}

/// Create a store and keep a handle on its backend for raw inspection
pub fn create_store_and_backend() -> (OptionVars, Arc<MemoryBackend>) {
    let backend = Arc::new(MemoryBackend::new());
    let store = OptionVars::new(backend.clone() as Arc<dyn KeyValueBackend>);
    (store, backend)
}

/// Create a store over a preference file in `dir`
pub fn create_file_store(dir: &tempfile::TempDir) -> OptionVars {
    let backend = FileBackend::open(dir.path().join("optionVars.json"))
        .expect("Failed to open preference file");
    OptionVars::new(Arc::new(backend))
}
