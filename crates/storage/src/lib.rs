//! Preference backends for optionvars
//!
//! This crate implements the [`KeyValueBackend`] capability:
//! - MemoryBackend: HashMap behind a parking_lot RwLock, nothing on disk
//! - FileBackend: JSON preference file, rewritten after every mutation
//!
//! [`KeyValueBackend`]: optionvars_core::KeyValueBackend

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod file;
pub mod memory;

pub use file::FileBackend;
pub use memory::MemoryBackend;
