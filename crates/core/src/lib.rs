//! Core types for optionvars
//!
//! This crate defines the foundational types shared by every layer:
//! - [`Value`]: runtime value offered to the store
//! - [`Scalar`] / [`ScalarKind`]: the storable subset
//! - [`Stored`] / [`KeyValueBackend`]: the untyped preference backend capability
//! - [`Host`] / [`UpAxis`]: host scene-state capability
//! - [`Error`] / [`Result`]: error handling

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod error;
pub mod host;
pub mod value;

pub use backend::{KeyValueBackend, Stored};
pub use error::{Error, Result};
pub use host::{Host, UpAxis};
pub use value::{Scalar, ScalarKind, Value};
