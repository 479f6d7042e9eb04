//! # optionvars
//!
//! Typed, persistent option variables over a host application's preference
//! system, plus a process-wide environment exposing the host's scene state.
//!
//! ## Quick Start
//!
//! ```ignore
//! use optionvars::prelude::*;
//!
//! let vars = optionvars::option_vars();
//!
//! vars.set("test", "dooder")?;
//! vars.set("test", vec![1, 24, 7])?;
//!
//! // Appends go to the stored value only through append_and_persist
//! let mut list = vars.get("test")?.into_list().unwrap();
//! list.append_and_persist(9)?;
//! list.push(Scalar::Int(10)); // local copy only
//!
//! let env = Env::global();
//! env.set_time(12.0)?;
//! ```
//!
//! ## Layers
//!
//! - [`OptionVars`] - typed store; infers datatypes and validates lists
//! - [`OptionVarList`] - list read from the store, tagged with its key
//! - [`KeyValueBackend`] - untyped preference backend ([`MemoryBackend`],
//!   [`FileBackend`])
//! - [`Env`] - process-wide singleton over the store and a [`Host`]

#![warn(missing_docs)]

mod config;
mod env;
mod host;

pub mod prelude;

// Re-export main entry points
pub use config::{EnvConfig, HostConfig, CONFIG_ENV_VAR};
pub use env::{env, option_vars, Env, EnvBuilder};
pub use host::HeadlessHost;

// Re-export layers
pub use optionvars_core::{
    Error, Host, KeyValueBackend, Result, Scalar, ScalarKind, Stored, UpAxis, Value,
};
pub use optionvars_primitives::{OptionVar, OptionVarList, OptionVars};
pub use optionvars_storage::{FileBackend, MemoryBackend};
