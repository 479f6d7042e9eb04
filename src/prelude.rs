//! Convenient imports for optionvars.
//!
//! ```ignore
//! use optionvars::prelude::*;
//!
//! let env = Env::builder().prefs_path("./optionVars.json").open()?;
//! env.option_vars().set("gridSpacing", 5)?;
//! ```

// Main entry points
pub use crate::env::{Env, EnvBuilder};
pub use crate::config::EnvConfig;

// Error handling
pub use crate::{Error, Result};

// Store
pub use crate::{OptionVar, OptionVarList, OptionVars};

// Core types
pub use crate::{Scalar, ScalarKind, UpAxis, Value};
