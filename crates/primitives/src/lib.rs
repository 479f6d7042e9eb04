//! Primitives layer for optionvars
//!
//! - [`OptionVars`]: typed, dictionary-like store over a preference backend
//! - [`OptionVarList`]: list read from the store, with an explicit
//!   append-and-persist operation
//! - [`OptionVar`]: value returned by reads
//!
//! All primitives are stateless facades over a `KeyValueBackend`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod option_var;
pub mod option_var_list;
pub mod option_vars;

pub use option_var::OptionVar;
pub use option_var_list::OptionVarList;
pub use option_vars::OptionVars;
