//! Go code scaffolding for chat bot actions.
//!
//! An action is one Go source file under `cmd/actions/` implementing the
//! bot's `Action` interface, plus one constructor-call entry in the literal
//! table in `cmd/actions/actions.go`. This crate derives the identifiers,
//! renders the action file, and splices the registry entry.

mod error;
mod naming;
mod registry;

pub mod files;
pub mod paths;

pub use error::{Error, Result};
pub use naming::ActionNames;
pub use registry::ActionsRegistry;
