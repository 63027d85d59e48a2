//! Core utilities and types for the actionsmith generator.
//!
//! This crate provides the file-writing primitives and string utilities
//! shared across the actionsmith crates.

mod file;
mod utils;

// File operations
pub use file::{GeneratedFile, write_file};
// String utilities
pub use utils::{capitalize, is_affirmative};
