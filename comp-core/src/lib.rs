//! Core utilities and types for the comp scaffolder.
//!
//! This crate provides the file-writing primitives and naming helpers
//! shared by the generator crates.

mod file;
mod utils;

// File operations
pub use file::{GeneratedFile, WriteMode, WriteResult};
// String utilities
pub use utils::to_kebab_case;
