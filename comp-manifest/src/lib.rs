//! Configuration loading for comp.
//!
//! Reads the optional `comprc` section of a project's `package.json`:
//!
//! ```json
//! {
//!   "name": "my-app",
//!   "comprc": { "dir": "./src/components" }
//! }
//! ```
//!
//! Every other key of the manifest is ignored.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod file;

pub use config::{Comprc, Config, DEFAULT_BASE_DIR, PackageManifest};
pub use error::{Error, Result};
pub use file::PackageJson;
