//! Core operations.
//!
//! This module contains the business logic for comp,
//! separated from CLI argument parsing and output rendering.

pub mod scaffold;

pub use scaffold::scaffold;
