//! Typed view of the `comprc` manifest section.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Base directory used when the manifest does not name one.
pub const DEFAULT_BASE_DIR: &str = "./components";

/// The parts of `package.json` comp cares about.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageManifest {
    /// Scaffolder settings, if present.
    #[serde(default)]
    pub comprc: Option<Comprc>,
}

/// The `comprc` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Comprc {
    /// Base directory that holds components and the shared `index.ts`.
    #[serde(default)]
    pub dir: Option<String>,
}

/// Resolved configuration, read once at startup and passed down explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    base_dir: PathBuf,
}

impl Config {
    /// Create a configuration with an explicit base directory.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Get the base directory for generated components.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_DIR)
    }
}

impl From<&PackageManifest> for Config {
    fn from(manifest: &PackageManifest) -> Self {
        manifest
            .comprc
            .as_ref()
            .and_then(|comprc| comprc.dir.as_deref())
            .filter(|dir| !dir.is_empty())
            .map(Config::new)
            .unwrap_or_default()
    }
}
