use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::{Config, Error, PackageManifest, Result, error::SourceContext};

/// Represents a package.json file with both raw content and parsed manifest.
pub struct PackageJson {
    path: PathBuf,
    manifest: PackageManifest,
}

impl PackageJson {
    /// Open and parse a package.json file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let manifest = Self::parse(&content, &path.display().to_string())?;

        Ok(Self { path, manifest })
    }

    /// Parse manifest content with the given filename for error reporting.
    pub fn parse(content: &str, filename: &str) -> Result<PackageManifest> {
        serde_json::from_str(content)
            .map_err(|e| SourceContext::new(content, filename).json_error(e))
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &PackageManifest {
        &self.manifest
    }

    /// Get the resolved configuration.
    pub fn config(&self) -> Config {
        Config::from(&self.manifest)
    }
}

impl Config {
    /// Load configuration from the manifest at `path`.
    ///
    /// A missing manifest yields the default configuration; an unreadable or
    /// malformed one is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match PackageJson::open(path) {
            Ok(file) => {
                let config = file.config();
                tracing::debug!(
                    manifest = %file.path().display(),
                    base_dir = %config.base_dir().display(),
                    "loaded configuration"
                );
                Ok(config)
            }
            Err(e) if matches!(&*e, Error::Io { source, .. } if source.kind() == ErrorKind::NotFound) =>
            {
                tracing::debug!(manifest = %path.display(), "no manifest found, using defaults");
                Ok(Config::default())
            }
            Err(e) => Err(e),
        }
    }
}
