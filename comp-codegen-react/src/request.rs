//! The resolved description of one component to generate.

use std::path::{Path, PathBuf};

use comp_core::to_kebab_case;

/// Element tag used when none is requested.
pub const DEFAULT_ELEMENT: &str = "div";

/// Everything the renderer and writer need for a single run.
///
/// Built once by the argument resolver and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Component identifier, used verbatim in generated code.
    pub name: String,
    /// HTML element wrapped by the styled root.
    pub element: String,
    /// Directory that receives the component files.
    pub target_dir: PathBuf,
    /// Configured base directory holding the shared `index.ts`.
    pub base_dir: PathBuf,
}

impl GenerationRequest {
    pub fn new(
        name: impl Into<String>,
        target_dir: impl Into<PathBuf>,
        base_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            element: DEFAULT_ELEMENT.to_string(),
            target_dir: target_dir.into(),
            base_dir: base_dir.into(),
        }
    }

    pub fn with_element(mut self, element: impl Into<String>) -> Self {
        self.element = element.into();
        self
    }

    /// Kebab-case form of the name, used for the test file.
    pub fn kebab_name(&self) -> String {
        to_kebab_case(&self.name)
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}
