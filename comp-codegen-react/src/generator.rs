//! Writes a component to disk.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use comp_core::GeneratedFile;

use crate::{
    Error, GenerationRequest, OutputPlan, Progress, Result, Step, TemplateSet,
    files::{BarrelExport, ComponentTsx, IndexTs, TestTsx, TypesDts},
};

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateResult {
    /// Every path that was written or appended to.
    pub plan: OutputPlan,
}

/// React component generator for a single request.
pub struct Generator<'a> {
    request: &'a GenerationRequest,
}

impl<'a> Generator<'a> {
    pub fn new(request: &'a GenerationRequest) -> Self {
        Self { request }
    }

    /// Render the component files without touching the filesystem.
    pub fn templates(&self) -> TemplateSet {
        TemplateSet::render(self.request)
    }

    /// Paths a run would touch.
    pub fn plan(&self) -> OutputPlan {
        OutputPlan::new(self.request)
    }

    /// Create the component directory, write its files, then register the
    /// component in the base barrel.
    ///
    /// `progress` gets `finish` or `fail` only after the last operation has
    /// returned.
    pub fn generate(&self, progress: &mut dyn Progress) -> Result<GenerateResult> {
        progress.start(&self.request.name);

        let outcome = self.write_files(progress);
        match &outcome {
            Ok(result) => progress.finish(result),
            Err(error) => progress.fail(error),
        }
        outcome
    }

    fn write_files(&self, progress: &mut dyn Progress) -> Result<GenerateResult> {
        let request = self.request;
        let plan = self.plan();
        let dir = request.target_dir();

        progress.step(Step::CreateDir(dir));
        create_target_dir(dir)?;

        let name = request.name.as_str();
        let element = request.element.as_str();
        let stem = request.kebab_name();
        let files: [&dyn GeneratedFile; 4] = [
            &IndexTs::new(name),
            &TypesDts::new(name, element),
            &ComponentTsx::new(name, element),
            &TestTsx::new(name, &stem),
        ];

        for file in files {
            let path = file.path(dir);
            progress.step(Step::Write(&path));
            file.write(dir).map_err(|source| Error::Io {
                action: "write",
                path,
                source,
            })?;
        }

        let barrel = BarrelExport::new(name);
        progress.step(Step::Append(&plan.barrel_index_file));
        barrel
            .write(request.base_dir())
            .map_err(|source| Error::Io {
                action: "append to",
                path: plan.barrel_index_file.clone(),
                source,
            })?;

        tracing::debug!(component = name, dir = %dir.display(), "component generated");
        Ok(GenerateResult { plan })
    }
}

/// Create `dir`, creating missing ancestors but never reusing `dir` itself.
fn create_target_dir(dir: &Path) -> Result<()> {
    if let Some(parent) = dir.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ancestor_error(dir, parent, source))?;
    }

    fs::create_dir(dir).map_err(|source| match source.kind() {
        ErrorKind::AlreadyExists => Error::DirectoryAlreadyExists {
            path: dir.to_path_buf(),
        },
        ErrorKind::NotFound => ancestor_error(dir, dir.parent().unwrap_or(dir), source),
        _ => Error::Io {
            action: "create directory",
            path: dir.to_path_buf(),
            source,
        },
    })
}

fn ancestor_error(dir: &Path, ancestor: &Path, source: std::io::Error) -> Error {
    match source.kind() {
        ErrorKind::NotFound | ErrorKind::NotADirectory | ErrorKind::AlreadyExists => {
            Error::AncestorMissing {
                path: dir.to_path_buf(),
                ancestor: first_unusable_ancestor(ancestor),
                source,
            }
        }
        _ => Error::Io {
            action: "create directory",
            path: ancestor.to_path_buf(),
            source,
        },
    }
}

/// The shallowest ancestor that is not a directory, for error messages.
fn first_unusable_ancestor(path: &Path) -> PathBuf {
    path.ancestors()
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .find(|p| !p.as_os_str().is_empty() && !p.is_dir())
        .unwrap_or(path)
        .to_path_buf()
}
