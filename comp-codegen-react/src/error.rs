use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for generation.
pub type Result<T> = std::result::Result<T, Error>;

/// Ways a generation run can stop.
///
/// Nothing is rolled back: an error after the first write leaves the files
/// written so far on disk.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("{} already exists", .path.display())]
    #[diagnostic(
        code(comp::directory_exists),
        severity(Warning),
        help("pick another component name or remove the directory first")
    )]
    DirectoryAlreadyExists { path: PathBuf },

    #[error("{} does not exist", .ancestor.display())]
    #[diagnostic(
        code(comp::ancestor_missing),
        help("every ancestor of the component directory must be a directory")
    )]
    AncestorMissing {
        path: PathBuf,
        ancestor: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to {} '{}'", .action, .path.display())]
    #[diagnostic(code(comp::io))]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Process exit code for this error kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Io { .. } => 1,
            Error::DirectoryAlreadyExists { .. } => 3,
            Error::AncestorMissing { .. } => 4,
        }
    }
}
