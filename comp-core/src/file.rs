use std::{
    fs::OpenOptions,
    io::{self, Write},
    path::{Path, PathBuf},
};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// How the content reaches disk
    fn mode(&self) -> WriteMode {
        WriteMode::Overwrite
    }

    /// Write the file to disk
    fn write(&self, base: &Path) -> io::Result<WriteResult> {
        let path = self.path(base);
        let content = self.render();

        match self.mode() {
            WriteMode::Overwrite => {
                write_file(&path, &content)?;
                Ok(WriteResult::Written)
            }
            WriteMode::AppendExisting => {
                append_file(&path, &content)?;
                Ok(WriteResult::Appended)
            }
        }
    }
}

fn write_file(path: &Path, content: &str) -> io::Result<()> {
    tracing::debug!(path = %path.display(), bytes = content.len(), "writing file");
    std::fs::write(path, content)
}

fn append_file(path: &Path, content: &str) -> io::Result<()> {
    tracing::debug!(path = %path.display(), bytes = content.len(), "appending to file");
    // no `create(true)`: the target must already exist
    let mut file = OpenOptions::new().append(true).open(path)?;
    file.write_all(content.as_bytes())
}

/// How to handle the file on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Create or truncate, no confirmation (generated code)
    Overwrite,
    /// Append to a file that must already exist (shared barrels)
    AppendExisting,
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was created or overwritten
    Written,
    /// Content was appended to an existing file
    Appended,
}
