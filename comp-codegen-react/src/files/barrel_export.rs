//! Line appended to the shared `index.ts` at the base directory.

use std::path::{Path, PathBuf};

use comp_core::{GeneratedFile, WriteMode};

/// `export * from './<Name>';` appended to an existing barrel.
pub struct BarrelExport<'a> {
    name: &'a str,
}

impl<'a> BarrelExport<'a> {
    pub fn new(name: &'a str) -> Self {
        Self { name }
    }
}

impl GeneratedFile for BarrelExport<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("index.ts")
    }

    fn mode(&self) -> WriteMode {
        WriteMode::AppendExisting
    }

    fn render(&self) -> String {
        format!("export * from './{}';\n", self.name)
    }
}
