//! Component barrel (`index.ts`) generator.

use std::path::{Path, PathBuf};

use comp_core::GeneratedFile;

use super::BarrelExport;

/// Re-exports the component module and its type declarations.
pub struct IndexTs<'a> {
    name: &'a str,
}

impl<'a> IndexTs<'a> {
    pub fn new(name: &'a str) -> Self {
        Self { name }
    }
}

impl GeneratedFile for IndexTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("index.ts")
    }

    fn render(&self) -> String {
        format!(
            "{}export * from './types.d';\n",
            BarrelExport::new(self.name).render()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        assert_eq!(
            IndexTs::new("Button").render(),
            "export * from './Button';\nexport * from './types.d';\n"
        );
    }
}
