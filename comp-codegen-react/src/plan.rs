//! Concrete output paths for one request.

use std::path::{Path, PathBuf};

use comp_core::GeneratedFile;

use crate::{
    GenerationRequest,
    files::{BarrelExport, ComponentTsx, IndexTs, TestTsx, TypesDts},
};

/// Paths the writer will touch, derived from a [`GenerationRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPlan {
    pub target_dir: PathBuf,
    pub index_file: PathBuf,
    pub types_file: PathBuf,
    pub component_file: PathBuf,
    pub test_file: PathBuf,
    pub barrel_index_file: PathBuf,
}

impl OutputPlan {
    pub fn new(request: &GenerationRequest) -> Self {
        let dir = request.target_dir();
        let name = request.name.as_str();
        let element = request.element.as_str();
        let stem = request.kebab_name();

        Self {
            target_dir: dir.to_path_buf(),
            index_file: IndexTs::new(name).path(dir),
            types_file: TypesDts::new(name, element).path(dir),
            component_file: ComponentTsx::new(name, element).path(dir),
            test_file: TestTsx::new(name, &stem).path(dir),
            barrel_index_file: BarrelExport::new(name).path(request.base_dir()),
        }
    }

    /// Component files in write order.
    pub fn component_files(&self) -> [&Path; 4] {
        [
            &self.index_file,
            &self.types_file,
            &self.component_file,
            &self.test_file,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_paths() {
        let request = GenerationRequest::new("MyButton", "./components/MyButton", "./components");
        let plan = OutputPlan::new(&request);

        let dir = Path::new("./components/MyButton");
        assert_eq!(plan.index_file, dir.join("index.ts"));
        assert_eq!(plan.types_file, dir.join("types.d.ts"));
        assert_eq!(plan.component_file, dir.join("MyButton.tsx"));
        assert_eq!(plan.test_file, dir.join("my-button.test.tsx"));
        assert_eq!(plan.barrel_index_file, Path::new("./components/index.ts"));
    }

    #[test]
    fn test_barrel_stays_at_base_for_custom_dir() {
        let request = GenerationRequest::new("Card", "./custom/Card", "./components");
        let plan = OutputPlan::new(&request);

        assert_eq!(plan.component_file, Path::new("./custom/Card/Card.tsx"));
        assert_eq!(plan.barrel_index_file, Path::new("./components/index.ts"));
    }
}
