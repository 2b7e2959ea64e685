//! Scaffold report data structures.

use comp_codegen_react::OutputPlan;

use super::output::{Output, Report};

/// Report data from a successful scaffold.
#[derive(Debug)]
pub struct ScaffoldReport {
    /// Component name as given on the command line.
    pub name: String,

    /// Paths that were written.
    pub plan: OutputPlan,
}

impl Report for ScaffoldReport {
    fn render(&self, out: &mut dyn Output) {
        let files = self.plan.component_files();

        out.newline();
        out.section(&format!("{} ({} files)", self.name, files.len()));
        for path in files {
            out.added_item(&path.display().to_string());
        }
        out.newline();
        out.key_value(
            "Exported from",
            &self.plan.barrel_index_file.display().to_string(),
        );
    }
}
