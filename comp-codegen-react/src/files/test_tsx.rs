//! Test suite stub (`<kebab-name>.test.tsx`) generator.

use std::path::{Path, PathBuf};

use comp_core::GeneratedFile;

/// Testing Library + jest-axe suite with a render case and an a11y case.
pub struct TestTsx<'a> {
    name: &'a str,
    stem: &'a str,
}

impl<'a> TestTsx<'a> {
    /// `stem` is the kebab-case file name without extension.
    pub fn new(name: &'a str, stem: &'a str) -> Self {
        Self { name, stem }
    }
}

impl GeneratedFile for TestTsx<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!("{}.test.tsx", self.stem))
    }

    fn render(&self) -> String {
        let name = self.name;
        format!(
            "import {{ render, screen }} from '@testing-library/react';\n\
             import {{ axe }} from 'jest-axe';\n\
             import {{ {name} }} from '.';\n\
             \n\
             \n\
             describe('{name}', () => {{\n\
             \ttest('renders its content', async () => {{\n\
             \t\trender(<{name} />);\n\
             \n\
             \t\tconst intro = await screen.findByText(/content/i);\n\
             \n\
             \t\t/**\n\
             \t\t * @note Placeholder assertion:\n\
             \t\t * This is redundant as 'findByText' will error if not present.\n\
             \t\t * Remove when writing your own tests.\n\
             \t\t */\n\
             \t\texpect(intro).toBeInTheDocument();\n\
             \t}});\n\
             \n\
             \ttest('is accessible', async () => {{\n\
             \t\tconst {{ container }} = render(<{name} />);\n\
             \n\
             \t\tconst element = await axe(container);\n\
             \n\
             \t\texpect(element).toHaveNoViolations();\n\
             \t}});\n\
             }});\n"
        )
    }
}
