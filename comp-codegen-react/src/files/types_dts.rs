//! Props type declarations (`types.d.ts`) generator.

use std::path::{Path, PathBuf};

use comp_core::GeneratedFile;

/// `<Name>Props` extends the element's intrinsic props and forbids children;
/// `Styled<Name>Props` is left empty for styled-component props.
pub struct TypesDts<'a> {
    name: &'a str,
    element: &'a str,
}

impl<'a> TypesDts<'a> {
    pub fn new(name: &'a str, element: &'a str) -> Self {
        Self { name, element }
    }
}

impl GeneratedFile for TypesDts<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("types.d.ts")
    }

    fn render(&self) -> String {
        let Self { name, element } = self;
        format!(
            "import type {{ ComponentPropsWithRef }} from 'react';\n\
             \n\
             \n\
             export type {name}Props = ComponentPropsWithRef<'{element}'> & {{\n\
             \tchildren?: never;\n\
             }}\n\
             \n\
             export type Styled{name}Props = {{}}\n"
        )
    }
}
