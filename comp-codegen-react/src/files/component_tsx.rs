//! Component module (`<Name>.tsx`) generator.

use std::path::{Path, PathBuf};

use comp_core::GeneratedFile;

/// Client module exporting the styled `Root` and the function component.
pub struct ComponentTsx<'a> {
    name: &'a str,
    element: &'a str,
}

impl<'a> ComponentTsx<'a> {
    pub fn new(name: &'a str, element: &'a str) -> Self {
        Self { name, element }
    }
}

impl GeneratedFile for ComponentTsx<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!("{}.tsx", self.name))
    }

    fn render(&self) -> String {
        let Self { name, element } = self;
        format!(
            "'use client';\n\
             \n\
             import type {{ FC }} from 'react';\n\
             import type {{ {name}Props, Styled{name}Props }} from './types';\n\
             \n\
             import styled from 'styled-components';\n\
             \n\
             \n\
             export const Root = styled.{element}<Styled{name}Props>``;\n\
             \n\
             \n\
             export const {name}: FC<{name}Props> = ({{ className, ...props }}) => (\n\
             \t<Root className={{className}} {{...props}}>Content</Root>\n\
             );\n\
             \n"
        )
    }
}
