//! React component file generators.

mod barrel_export;
mod component_tsx;
mod index_ts;
mod test_tsx;
mod types_dts;

pub use barrel_export::BarrelExport;
pub use component_tsx::ComponentTsx;
use comp_core::GeneratedFile;
pub use index_ts::IndexTs;
pub use test_tsx::TestTsx;
pub use types_dts::TypesDts;

use crate::GenerationRequest;

/// The four rendered component documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSet {
    pub index: String,
    pub types: String,
    pub component: String,
    pub test: String,
}

impl TemplateSet {
    pub fn render(request: &GenerationRequest) -> Self {
        let name = request.name.as_str();
        let element = request.element.as_str();

        Self {
            index: IndexTs::new(name).render(),
            types: TypesDts::new(name, element).render(),
            component: ComponentTsx::new(name, element).render(),
            test: TestTsx::new(name, &request.kebab_name()).render(),
        }
    }
}
