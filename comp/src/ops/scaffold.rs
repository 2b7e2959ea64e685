//! Scaffold operation - writes one component.

use comp_codegen_react::{GenerationRequest, Generator, Progress, Result};

use crate::reports::ScaffoldReport;

/// Execute the scaffold operation.
///
/// `progress` observes the writer and is settled before this returns.
pub fn scaffold(request: &GenerationRequest, progress: &mut dyn Progress) -> Result<ScaffoldReport> {
    let result = Generator::new(request).generate(progress)?;

    Ok(ScaffoldReport {
        name: request.name.clone(),
        plan: result.plan,
    })
}
