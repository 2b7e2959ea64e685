//! Report data structures for commands.
//!
//! Operations build reports, then render them to an Output target.

mod output;
mod scaffold;

pub use output::{Output, Report, TerminalOutput};
pub use scaffold::ScaffoldReport;
