// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod commands;
mod logging;
mod ops;
mod progress;
mod reports;

use eyre::Result;

use crate::commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse_lenient();
    logging::init(cli.verbose);

    cli.run()
}
