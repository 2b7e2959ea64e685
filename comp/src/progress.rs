//! Terminal spinner driven by the generator's signals.

use std::time::Duration;

use comp_codegen_react::{Error, GenerateResult, Progress, Step};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while a component is being written.
///
/// Drawn on stderr and hidden when stderr is not a terminal.
#[derive(Default)]
pub(crate) struct Spinner {
    bar: Option<ProgressBar>,
    name: String,
}

impl Spinner {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Progress for Spinner {
    fn start(&mut self, name: &str) {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner:.yellow} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message("Creating your component...");
        bar.enable_steady_tick(Duration::from_millis(100));

        self.bar = Some(bar);
        self.name = name.to_string();
    }

    fn step(&mut self, step: Step<'_>) {
        tracing::debug!(%step);
        if let Some(bar) = &self.bar {
            bar.set_message(format!("Creating your component... {}", style(step).dim()));
        }
    }

    fn finish(&mut self, _result: &GenerateResult) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
        println!(
            "🎉 Component {} created!",
            style(&self.name).green().bold()
        );
    }

    fn fail(&mut self, error: &Error) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
        tracing::debug!(%error, "generation stopped");
    }
}
