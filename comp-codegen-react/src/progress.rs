//! Observer seam between the writer and whatever displays progress.

use std::{fmt, path::Path};

use crate::{Error, GenerateResult};

/// One filesystem operation, reported before it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<'a> {
    CreateDir(&'a Path),
    Write(&'a Path),
    Append(&'a Path),
}

impl fmt::Display for Step<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::CreateDir(path) => write!(f, "Creating {}", path.display()),
            Step::Write(path) => write!(f, "Writing {}", path.display()),
            Step::Append(path) => write!(f, "Updating {}", path.display()),
        }
    }
}

/// Receives the writer's signals.
///
/// `start` comes first, then any number of `step` calls, then exactly one of
/// `finish` or `fail` once the last operation has settled.
pub trait Progress {
    fn start(&mut self, name: &str);

    fn step(&mut self, step: Step<'_>);

    fn finish(&mut self, result: &GenerateResult);

    fn fail(&mut self, error: &Error);
}

/// Ignores every signal.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn start(&mut self, _name: &str) {}

    fn step(&mut self, _step: Step<'_>) {}

    fn finish(&mut self, _result: &GenerateResult) {}

    fn fail(&mut self, _error: &Error) {}
}
