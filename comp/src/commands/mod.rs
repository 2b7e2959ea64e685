mod resolve;

use std::{ffi::OsString, path::PathBuf};

use clap::{CommandFactory, Parser};
use comp_manifest::Config;
use eyre::Result;
pub(crate) use resolve::{Resolution, Resolver, UsageError};

use crate::{
    ops,
    progress::Spinner,
    reports::{Output, Report, TerminalOutput},
};

/// Exit code for manifest and unclassified failures.
const EXIT_FAILURE: i32 = 1;

/// Extension trait for exiting on classified errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

fn exit_with(report: miette::Report, code: i32) -> ! {
    eprintln!("{:?}", report);
    std::process::exit(code);
}

impl<T> UnwrapOrExit<T> for comp_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        self.unwrap_or_else(|e| exit_with(miette::Report::new(*e), EXIT_FAILURE))
    }
}

impl<T> UnwrapOrExit<T> for std::result::Result<T, UsageError> {
    fn unwrap_or_exit(self) -> T {
        self.unwrap_or_else(|e| {
            let code = e.exit_code();
            exit_with(miette::Report::new(e), code)
        })
    }
}

impl<T> UnwrapOrExit<T> for comp_codegen_react::Result<T> {
    fn unwrap_or_exit(self) -> T {
        self.unwrap_or_else(|e| {
            let code = e.exit_code();
            exit_with(miette::Report::new(e), code)
        })
    }
}

#[derive(Parser, Debug)]
#[command(name = "comp")]
#[command(version)]
#[command(args_override_self = true)]
#[command(about = "Scaffold a styled React component with types, barrel and tests")]
pub(crate) struct Cli {
    /// Component name, used verbatim in generated code (e.g. MyButton)
    pub name: Option<String>,

    /// HTML element the component renders (defaults to div)
    #[arg(short, long, value_name = "TAG")]
    pub element: Option<Option<String>>,

    /// Parent directory for the component, relative to the current directory
    /// (defaults to the `comprc.dir` base)
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<Option<String>>,

    /// Path to the project manifest holding `comprc`
    #[arg(long, default_value = "package.json")]
    pub manifest: PathBuf,

    /// Print debug logs
    #[arg(long)]
    pub verbose: bool,

    /// Unrecognized tokens, ignored with a warning
    #[arg(hide = true)]
    pub rest: Vec<String>,
}

impl Cli {
    /// Parse the process arguments, exiting on clap errors.
    pub fn parse_lenient() -> Self {
        Self::try_parse_lenient(std::env::args_os()).unwrap_or_else(|e| e.exit())
    }

    /// Like `try_parse_from`, but flags the command does not define are moved
    /// into `rest` instead of failing the parse.
    pub fn try_parse_lenient<I, T>(args: I) -> clap::error::Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let (known, unknown) = split_unknown_flags(args.into_iter().map(Into::into));
        let mut cli = Self::try_parse_from(known)?;
        cli.rest.extend(unknown);
        Ok(cli)
    }


    pub fn run(&self) -> Result<()> {
        let config = Config::load(&self.manifest).unwrap_or_exit();
        let Resolution { request, warnings } =
            Resolver::new(&config).resolve(self).unwrap_or_exit();

        let mut out = TerminalOutput::new();
        for warning in &warnings {
            out.warning(warning);
        }

        let report = ops::scaffold(&request, &mut Spinner::new()).unwrap_or_exit();
        report.render(&mut out);

        Ok(())
    }
}

/// Separate flags `Cli` does not define from the ones it does. Everything
/// after `--` is kept as is.
fn split_unknown_flags(args: impl Iterator<Item = OsString>) -> (Vec<OsString>, Vec<String>) {
    let mut command = Cli::command();
    command.build();

    let mut known = Vec::new();
    let mut unknown = Vec::new();
    let mut escaped = false;
    for (i, arg) in args.enumerate() {
        let flag = match arg.to_str() {
            Some(s) if i > 0 && !escaped && s.starts_with('-') && s != "-" => s,
            _ => {
                known.push(arg);
                continue;
            }
        };

        let defined = if flag == "--" {
            escaped = true;
            true
        } else if let Some(long) = flag.strip_prefix("--") {
            let long = long.split('=').next().unwrap_or(long);
            command.get_arguments().any(|a| a.get_long() == Some(long))
        } else {
            let short = flag.chars().nth(1);
            command.get_arguments().any(|a| a.get_short() == short)
        };

        if defined {
            known.push(arg);
        } else {
            unknown.push(flag.to_string());
        }
    }
    (known, unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(args: &[&str]) -> (Vec<OsString>, Vec<String>) {
        split_unknown_flags(args.iter().map(OsString::from))
    }

    #[test]
    fn test_split_keeps_defined_flags() {
        let (known, unknown) = split(&[
            "comp", "Nav", "-e", "nav", "--dir=lib", "--verbose", "-espan",
        ]);

        assert_eq!(
            known,
            ["comp", "Nav", "-e", "nav", "--dir=lib", "--verbose", "-espan"]
        );
        assert!(unknown.is_empty());
    }

    #[test]
    fn test_split_sets_aside_unknown_flags() {
        let (known, unknown) = split(&["comp", "Nav", "-x", "--force", "--no=1", "-e", "nav"]);

        assert_eq!(known, ["comp", "Nav", "-e", "nav"]);
        assert_eq!(unknown, ["-x", "--force", "--no=1"]);
    }

    #[test]
    fn test_split_stops_at_escape() {
        let (known, unknown) = split(&["comp", "--", "-x"]);

        assert_eq!(known, ["comp", "--", "-x"]);
        assert!(unknown.is_empty());
    }

    #[test]
    fn test_help_and_version_are_defined() {
        let (_, unknown) = split(&["comp", "-h", "--help", "-V", "--version"]);

        assert!(unknown.is_empty());
    }
}
