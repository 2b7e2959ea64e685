//! Turns parsed arguments into a generation request.

use std::path::{Component, Path, PathBuf};

use comp_codegen_react::GenerationRequest;
use comp_manifest::Config;
use miette::Diagnostic;
use thiserror::Error;

use super::Cli;

#[derive(Debug, Error, Diagnostic)]
pub(crate) enum UsageError {
    #[error("No component name specified.")]
    #[diagnostic(
        code(comp::missing_argument),
        help("usage: comp <ComponentName> [-e <element>] [-d <dir>]")
    )]
    MissingArgument,
}

impl UsageError {
    pub fn exit_code(&self) -> i32 {
        match self {
            UsageError::MissingArgument => 2,
        }
    }
}

/// A request plus the flags and tokens that were dropped while building it.
#[derive(Debug)]
pub(crate) struct Resolution {
    pub request: GenerationRequest,
    pub warnings: Vec<String>,
}

/// Resolves arguments against the configuration read at startup.
pub(crate) struct Resolver<'a> {
    config: &'a Config,
}

impl<'a> Resolver<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    pub fn resolve(&self, cli: &Cli) -> Result<Resolution, UsageError> {
        let name = cli
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
            .ok_or(UsageError::MissingArgument)?;

        let mut warnings = Vec::new();
        let element = flag_value("-e", &cli.element, &mut warnings);
        let dir = flag_value("-d", &cli.dir, &mut warnings);
        for token in &cli.rest {
            warnings.push(format!("ignoring unrecognized argument '{token}'"));
        }

        let base_dir = self.config.base_dir();
        let target_dir = match dir {
            Some(dir) => Path::new(".").join(relative_part(dir)).join(name),
            None => base_dir.join(name),
        };

        let mut request = GenerationRequest::new(name, target_dir, PathBuf::from(base_dir));
        if let Some(element) = element {
            request = request.with_element(element);
        }

        tracing::debug!(
            name = %request.name,
            element = %request.element,
            target_dir = %request.target_dir.display(),
            "resolved request"
        );
        Ok(Resolution { request, warnings })
    }
}

/// `dir` with any root or drive prefix stripped, so `-d` always lands under `./`.
fn relative_part(dir: &str) -> PathBuf {
    Path::new(dir)
        .components()
        .filter(|c| {
            matches!(
                c,
                Component::Normal(_) | Component::CurDir | Component::ParentDir
            )
        })
        .collect()
}

/// A flag's value, or `None` with a warning when the flag came without one.
fn flag_value<'v>(
    flag: &str,
    value: &'v Option<Option<String>>,
    warnings: &mut Vec<String>,
) -> Option<&'v str> {
    match value {
        None => None,
        Some(Some(value)) if !value.is_empty() => Some(value.as_str()),
        Some(_) => {
            warnings.push(format!("{flag} was given without a value; using the default"));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve_with(config: &Config, args: &[&str]) -> Result<Resolution, UsageError> {
        let cli = Cli::try_parse_lenient(std::iter::once("comp").chain(args.iter().copied()))
            .expect("arguments should parse");
        Resolver::new(config).resolve(&cli)
    }

    fn resolve(args: &[&str]) -> Result<Resolution, UsageError> {
        resolve_with(&Config::default(), args)
    }

    #[test]
    fn test_defaults() {
        let Resolution { request, warnings } = resolve(&["Button"]).unwrap();

        assert_eq!(request.name, "Button");
        assert_eq!(request.element, "div");
        assert_eq!(request.target_dir, Path::new("./components/Button"));
        assert_eq!(request.base_dir, Path::new("./components"));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_missing_name() {
        assert!(matches!(resolve(&[]), Err(UsageError::MissingArgument)));
        assert!(matches!(resolve(&[""]), Err(UsageError::MissingArgument)));
        assert!(matches!(
            resolve(&["-e", "span"]),
            Err(UsageError::MissingArgument)
        ));
        assert_eq!(UsageError::MissingArgument.exit_code(), 2);
    }

    #[test]
    fn test_element_flag() {
        let request = resolve(&["Label", "-e", "span"]).unwrap().request;
        assert_eq!(request.element, "span");
    }

    #[test]
    fn test_dir_flag_overrides_base() {
        let config = Config::new("./src/ui");
        let request = resolve_with(&config, &["Card", "-d", "custom"])
            .unwrap()
            .request;

        assert_eq!(request.target_dir, Path::new("./custom/Card"));
        assert_eq!(request.base_dir, Path::new("./src/ui"));
    }

    #[test]
    fn test_dir_flag_absolute_stays_relative() {
        let request = resolve(&["Card", "-d", "/abs/lib"]).unwrap().request;

        assert_eq!(request.target_dir, Path::new("./abs/lib/Card"));
    }

    #[test]
    fn test_extra_positional_is_ignored() {
        let Resolution { request, warnings } = resolve(&["Button", "extra"]).unwrap();

        assert_eq!(request.name, "Button");
        assert_eq!(request.target_dir, Path::new("./components/Button"));
        assert_eq!(warnings, ["ignoring unrecognized argument 'extra'"]);
    }

    #[test]
    fn test_unknown_flag_is_ignored() {
        let Resolution { request, warnings } =
            resolve(&["Button", "-x", "-e", "span"]).unwrap();

        assert_eq!(request.element, "span");
        assert_eq!(warnings, ["ignoring unrecognized argument '-x'"]);
    }

    #[test]
    fn test_repeated_element_flag_last_wins() {
        let Resolution { request, warnings } =
            resolve(&["Button", "-e", "a", "-e", "b"]).unwrap();

        assert_eq!(request.element, "b");
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_unknown_tokens_are_all_reported() {
        let Resolution { request, warnings } =
            resolve(&["Button", "--force", "extra", "-d", "lib"]).unwrap();

        assert_eq!(request.target_dir, Path::new("./lib/Button"));
        assert_eq!(
            warnings,
            [
                "ignoring unrecognized argument 'extra'",
                "ignoring unrecognized argument '--force'",
            ]
        );
    }

    #[test]
    fn test_flag_is_never_taken_as_a_value() {
        let Resolution { request, warnings } =
            resolve(&["Button", "-e", "-d", "lib"]).unwrap();

        assert_eq!(request.element, "div");
        assert_eq!(request.target_dir, Path::new("./lib/Button"));
        assert_eq!(warnings, ["-e was given without a value; using the default"]);
    }

    #[test]
    fn test_configured_base() {
        let config = Config::new("./src/ui");
        let request = resolve_with(&config, &["Card"]).unwrap().request;

        assert_eq!(request.target_dir, Path::new("./src/ui/Card"));
    }

    #[test]
    fn test_flags_in_any_order() {
        let request = resolve(&["Nav", "-d", "lib", "-e", "nav"]).unwrap().request;

        assert_eq!(request.element, "nav");
        assert_eq!(request.target_dir, Path::new("./lib/Nav"));
    }

    #[test]
    fn test_flag_without_value_keeps_default() {
        let Resolution { request, warnings } = resolve(&["Button", "-e"]).unwrap();

        assert_eq!(request.element, "div");
        assert_eq!(warnings, ["-e was given without a value; using the default"]);
    }

    #[test]
    fn test_empty_flag_values_keep_defaults() {
        let Resolution { request, warnings } = resolve(&["Button", "-e", "", "-d", ""]).unwrap();

        assert_eq!(request.element, "div");
        assert_eq!(request.target_dir, Path::new("./components/Button"));
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn test_trailing_dir_flag_without_value() {
        let Resolution { request, warnings } = resolve(&["Button", "-e", "a", "-d"]).unwrap();

        assert_eq!(request.element, "a");
        assert_eq!(request.target_dir, Path::new("./components/Button"));
        assert_eq!(warnings, ["-d was given without a value; using the default"]);
    }
}
