use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for comp-manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Holds the manifest text and its filename so serde_json failures can be
/// turned into spanned diagnostics.
#[derive(Debug, Clone)]
pub(crate) struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub(crate) fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Classify a serde_json error: type mismatches become `InvalidConfig`,
    /// everything else is a syntax `Parse` error.
    pub(crate) fn json_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = offset_of(&self.src, source.line(), source.column())
            .map(|offset| SourceSpan::from((offset, 0)));

        if source.is_data() {
            Box::new(Error::InvalidConfig {
                src: self.named_source(),
                span,
                source,
            })
        } else {
            Box::new(Error::Parse {
                src: self.named_source(),
                span,
                source,
            })
        }
    }
}

/// Byte offset of a 1-based line/column position reported by serde_json.
fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }

    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let offset = line_start + column.saturating_sub(1);

    (offset <= src.len()).then_some(offset)
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(comp::manifest_io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse package.json")]
    #[diagnostic(code(comp::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid `comprc` section")]
    #[diagnostic(
        code(comp::invalid_config),
        help("expected an object like \"comprc\": {{ \"dir\": \"./components\" }}")
    )]
    InvalidConfig {
        #[source_code]
        src: NamedSource<String>,
        #[label("unexpected value")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_of_first_line() {
        assert_eq!(offset_of("{\"a\": 1}", 1, 1), Some(0));
        assert_eq!(offset_of("{\"a\": 1}", 1, 5), Some(4));
    }

    #[test]
    fn test_offset_of_later_line() {
        let src = "{\n  \"a\": x\n}";
        assert_eq!(offset_of(src, 2, 8), Some(9));
        assert_eq!(&src[9..10], "x");
    }

    #[test]
    fn test_offset_of_out_of_range() {
        assert_eq!(offset_of("{}", 0, 0), None);
        assert_eq!(offset_of("{}", 1, 10), None);
    }

    #[test]
    fn test_json_error_classification() {
        let ctx = SourceContext::new("{ nope", "package.json");
        let err = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        assert!(matches!(*ctx.json_error(err), Error::Parse { .. }));

        let src = r#"{"dir": 1}"#;
        let ctx = SourceContext::new(src, "package.json");
        let err = serde_json::from_str::<crate::Comprc>(src).unwrap_err();
        assert!(matches!(*ctx.json_error(err), Error::InvalidConfig { .. }));
    }
}
