use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for pyql-schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
///
/// # Example
///
/// ```ignore
/// let ctx = SourceContext::new(content, "schema.graphql");
/// ctx.validation_error("missing required field");
/// ctx.duplicate_type_error("User", ctx.span_at(3, 6, 4));
/// ```
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Span of `len` bytes starting at a 1-based line and column.
    ///
    /// Returns `None` when the position lies outside the source.
    pub fn span_at(&self, line: usize, column: usize, len: usize) -> Option<SourceSpan> {
        if line == 0 || column == 0 {
            return None;
        }
        let line_start = if line == 1 {
            0
        } else {
            self.src
                .match_indices('\n')
                .nth(line - 2)
                .map(|(pos, _)| pos + 1)?
        };
        let line_text = self.src[line_start..].lines().next().unwrap_or("");
        // Columns count characters, not bytes
        let offset = line_text
            .char_indices()
            .nth(column - 1)
            .map(|(pos, _)| pos)
            .or_else(|| (column - 1 == line_text.chars().count()).then_some(line_text.len()))?;
        let start = line_start + offset;
        let len = len.min(self.src.len() - start);
        Some(SourceSpan::from((start, len)))
    }

    /// Find the first occurrence of a TOML key (`key =` at line start).
    pub fn find_key_span(&self, key: &str) -> Option<SourceSpan> {
        let mut offset = 0;
        for line in self.src.split_inclusive('\n') {
            let trimmed = line.trim_start();
            let indent = line.len() - trimmed.len();
            for candidate in [key.to_string(), format!("\"{}\"", key)] {
                let is_key = trimmed
                    .strip_prefix(&candidate)
                    .is_some_and(|rest| rest.trim_start().starts_with('='));
                if is_key {
                    return Some(SourceSpan::from((offset + indent, candidate.len())));
                }
            }
            offset += line.len();
        }
        None
    }

    /// Create a config parse error from a toml error.
    pub fn config_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Config {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a GraphQL syntax error from a parser message.
    ///
    /// The parser reports positions as `line:column` inside its message;
    /// when one can be found it is turned into a label.
    pub fn syntax_error(&self, message: impl Into<String>) -> Box<Error> {
        let message = message.into();
        let span = parse_position(&message).and_then(|(line, col)| self.span_at(line, col, 1));
        Box::new(Error::Syntax {
            src: self.named_source(),
            span,
            message,
        })
    }

    /// Create a validation error without a span.
    pub fn validation_error(&self, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: None,
            message: message.into(),
        })
    }

    /// Create a validation error with an optional span.
    pub fn validation_error_at(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    /// Create a duplicate type error.
    pub fn duplicate_type_error(
        &self,
        name: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::DuplicateType {
            src: self.named_source(),
            span,
            name: name.into(),
        })
    }

    /// Create an error for an extension whose base type is missing or of another kind.
    pub fn unknown_extension_error(
        &self,
        name: impl Into<String>,
        kind: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::UnknownExtension {
            src: self.named_source(),
            span,
            name: name.into(),
            kind: kind.into(),
        })
    }
}

/// Extract the first `line:column` pair following "at " in a parser message.
fn parse_position(message: &str) -> Option<(usize, usize)> {
    let rest = &message[message.find(" at ")? + 4..];
    let token = rest.split_whitespace().next()?;
    let (line, column) = token.split_once(':')?;
    Some((line.parse().ok()?, column.parse().ok()?))
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(pyql::io_error))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse pyql config")]
    #[diagnostic(code(pyql::config_error))]
    Config {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid GraphQL syntax")]
    #[diagnostic(code(pyql::syntax_error), help("{message}"))]
    Syntax {
        #[source_code]
        src: NamedSource<String>,
        #[label("syntax error here")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("type '{name}' is defined more than once")]
    #[diagnostic(
        code(pyql::duplicate_type),
        help("use 'extend type {name}' to add fields to an existing type")
    )]
    DuplicateType {
        #[source_code]
        src: NamedSource<String>,
        #[label("redefined here")]
        span: Option<SourceSpan>,
        name: String,
    },

    #[error("cannot extend unknown {kind} '{name}'")]
    #[diagnostic(
        code(pyql::unknown_extension),
        help("define '{name}' as a {kind} before extending it")
    )]
    UnknownExtension {
        #[source_code]
        src: NamedSource<String>,
        #[label("extension of an undefined {kind}")]
        span: Option<SourceSpan>,
        name: String,
        kind: String,
    },

    #[error("{message}")]
    #[diagnostic(code(pyql::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}
