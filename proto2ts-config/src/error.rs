use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for configuration operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Carries the raw TOML text and the file name so validation errors can point
/// at the offending key.
///
/// # Example
///
/// ```
/// use proto2ts_config::SourceContext;
///
/// let ctx = SourceContext::new("output_path = \"\"", "proto2ts.toml");
/// let err = ctx.validation_error_at("output_path must not be empty", "output_path");
/// assert_eq!(err.to_string(), "output_path must not be empty");
/// ```
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Context for a configuration built in code, with no source text.
    pub fn detached() -> Self {
        Self::new("", crate::CONFIG_FILE_NAME)
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Find the span of a key (`key =` or `"key" =`) in the source.
    pub fn find_key_span(&self, key: &str) -> Option<SourceSpan> {
        let quoted = format!("\"{}\"", key);
        let candidates = [quoted.as_str(), key];

        candidates.iter().find_map(|needle| {
            self.src.match_indices(needle).find_map(|(pos, _)| {
                let rest = self.src[pos + needle.len()..].trim_start_matches([' ', '\t']);
                let line_start = self.src[..pos].rfind('\n').map_or(0, |i| i + 1);
                let leading = self.src[line_start..pos].trim_matches([' ', '\t', '{', ',']);
                (rest.starts_with('=') && leading.is_empty())
                    .then(|| SourceSpan::from((pos, needle.len())))
            })
        })
    }

    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Validation error pointing at the given key, when it can be found.
    pub fn validation_error_at(&self, message: impl Into<String>, key: &str) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: self.find_key_span(key),
            message: message.into(),
        })
    }

    pub fn missing_placeholder_error(&self, key: &str, template: &str) -> Box<Error> {
        Box::new(Error::MissingPlaceholder {
            src: self.named_source(),
            span: self.find_key_span(key),
            key: key.to_string(),
            template: template.to_string(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("create a proto2ts.toml or pass --config"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse proto2ts.toml")]
    #[diagnostic(code(proto2ts::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("template '{template}' in {key} has no {{{{typeName}}}} placeholder")]
    #[diagnostic(
        code(proto2ts::missing_placeholder),
        help("every generated name needs the type's own name, e.g. \"{{{{parentNodeNames}}}}{{{{typeName}}}}\"")
    )]
    MissingPlaceholder {
        #[source_code]
        src: NamedSource<String>,
        #[label("template defined here")]
        span: Option<SourceSpan>,
        key: String,
        template: String,
    },

    #[error("{message}")]
    #[diagnostic(code(proto2ts::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_key_span() {
        let ctx = SourceContext::new("input_root = \"protos\"\noutput_path = \"\"\n", "proto2ts.toml");
        let span = ctx.find_key_span("output_path").unwrap();
        assert_eq!(span.offset(), 22);
        assert_eq!(span.len(), "output_path".len());
    }

    #[test]
    fn test_find_key_span_ignores_values() {
        let ctx = SourceContext::new("input_root = \"output_path\"\n", "proto2ts.toml");
        assert!(ctx.find_key_span("output_path").is_none());
    }

    #[test]
    fn test_find_quoted_key_span() {
        let src = "[generated_type_overrides]\n\"\" = \"string\"\n";
        let ctx = SourceContext::new(src, "proto2ts.toml");
        let span = ctx.find_key_span("").unwrap();
        assert_eq!(span.offset(), 27);
        assert_eq!(span.len(), 2);
    }

    #[test]
    fn test_missing_placeholder_message() {
        let err = SourceContext::detached().missing_placeholder_error("type_name_template", "{{parentNodeNames}}");
        assert_eq!(
            err.to_string(),
            "template '{{parentNodeNames}}' in type_name_template has no {{typeName}} placeholder"
        );
    }
}
