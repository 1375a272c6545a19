//! JSON error diagnostics with source-located error messages

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// JSON parse error with source location
///
/// Covers both syntax errors and structural errors (missing or
/// mistyped fields); serde_json reports a line/column for both.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid JSON document: {message}")]
#[diagnostic(code(zac::json::parse))]
pub struct JsonParseError {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    #[help]
    help: Option<String>,

    /// The underlying error message
    message: String,
}

impl JsonParseError {
    /// Create a parse error from a serde_json error
    pub fn from_serde_error(err: &serde_json::Error, source: &str, filename: &str) -> Self {
        let offset = line_col_to_offset(source, err.line(), err.column());
        let message = err.to_string();
        let help = generate_help(&message);

        Self {
            src: NamedSource::new(filename, source.to_string()),
            span: SourceSpan::from(offset..offset.saturating_add(1)),
            help,
            message,
        }
    }
}

/// Convert line/column to byte offset
fn line_col_to_offset(source: &str, line: usize, column: usize) -> usize {
    let mut current_line = 1;

    for (i, ch) in source.char_indices() {
        if current_line == line {
            let line_start = i;
            let mut col = 1;
            for (j, c) in source[line_start..].char_indices() {
                if col == column {
                    return line_start + j;
                }
                if c == '\n' {
                    break;
                }
                col += 1;
            }
            return line_start + column.saturating_sub(1);
        }
        if ch == '\n' {
            current_line += 1;
        }
    }

    source.len().saturating_sub(1)
}

/// Generate helpful suggestions based on error message
fn generate_help(message: &str) -> Option<String> {
    let msg_lower = message.to_lowercase();

    if msg_lower.contains("missing field") {
        return Some(
            "This field is required; the run aborts rather than substituting a default."
                .to_string(),
        );
    }

    if msg_lower.contains("trailing comma") {
        return Some("JSON does not allow a comma after the last item.".to_string());
    }

    if msg_lower.contains("key must be a string") {
        return Some("JSON object keys must be double-quoted strings.".to_string());
    }

    if msg_lower.contains("expected `,` or `}`") || msg_lower.contains("expected `,` or `]`") {
        return Some("Check for a missing comma between items.".to_string());
    }

    if msg_lower.contains("eof while parsing") {
        return Some("The document ends mid-value; check for unclosed braces or brackets.".to_string());
    }

    if msg_lower.contains("invalid type") {
        return Some("The value has the wrong JSON type for this field.".to_string());
    }

    None
}
