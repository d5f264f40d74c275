//! Parse failures surfaced by the scaffold engine.
//!
//! Wraps the syntax crate's [`CompileError`]s into a `miette` diagnostic carrying the source text, so callers can
//! render the offending span with context.

// Suppress unused_assignments for struct fields used by derive macros
#![allow(unused_assignments)]

use miette::{Diagnostic, SourceSpan};
use testgen_syntax::CompileError;

/// Name used for sources that did not come from a file.
pub const ANONYMOUS_SOURCE: &str = "<source>";

/// The source text could not be lexed or parsed; no output was produced for it.
#[derive(Debug, Diagnostic, thiserror::Error)]
#[error("{file_name}: {message}")]
#[diagnostic(code(testgen::parse))]
pub struct ParseError {
    /// Message of the first error
    pub message: String,
    /// Display name of the source (a path, or [`ANONYMOUS_SOURCE`])
    pub file_name: String,
    /// Source code for context
    #[source_code]
    pub src: miette::NamedSource<String>,
    /// Location of the first error
    #[label("{label}")]
    pub span: SourceSpan,
    /// Label for the error span (interpolated by miette derive macro)
    pub label: String,
    /// Notes and hints attached to the first error
    #[help]
    pub help: Option<String>,
    source_text: String,
    errors: Vec<CompileError>,
}

impl ParseError {
    /// Build a diagnostic from the frontend's errors. `errors` must not be empty.
    pub fn new(source: &str, errors: Vec<CompileError>) -> Self {
        let (message, span, label, help) = match errors.first() {
            Some(first) => {
                let mut message = first.message.clone();
                if errors.len() > 1 {
                    message.push_str(&format!(" (and {} more)", errors.len() - 1));
                }
                let extra: Vec<&str> = first.notes.iter().chain(&first.hints).map(String::as_str).collect();
                let help = (!extra.is_empty()).then(|| extra.join("\n"));
                let span: SourceSpan = (first.span.start, first.span.len()).into();
                (message, span, first.kind.to_string(), help)
            }
            None => ("invalid source".to_string(), (0, 0).into(), "error".to_string(), None),
        };

        Self {
            message,
            file_name: ANONYMOUS_SOURCE.to_string(),
            src: miette::NamedSource::new(ANONYMOUS_SOURCE, source.to_string()),
            span,
            label,
            help,
            source_text: source.to_string(),
            errors,
        }
    }

    /// Attach the path the source was read from.
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self.src = miette::NamedSource::new(self.file_name.clone(), self.source_text.clone());
        self
    }

    /// Every error reported by the frontend, in source order.
    pub fn errors(&self) -> &[CompileError] {
        &self.errors
    }

    /// Plain-text rendering of every error, without terminal styling.
    pub fn render_plain(&self) -> String {
        self.errors
            .iter()
            .map(|e| testgen_syntax::diagnostics::format_error(&self.file_name, &self.source_text, e))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
