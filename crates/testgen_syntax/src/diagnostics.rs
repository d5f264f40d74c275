//! Diagnostics produced while lexing and parsing.
//!
//! Errors carry a byte [`Span`] into the source text. Rendering with source context is left to callers
//! (the driver wraps them into a `miette` diagnostic); [`line_info`] is provided for plain-text messages.

use std::fmt;

use crate::ast::Span;

/// A syntax-level error with location information
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct CompileError {
    pub message: String,
    pub span: Span,
    pub kind: ErrorKind,
    pub notes: Vec<String>,
    pub hints: Vec<String>,
}

impl CompileError {
    pub fn new(message: String, span: Span) -> Self {
        Self {
            message,
            span,
            kind: ErrorKind::Error,
            notes: Vec::new(),
            hints: Vec::new(),
        }
    }

    pub fn syntax(message: String, span: Span) -> Self {
        Self {
            message,
            span,
            kind: ErrorKind::Syntax,
            notes: Vec::new(),
            hints: Vec::new(),
        }
    }

    pub fn lexical(message: String, span: Span) -> Self {
        Self {
            message,
            span,
            kind: ErrorKind::Lexical,
            notes: Vec::new(),
            hints: Vec::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Error,
    Lexical,
    Syntax,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Error => write!(f, "error"),
            ErrorKind::Lexical => write!(f, "lexical error"),
            ErrorKind::Syntax => write!(f, "syntax error"),
        }
    }
}

/// Render an error with source context as plain text.
///
/// ```text
/// syntax error: Expected `;` after using directive, found end of file
///   --> Widget.cs:3:12
///    |
///  3 | using System
///    |            ^
/// ```
pub fn format_error(file_name: &str, source: &str, error: &CompileError) -> String {
    let (line_num, col_num, line_text) = line_info(source, error.span.start);
    let gutter = line_num.to_string().len();
    let underline_len = source
        .get(error.span.start..error.span.end)
        .map(|s| s.lines().next().unwrap_or("").chars().count())
        .unwrap_or(0)
        .max(1);

    let mut out = String::new();
    out.push_str(&format!("{}: {}\n", error.kind, error.message));
    out.push_str(&format!("  --> {}:{}:{}\n", file_name, line_num, col_num));
    out.push_str(&format!("  {:>gutter$} |\n", ""));
    out.push_str(&format!("  {:>gutter$} | {}\n", line_num, line_text));
    out.push_str(&format!(
        "  {:>gutter$} | {}{}\n",
        "",
        " ".repeat(col_num - 1),
        "^".repeat(underline_len)
    ));
    for note in &error.notes {
        out.push_str(&format!("  = note: {}\n", note));
    }
    for hint in &error.hints {
        out.push_str(&format!("  = hint: {}\n", hint));
    }
    out
}

/// Get the 1-based line number, 1-based column and line text for a byte offset.
pub fn line_info(source: &str, offset: usize) -> (usize, usize, &str) {
    let offset = offset.min(source.len());
    let mut line_num = 1;
    let mut line_start = 0;

    for (i, c) in source.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line_num += 1;
            line_start = i + 1;
        }
    }

    let line_end = source[line_start..]
        .find('\n')
        .map(|i| line_start + i)
        .unwrap_or(source.len());

    let line_text = source[line_start..line_end].trim_end_matches('\r');
    let col_num = source[line_start..offset].chars().count() + 1;

    (line_num, col_num, line_text)
}
