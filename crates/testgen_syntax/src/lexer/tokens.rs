//! Token types for the lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Operator(OperatorId)` for operators
//! - `Punctuation(PunctuationId)` for delimiters, separators and structural markers
//!
//! ## Notes
//! - Literals keep their raw source text. Declarations never need literal values, only their extent.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use crate::ast::Span;
use testgen_core::lang::keywords::{self, KeywordId};
use testgen_core::lang::operators::OperatorId;
use testgen_core::lang::punctuation::PunctuationId;

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Identifiers and Literals ==========
    /// Identifier; verbatim identifiers keep their leading `@`
    Ident(String),
    Number(String),
    /// Any string literal form (regular, verbatim, raw, interpolated), raw text including quotes
    String(String),
    Char(String),

    // ========== Special ==========
    Eof,
}

/// A token with its kind and source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}
