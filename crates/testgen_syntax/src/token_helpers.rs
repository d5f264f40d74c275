//! Predicates over `Token` / `TokenKind` used by the parser.
//!
//! Vocabulary is matched by registry id, never by spelling; contextual keywords are the one exception since they
//! lex as identifiers.

use crate::lexer::{Token, TokenKind};
use testgen_core::lang::keywords::{self, KeywordId};
use testgen_core::lang::operators::OperatorId;
use testgen_core::lang::punctuation::PunctuationId;

impl TokenKind {
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        *self == TokenKind::Keyword(id)
    }

    /// `true` for an identifier spelled like the contextual keyword `id` (`global`, `record`, `var`, ...).
    pub fn is_contextual(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Ident(name) if keywords::contextual_from_str(name) == Some(id))
    }

    pub fn is_operator(&self, id: OperatorId) -> bool {
        *self == TokenKind::Operator(id)
    }

    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        *self == TokenKind::Punctuation(id)
    }

    /// Identifier text, including the `@` of a verbatim identifier.
    pub fn ident(&self) -> Option<&str> {
        match self {
            TokenKind::Ident(name) => Some(name),
            _ => None,
        }
    }
}

impl Token {
    /// Keyword id of a reserved-keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self.kind {
            TokenKind::Keyword(id) => Some(id),
            _ => None,
        }
    }
}
