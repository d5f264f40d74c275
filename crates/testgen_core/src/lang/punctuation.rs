//! Punctuation vocabulary.
//!
//! This module defines the canonical set of non-operator punctuation tokens used by the lexer/parser:
//! delimiters, separators, access markers and the handful of structural markers declarations need.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - `<` and `>` are punctuation (angle brackets), never operators: the lexer emits `>` as a single token so
//!   `List<List<int>>` closes both argument lists.
//!
//! ## Examples
//! ```rust
//! use testgen_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str("::"), Some(PunctuationId::ColonColon));
//! assert_eq!(punctuation::as_str(PunctuationId::LAngle), "<");
//! ```

/// Broad syntactic grouping for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationCategory {
    /// Brackets, braces and angle brackets.
    Delimiter,
    /// Separators like `,`, `;` and `:`.
    Separator,
    /// Access markers like `.` and `::`.
    Access,
    /// Misc markers like `?`, `=` and `=>`.
    Marker,
}

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    // Separators
    Comma,
    Semicolon,
    Colon,

    // Access
    Dot,
    ColonColon,

    // Markers
    Question,
    Eq,
    FatArrow,

    // Delimiters
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    LAngle,
    RAngle,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
    pub category: PunctuationCategory,
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    info(PunctuationId::Comma, ",", PunctuationCategory::Separator),
    info(PunctuationId::Semicolon, ";", PunctuationCategory::Separator),
    info(PunctuationId::Colon, ":", PunctuationCategory::Separator),
    info(PunctuationId::Dot, ".", PunctuationCategory::Access),
    info(PunctuationId::ColonColon, "::", PunctuationCategory::Access),
    info(PunctuationId::Question, "?", PunctuationCategory::Marker),
    info(PunctuationId::Eq, "=", PunctuationCategory::Marker),
    info(PunctuationId::FatArrow, "=>", PunctuationCategory::Marker),
    info(PunctuationId::LParen, "(", PunctuationCategory::Delimiter),
    info(PunctuationId::RParen, ")", PunctuationCategory::Delimiter),
    info(PunctuationId::LBracket, "[", PunctuationCategory::Delimiter),
    info(PunctuationId::RBracket, "]", PunctuationCategory::Delimiter),
    info(PunctuationId::LBrace, "{", PunctuationCategory::Delimiter),
    info(PunctuationId::RBrace, "}", PunctuationCategory::Delimiter),
    info(PunctuationId::LAngle, "<", PunctuationCategory::Delimiter),
    info(PunctuationId::RAngle, ">", PunctuationCategory::Delimiter),
];

/// Canonical spelling.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: PunctuationId) -> PunctuationCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    PUNCTUATION
        .iter()
        .find(|p| p.id == id)
        .expect("punctuation info missing")
}

/// Lookup by spelling.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == s).map(|p| p.id)
}

/// Return the closing delimiter that pairs with an opening one.
///
/// ## Returns
/// - `Some(closer)` for `(`, `[` and `{`; `None` for everything else (angle brackets are not balanced by the
///   skipper because `<` is also a comparison in expression position).
pub fn closer_for(open: PunctuationId) -> Option<PunctuationId> {
    match open {
        PunctuationId::LParen => Some(PunctuationId::RParen),
        PunctuationId::LBracket => Some(PunctuationId::RBracket),
        PunctuationId::LBrace => Some(PunctuationId::RBrace),
        _ => None,
    }
}

const fn info(id: PunctuationId, canonical: &'static str, category: PunctuationCategory) -> PunctuationInfo {
    PunctuationInfo { id, canonical, category }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spellings_round_trip() {
        for p in PUNCTUATION {
            assert_eq!(from_str(p.canonical), Some(p.id));
        }
    }

    #[test]
    fn only_round_brackets_braces_and_square_brackets_pair_up() {
        assert_eq!(closer_for(PunctuationId::LBrace), Some(PunctuationId::RBrace));
        assert_eq!(closer_for(PunctuationId::LAngle), None);
        assert_eq!(category(PunctuationId::LAngle), PunctuationCategory::Delimiter);
    }
}
