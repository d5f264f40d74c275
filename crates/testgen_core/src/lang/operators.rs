//! Operator vocabulary.
//!
//! Declarations never contain operators, but initializers and member bodies do, and the lexer must
//! tokenize them faithfully so the parser can skip those regions with bracket matching.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and exact; the lexer performs longest-match by trying
//!   [`MAX_SPELLING_LEN`] characters first.
//! - No operator starts with `>`. Shift-right and `>=` lex as separate `>` tokens.
//!
//! ## Examples
//! ```rust
//! use testgen_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("??="), Some(OperatorId::QuestionQuestionEq));
//! assert_eq!(operators::from_str(">="), None);
//! ```

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Bang,
    Tilde,
    Amp,
    Pipe,
    Caret,
    EqEq,
    NotEq,
    LtEq,
    Shl,
    AndAnd,
    OrOr,
    PlusPlus,
    MinusMinus,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    PercentEq,
    AmpEq,
    PipeEq,
    CaretEq,
    ShlEq,
    QuestionQuestion,
    QuestionQuestionEq,
    QuestionDot,
    Arrow,
    DotDot,
    Hash,
    At,
    Dollar,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
}

/// Longest operator or punctuation spelling, in characters.
pub const MAX_SPELLING_LEN: usize = 3;

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    op(OperatorId::Plus, "+"),
    op(OperatorId::Minus, "-"),
    op(OperatorId::Star, "*"),
    op(OperatorId::Slash, "/"),
    op(OperatorId::Percent, "%"),
    op(OperatorId::Bang, "!"),
    op(OperatorId::Tilde, "~"),
    op(OperatorId::Amp, "&"),
    op(OperatorId::Pipe, "|"),
    op(OperatorId::Caret, "^"),
    op(OperatorId::EqEq, "=="),
    op(OperatorId::NotEq, "!="),
    op(OperatorId::LtEq, "<="),
    op(OperatorId::Shl, "<<"),
    op(OperatorId::AndAnd, "&&"),
    op(OperatorId::OrOr, "||"),
    op(OperatorId::PlusPlus, "++"),
    op(OperatorId::MinusMinus, "--"),
    op(OperatorId::PlusEq, "+="),
    op(OperatorId::MinusEq, "-="),
    op(OperatorId::StarEq, "*="),
    op(OperatorId::SlashEq, "/="),
    op(OperatorId::PercentEq, "%="),
    op(OperatorId::AmpEq, "&="),
    op(OperatorId::PipeEq, "|="),
    op(OperatorId::CaretEq, "^="),
    op(OperatorId::ShlEq, "<<="),
    op(OperatorId::QuestionQuestion, "??"),
    op(OperatorId::QuestionQuestionEq, "??="),
    op(OperatorId::QuestionDot, "?."),
    op(OperatorId::Arrow, "->"),
    op(OperatorId::DotDot, ".."),
    op(OperatorId::Hash, "#"),
    op(OperatorId::At, "@"),
    op(OperatorId::Dollar, "$"),
];

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Canonical spelling.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Lookup by exact spelling.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

const fn op(id: OperatorId, spelling: &'static str) -> OperatorInfo {
    OperatorInfo { id, spelling }
}
