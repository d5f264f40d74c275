//! Source vocabulary registries and scaffold conventions.
//!
//! This module is the “front door” for language-level vocabulary: reserved keywords, contextual
//! keywords, operators and punctuation, plus the well-known names the generated tests use.
//!
//! The design goal is to avoid stringly-typed checks scattered across the lexer, parser and
//! scaffold engine. Callers work with **stable IDs** (e.g. `KeywordId`, `PunctuationId`) and look up
//! spellings via registry tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no syntax-tree types, no IO, no side effects.
//!
//! ## Examples
//! ```rust
//! use testgen_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str("=>"), Some(PunctuationId::FatArrow));
//! assert_eq!(punctuation::as_str(PunctuationId::Semicolon), ";");
//! ```

pub mod conventions;
pub mod keywords;
pub mod operators;
pub mod punctuation;
