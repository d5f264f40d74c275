//! Syntax frontend for the testgen scaffolder: lexer, declaration parser, arena syntax tree, diagnostics.
//!
//! This crate is dependency-light and has no notion of tests, mocks or output layout. It turns source text into a
//! [`tree::SyntaxTree`] whose nodes are declarations (namespaces, usings, types and their members) with parent links,
//! which is everything the scaffold engine needs to inspect.
//!
//! ## Notes
//! - This crate is intentionally "declarations-only": member bodies and initializers are lexed and skipped with
//!   bracket matching, never parsed.
//! - Vocabulary identity (keywords/operators/punctuation) comes from `testgen_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use testgen_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("namespace Shop { public class Cart { } }").unwrap();
//! let tree = parser::parse(&tokens).unwrap();
//! assert_eq!(tree.type_declarations().count(), 1);
//! ```
//!
//! ## See also
//! - `testgen_core::lang` for registry-backed language vocabulary.

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
pub mod tree;

pub use diagnostics::CompileError;
pub use tree::SyntaxTree;

/// Lex and parse `source` in one step.
///
/// ## Errors
/// Returns every lexer error, or the first parser error, as [`CompileError`]s.
pub fn parse_source(source: &str) -> Result<SyntaxTree, Vec<CompileError>> {
    let tokens = lexer::lex(source)?;
    parser::parse(&tokens)
}
