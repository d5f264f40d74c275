//! Scaffolder frontend
//!
//! Syntax components are provided by the shared `testgen_syntax` crate:
//! - `lexer`: tokenization of source code
//! - `parser`: declarations-only parsing into a syntax tree
//! - `tree`: arena syntax tree with parent links
//! - `ast`: type references, modifiers, parameters and using directives
//! - `diagnostics`: error reporting

pub use testgen_syntax::{CompileError, SyntaxTree};
pub use testgen_syntax::{ast, diagnostics, lexer, parser, tree};

/// Lex and parse `source` into a syntax tree.
///
/// Lexical errors are reported all at once; parsing stops at the first syntax error.
pub fn parse_source(source: &str) -> Result<SyntaxTree, Vec<CompileError>> {
    testgen_syntax::parse_source(source)
}
