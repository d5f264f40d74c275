//! Declaration parser.
//!
//! Converts a token stream into a [`SyntaxTree`] of namespaces, using directives, type declarations and their
//! members. Member bodies, initializers, attribute arguments and base lists are skipped with bracket matching.
//!
//! ## Examples
//!
//! ```rust
//! use testgen_syntax::{lexer, parser};
//! use testgen_syntax::tree::NodeKind;
//!
//! let source = "namespace Shop { public class Cart { public int Count() => 0; } }";
//! let tokens = lexer::lex(source).unwrap();
//! let tree = parser::parse(&tokens).unwrap();
//! let (cart, _) = tree.type_declarations().next().unwrap();
//! assert!(matches!(tree.kind(tree.children(cart)[0]), NodeKind::Method(m) if m.name == "Count"));
//! ```

use crate::ast::*;
use crate::diagnostics::CompileError;
use crate::lexer::{Token, TokenKind};
use crate::tree::*;
use testgen_core::lang::keywords::{self, KeywordId};
use testgen_core::lang::operators::OperatorId;
use testgen_core::lang::punctuation::{self, PunctuationId};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/members.rs");
include!("parser/types.rs");
include!("parser/skip.rs");
include!("parser/util.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
