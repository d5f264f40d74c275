//! Provide the shared, pure vocabulary of the testgen scaffolder.
//!
//! This crate is intentionally small and dependency-free. It contains:
//! - the source-language vocabulary (reserved and contextual keywords, operators, punctuation), and
//! - the conventions of the test framework and mocking library that generated scaffolds reference.
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no global state, and no syntax-tree types.
//! - The lexer/parser in `testgen_syntax` enforce syntax; the registries here only provide spellings and
//!   metadata so the rest of the workspace never compares raw strings against keywords.
//!
//! ## Examples
//! ```rust
//! use testgen_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("namespace"), Some(KeywordId::Namespace));
//! assert_eq!(keywords::as_str(KeywordId::Public), "public");
//! ```

pub mod lang;
