#![forbid(unsafe_code)]
//! Unit-test scaffold generator for C# sources
//!
//! Reads source files, finds every public top-level class and writes a compiling NUnit fixture skeleton for it:
//! mocked dependencies, a setup method and one Arrange/Act/Assert test per public method, each ending in an
//! `Assert.Fail` marker.
//!
//! - `frontend`: lexer, declaration parser and syntax tree (from `testgen_syntax`)
//! - `scaffold`: the generation engine and its output tree
//! - `format`: pretty-printer for generated sources
//! - `pipeline`: concurrent read/generate/write worker pools
//! - `cli`: command-line surface
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `pipeline` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a logic error, use `.expect("INVARIANT: reason")` with a clear
//!   explanation.

pub mod cli;
pub mod format;
pub mod frontend;
pub mod pipeline;
pub mod scaffold;

pub use frontend::{ast, diagnostics, lexer, parser, tree};

pub use format::{FormatConfig, LineEnding, format_unit};
pub use pipeline::{FaultPolicy, Pipeline, PipelineConfig, PipelineError, PipelineReport};
pub use scaffold::{GeneratedTest, InterfacePrefix, MockPolicy, ParseError, ScaffoldConfig, ScaffoldEngine};
