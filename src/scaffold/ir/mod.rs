//! Output tree for generated test sources.
//!
//! The scaffold engine builds one [`IrCompilationUnit`] per class under test; the formatter
//! (`crate::format`) prints it. The tree only models what generated fixtures contain: using
//! directives, nested namespaces, one attributed class with fields and methods, and a handful of
//! statement and expression forms.
//!
//! ## Pipeline
//!
//! ```text
//! source → SyntaxTree → scaffold (IR) → format → test source
//! ```

pub mod decl;
pub mod expr;
pub mod stmt;

pub use decl::{IrAttribute, IrClass, IrClassMember, IrCompilationUnit, IrField, IrMember, IrMethod, IrNamespace};
pub use expr::{IrArg, IrExpr};
pub use stmt::{IrLocalType, IrStmt};
