//! Pretty-printer for generated test sources
//!
//! Prints a [`crate::scaffold::ir::IrCompilationUnit`] with normalized formatting. The output never depends on the
//! layout of the scanned source: the same output tree always prints to the same bytes for a given
//! [`FormatConfig`].

mod config;
mod formatter;
mod writer;

pub use config::{FormatConfig, LineEnding};
pub use formatter::{Formatter, render_expr, render_stmt};

use crate::scaffold::ir::IrCompilationUnit;

/// Format a compilation unit with the given configuration
pub fn format_unit(unit: &IrCompilationUnit, config: &FormatConfig) -> String {
    Formatter::new(config.clone()).format(unit)
}
