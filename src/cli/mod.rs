//! CLI module for the testgen scaffolder
//!
//! This module provides the command-line interface:
//!
//! ```text
//! testgen <INPUTS> <OUTPUT_DIR> <READ> <GENERATE> <WRITE> [OPTIONS]
//! ```
//!
//! `INPUTS` is a pipe-separated list of source files (`src/A.cs|src/B.cs`); `READ`, `GENERATE` and `WRITE` size the
//! three worker pools and must be at least 1.
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use testgen_core::lang::conventions;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
    pub const USAGE: ExitCode = ExitCode(2);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }

    /// Create a usage error (exit code 2); nothing has been done yet.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::USAGE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Generate NUnit test scaffolds for the public classes of C# sources
#[derive(Parser, Debug)]
#[command(name = "testgen")]
#[command(version = VERSION)]
#[command(about = "Generate NUnit test scaffolds for the public classes of C# sources", long_about = None)]
pub struct Cli {
    /// Pipe-separated source files (`src/A.cs|src/B.cs`)
    #[arg(value_name = "INPUTS")]
    pub inputs: String,

    /// Directory receiving one `<Namespace>.Tests.<Class>Tests` file per class
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Number of concurrent file readers
    #[arg(value_name = "READ", value_parser = clap::value_parser!(u32).range(1..))]
    pub read_workers: u32,

    /// Number of concurrent generators
    #[arg(value_name = "GENERATE", value_parser = clap::value_parser!(u32).range(1..))]
    pub generate_workers: u32,

    /// Number of concurrent file writers
    #[arg(value_name = "WRITE", value_parser = clap::value_parser!(u32).range(1..))]
    pub write_workers: u32,

    /// Extension of generated files
    #[arg(long, value_name = "EXT", default_value = conventions::SOURCE_EXTENSION)]
    pub extension: String,

    /// Capacity of each queue between stages
    #[arg(long, value_name = "N", default_value_t = 64, value_parser = clap::value_parser!(u32).range(1..))]
    pub queue_capacity: u32,

    /// Skip files that fail instead of stopping the run
    #[arg(long)]
    pub keep_going: bool,

    /// Message of the `Assert.Fail` closing every generated test
    #[arg(long, value_name = "TEXT", default_value = conventions::DEFAULT_FAIL_MARKER)]
    pub fail_marker: String,

    /// Leading character of interface names; such constructor dependencies are mocked
    #[arg(long, value_name = "CHAR", default_value_t = conventions::INTERFACE_MARKER)]
    pub interface_prefix: char,

    /// Spaces per indentation level in generated files
    #[arg(long, value_name = "WIDTH", default_value_t = 4)]
    pub indent: usize,

    /// Write CRLF line endings
    #[arg(long)]
    pub crlf: bool,
}

impl Cli {
    /// Input paths from the pipe-separated list; empty entries are ignored.
    pub fn input_paths(&self) -> Vec<PathBuf> {
        split_inputs(&self.inputs)
    }
}

/// Split a pipe-separated path list, dropping empty entries.
pub fn split_inputs(list: &str) -> Vec<PathBuf> {
    list.split('|').filter(|s| !s.is_empty()).map(PathBuf::from).collect()
}

/// Parse command-line arguments; clap errors become usage errors (help and version exit with 0).
pub fn parse_args<I, T>(args: I) -> CliResult<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|e| {
        let code = if e.use_stderr() { ExitCode::USAGE } else { ExitCode::SUCCESS };
        CliError::new(e.render().to_string(), code)
    })
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    match parse_args(std::env::args_os()).and_then(execute) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) if e.exit_code == ExitCode::SUCCESS => {
            print!("{}", e.message);
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message.trim_end());
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    commands::scaffold(&cli)
}

// ============================================================================
// Tests
// ============================================================================
