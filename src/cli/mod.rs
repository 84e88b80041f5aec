//! CLI module for the Rill driver
//!
//! ## Commands
//!
//! - `check <file>` - Lex and parse, reporting the first syntax error
//! - `trace <file>` - Print the derivation as an indented event trace
//! - `tree <file>` - Print the parse tree
//! - `tokens <file>` - Dump the token stream (debug)
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Only the top-level `run()` function handles errors and
//! exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use thiserror::Error;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug, Error)]
#[error("{message}")]
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
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// The Rill syntax analyser
#[derive(Parser, Debug)]
#[command(name = "rill")]
#[command(version = VERSION)]
#[command(about = "Syntax analyser for the Rill teaching language", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// File to check (default action when no subcommand given)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Lex and parse a source file, reporting the first syntax error
    Check {
        /// Source file to check
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print the derivation as an indented event trace
    Trace {
        /// Source file to trace
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print the parse tree of a source file
    Tree {
        /// Source file to parse
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Dump the token stream (debug)
    Tokens {
        /// Source file to tokenize
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Some(Command::Check { file }) => commands::check_file(&file.to_string_lossy()),
        Some(Command::Trace { file }) => commands::trace_file(&file.to_string_lossy()),
        Some(Command::Tree { file }) => commands::tree_file(&file.to_string_lossy()),
        Some(Command::Tokens { file }) => commands::dump_tokens(&file.to_string_lossy()),
        None => {
            // Default: check the file if provided
            if let Some(file) = cli.file {
                commands::check_file(&file.to_string_lossy())
            } else {
                // No command and no file - show help
                Err(CliError::failure(
                    "No input file. Try `rill --help` for usage.",
                ))
            }
        }
    }
}
