//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::io::{self, Write};

use rill_syntax::diagnostics::{ParseError, ScanError};
use rill_syntax::events::{EchoEvents, SilentEvents, TreeBuilder};
use rill_syntax::tokens::Token;
use rill_syntax::{lexer, parser};

use super::{CliError, CliResult, ExitCode};

// ============================================================================
// Shared pipeline steps
// ============================================================================

fn read_source(path: &str) -> CliResult<String> {
    fs::read_to_string(path).map_err(|e| CliError::failure(format!("cannot read {path}: {e}")))
}

fn lex_source(path: &str, source: &str) -> CliResult<Vec<Token>> {
    lexer::lex(source).map_err(|errs| CliError::failure(render_scan_errors(path, &errs)))
}

fn render_scan_errors(path: &str, errs: &[ScanError]) -> String {
    let mut out = String::new();
    for err in errs {
        out.push_str(&format!("{path}: {:?}", miette::Report::new(err.clone())));
    }
    out.trim_end().to_string()
}

fn render_parse_error(path: &str, err: ParseError) -> String {
    format!("{path}: {:?}", miette::Report::new(err))
        .trim_end()
        .to_string()
}

// ============================================================================
// Commands
// ============================================================================

/// Lex and parse `path`, reporting the first syntax error if any.
pub fn check_file(path: &str) -> CliResult<ExitCode> {
    let source = read_source(path)?;
    let tokens = lex_source(path, &source)?;
    tracing::debug!(path, token_count = tokens.len(), "token stream ready");

    parser::parse(&tokens, &mut SilentEvents)
        .map_err(|e| CliError::failure(render_parse_error(path, e)))?;

    println!("{path}: ok");
    Ok(ExitCode::SUCCESS)
}

/// Print the derivation of `path` as an indented event trace.
pub fn trace_file(path: &str) -> CliResult<ExitCode> {
    let source = read_source(path)?;
    let tokens = lex_source(path, &source)?;

    let stdout = io::stdout();
    let mut echo = EchoEvents::new(stdout.lock());
    parser::parse(&tokens, &mut echo)
        .map_err(|e| CliError::failure(render_parse_error(path, e)))?;

    Ok(ExitCode::SUCCESS)
}

/// Parse `path` and print its parse tree.
pub fn tree_file(path: &str) -> CliResult<ExitCode> {
    let source = read_source(path)?;
    let tokens = lex_source(path, &source)?;

    let mut builder = TreeBuilder::new();
    parser::parse(&tokens, &mut builder)
        .map_err(|e| CliError::failure(render_parse_error(path, e)))?;

    // A successful parse always leaves exactly one root on the builder.
    if let Some(root) = builder.finish() {
        print!("{root}");
    }
    Ok(ExitCode::SUCCESS)
}

/// Dump the token stream of `path`, one token per line.
pub fn dump_tokens(path: &str) -> CliResult<ExitCode> {
    let source = read_source(path)?;
    let tokens = lex_source(path, &source)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for token in &tokens {
        writeln!(out, "line {:>3}: {token}", token.line)
            .map_err(|e| CliError::failure(format!("cannot write to stdout: {e}")))?;
    }
    Ok(ExitCode::SUCCESS)
}
