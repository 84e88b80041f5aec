#![forbid(unsafe_code)]
//! Rill language tooling
//!
//! Rill is a small imperative teaching language (`begin … end` blocks,
//! `if`/`while`/`do … until`/`for` statements, procedure calls). This crate
//! provides the command-line driver over the `rill_syntax` frontend: lexing a
//! source file, running the syntax analyser, and rendering derivation traces,
//! parse trees, or diagnostics.
//!
//! The analyser validates only — no semantic analysis, no code generation,
//! and no error recovery: a run stops at the first diverging token.

pub mod cli;

pub use rill_syntax::diagnostics;
pub use rill_syntax::events;
pub use rill_syntax::lexer;
pub use rill_syntax::parser;
pub use rill_syntax::tokens;
