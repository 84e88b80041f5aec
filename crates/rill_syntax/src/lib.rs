//! Syntax frontend for the Rill teaching language: tokens, lexer,
//! recursive-descent analyser, and diagnostics.
//!
//! ## Notes
//! - This crate is intentionally "syntax-only": it validates a token stream
//!   against the grammar and narrates the derivation to a
//!   [`events::ParseEvents`] sink, but builds no semantic structures and
//!   attempts no recovery — analysis stops at the first divergence.
//! - Presentation is decoupled through the sink: the same analyser drives a
//!   textual echo, a parse-tree builder, or a silent validator.
//!
//! ## Examples
//! ```rust
//! use rill_syntax::{events::SilentEvents, lexer, parser};
//!
//! let tokens = lexer::lex("begin x := 1; call show(x) end").unwrap();
//! parser::parse(&tokens, &mut SilentEvents).unwrap();
//! ```

pub mod diagnostics;
pub mod events;
pub mod lexer;
pub mod parser;
pub mod tokens;
