//! Recursive-descent syntax analyser for the Rill language.
//!
//! One method per grammar nonterminal, validated against a single token of
//! lookahead. The analyser builds nothing itself; it narrates the derivation
//! to a [`ParseEvents`] sink and stops at the first point of divergence with
//! a [`ParseError`] whose cause chain records the rule procedures it unwound
//! through.
//!
//! ## Examples
//!
//! ```rust
//! use rill_syntax::{events::SilentEvents, lexer, parser};
//!
//! let tokens = lexer::lex("begin x := 1 end").unwrap();
//! parser::parse(&tokens, &mut SilentEvents).unwrap();
//! ```

use crate::diagnostics::ParseError;
use crate::events::ParseEvents;
use crate::tokens::{
    Token, TokenKind, COMPARISON_OPERATORS, CONDITION_OPERANDS, FACTOR_LEADERS, STATEMENT_LEADERS,
};

// NOTE: This module is split across multiple files using `include!` to keep all
// analyser methods in the same Rust module (preserving privacy + call patterns)
// while avoiding a single large source file.

include!("parser/core.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
