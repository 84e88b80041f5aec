//! Diagnostics for the Rill frontend.
//!
//! Two error families live here:
//! - [`ScanError`]: lexical problems, reported by the lexer before any
//!   parsing happens.
//! - [`ParseError`]: the single "unexpected token" syntax error, wrapped in
//!   one [`ParseError::InRule`] frame per grammar rule it unwinds through.
//!   The `#[source]` chain is the breadcrumb trail: outermost rule first,
//!   root cause (with the offending token) last.

use std::io;

use miette::Diagnostic;
use thiserror::Error;

use crate::tokens::Token;

/// A lexical error. These never reach the syntax analyser; `lex` collects
/// them and fails the run before parsing starts.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ScanError {
    #[error("line {line}: unrecognised character {ch:?}")]
    #[diagnostic(code(rill::scan::unrecognised_character))]
    UnrecognisedCharacter { ch: char, line: u32 },

    #[error("line {line}: unterminated string literal")]
    #[diagnostic(code(rill::scan::unterminated_string))]
    UnterminatedString { line: u32 },
}

/// A syntax error raised by the analyser.
#[derive(Debug, Error, Diagnostic)]
pub enum ParseError {
    /// The root cause: the lookahead token did not satisfy the grammar.
    /// Constructed exactly once per failing parse, at the point of
    /// divergence, and never altered while unwinding.
    #[error("line {line}: unexpected {found}: {message}", line = .found.line)]
    #[diagnostic(code(rill::parse::unexpected_token))]
    UnexpectedToken { found: Token, message: String },

    /// Breadcrumb frame added by each rule procedure the error unwinds
    /// through. The original cause is preserved in `cause`.
    #[error("error in {rule}")]
    #[diagnostic(code(rill::parse::error_in_rule))]
    InRule {
        rule: &'static str,
        #[source]
        cause: Box<ParseError>,
    },

    /// The notification sink failed while the analyser was emitting events.
    #[error("failed to write parse events")]
    #[diagnostic(code(rill::parse::emit_failed))]
    Emit(#[from] io::Error),
}

impl ParseError {
    /// Construct the root "unexpected token" error.
    pub fn unexpected(found: Token, message: impl Into<String>) -> Self {
        ParseError::UnexpectedToken {
            found,
            message: message.into(),
        }
    }

    /// Wrap `cause` in a breadcrumb frame for the named rule.
    pub fn in_rule(rule: &'static str, cause: ParseError) -> Self {
        ParseError::InRule {
            rule,
            cause: Box::new(cause),
        }
    }

    /// Follow the breadcrumb chain down to the root error.
    pub fn root_cause(&self) -> &ParseError {
        match self {
            ParseError::InRule { cause, .. } => cause.root_cause(),
            other => other,
        }
    }

    /// The token at the point of divergence, if this is a syntax error.
    pub fn offending_token(&self) -> Option<&Token> {
        match self.root_cause() {
            ParseError::UnexpectedToken { found, .. } => Some(found),
            _ => None,
        }
    }

    /// Rule names along the breadcrumb chain, outermost first.
    pub fn rule_trail(&self) -> Vec<&'static str> {
        let mut trail = Vec::new();
        let mut err = self;
        while let ParseError::InRule { rule, cause } = err {
            trail.push(*rule);
            err = cause;
        }
        trail
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::TokenKind;

    #[test]
    fn breadcrumbs_preserve_the_root_cause() {
        let found = Token::new(TokenKind::End, 4);
        let root = ParseError::unexpected(found.clone(), "expected identifier");
        let wrapped = ParseError::in_rule(
            "StatementList",
            ParseError::in_rule("Statement", root),
        );

        assert_eq!(wrapped.rule_trail(), vec!["StatementList", "Statement"]);
        assert_eq!(wrapped.offending_token(), Some(&found));
        assert_eq!(
            wrapped.root_cause().to_string(),
            "line 4: unexpected 'end': expected identifier"
        );
    }

    #[test]
    fn emit_errors_have_no_offending_token() {
        let err = ParseError::from(io::Error::new(io::ErrorKind::BrokenPipe, "pipe"));
        assert!(err.offending_token().is_none());
        assert!(err.rule_trail().is_empty());
    }
}
