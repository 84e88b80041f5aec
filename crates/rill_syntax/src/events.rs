//! Parse-event sink: the analyser's only output channel.
//!
//! The analyser makes no presentation decisions itself; it narrates the
//! derivation to a [`ParseEvents`] implementation as it goes. Rule entry and
//! exit arrive in pre/post order, with each consumed terminal in between at
//! its derivation position.
//!
//! Implementations here:
//! - [`EchoEvents`]: indented textual derivation trace over any writer.
//! - [`TreeBuilder`]: assembles a [`ParseNode`] parse tree.
//! - [`SilentEvents`]: validation only, no output.

use std::fmt;
use std::io::{self, Write};

use crate::diagnostics::ParseError;
use crate::tokens::Token;

/// Notification sink driven by the syntax analyser.
///
/// ## Notes
/// - `exit_rule` fires only when the rule succeeded; an aborted rule never
///   exits.
/// - Any operation may fail (e.g. on I/O) and that failure aborts the parse.
pub trait ParseEvents {
    /// A rule procedure has been entered.
    fn enter_rule(&mut self, name: &str) -> Result<(), ParseError>;

    /// The named rule completed successfully.
    fn exit_rule(&mut self, name: &str) -> Result<(), ParseError>;

    /// A terminal matched the lookahead and was consumed.
    fn accepted_terminal(&mut self, token: &Token) -> Result<(), ParseError>;

    /// The lookahead diverged from the grammar. Builds (and may render) the
    /// propagating failure; called exactly once per failing parse, and the
    /// analyser aborts with the returned error.
    fn report_error(&mut self, token: &Token, message: String) -> ParseError {
        ParseError::unexpected(token.clone(), message)
    }
}

// ============================================================================
// Echo sink
// ============================================================================

/// Writes the derivation as an indented text trace.
///
/// Rules render as `<Name>` / `</Name>` pairs, terminals by their token
/// display (`identifier 'x'`, `':='`, ...).
pub struct EchoEvents<W: Write> {
    out: W,
    depth: usize,
}

impl<W: Write> EchoEvents<W> {
    pub fn new(out: W) -> Self {
        Self { out, depth: 0 }
    }

    /// Hand the writer back, e.g. to recover a buffer in tests.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: fmt::Arguments<'_>) -> io::Result<()> {
        writeln!(self.out, "{:indent$}{}", "", text, indent = self.depth * 2)
    }
}

impl<W: Write> ParseEvents for EchoEvents<W> {
    fn enter_rule(&mut self, name: &str) -> Result<(), ParseError> {
        self.line(format_args!("<{name}>"))?;
        self.depth += 1;
        Ok(())
    }

    fn exit_rule(&mut self, name: &str) -> Result<(), ParseError> {
        self.depth = self.depth.saturating_sub(1);
        self.line(format_args!("</{name}>"))?;
        Ok(())
    }

    fn accepted_terminal(&mut self, token: &Token) -> Result<(), ParseError> {
        self.line(format_args!("{token}"))?;
        Ok(())
    }

    fn report_error(&mut self, token: &Token, message: String) -> ParseError {
        if let Err(e) = writeln!(self.out, "error at line {}: {}", token.line, message) {
            return ParseError::from(e);
        }
        ParseError::unexpected(token.clone(), message)
    }
}

// ============================================================================
// Tree sink
// ============================================================================

/// A node of the parse tree produced by [`TreeBuilder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseNode {
    Rule {
        name: String,
        children: Vec<ParseNode>,
    },
    Terminal(Token),
}

impl ParseNode {
    /// The rule name, or `None` for terminals.
    pub fn rule_name(&self) -> Option<&str> {
        match self {
            ParseNode::Rule { name, .. } => Some(name),
            ParseNode::Terminal(_) => None,
        }
    }

    fn fmt_at(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        match self {
            ParseNode::Rule { name, children } => {
                writeln!(f, "{:indent$}{}", "", name, indent = depth * 2)?;
                for child in children {
                    child.fmt_at(f, depth + 1)?;
                }
                Ok(())
            }
            ParseNode::Terminal(token) => {
                writeln!(f, "{:indent$}{}", "", token, indent = depth * 2)
            }
        }
    }
}

impl fmt::Display for ParseNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_at(f, 0)
    }
}

/// Builds a [`ParseNode`] tree from the event stream.
///
/// After a successful parse the stack holds nothing and [`finish`] yields the
/// root; after a failed parse the partial frames are discarded.
///
/// [`finish`]: TreeBuilder::finish
#[derive(Debug, Default)]
pub struct TreeBuilder {
    stack: Vec<(String, Vec<ParseNode>)>,
    root: Option<ParseNode>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The completed tree, if a parse ran to success.
    pub fn finish(self) -> Option<ParseNode> {
        self.root
    }

    fn attach(&mut self, node: ParseNode) {
        match self.stack.last_mut() {
            Some((_, children)) => children.push(node),
            None => self.root = Some(node),
        }
    }
}

impl ParseEvents for TreeBuilder {
    fn enter_rule(&mut self, name: &str) -> Result<(), ParseError> {
        self.stack.push((name.to_string(), Vec::new()));
        Ok(())
    }

    fn exit_rule(&mut self, _name: &str) -> Result<(), ParseError> {
        // Balanced by the analyser's rule combinator; a bare exit would be a
        // driver bug, not a parse error.
        if let Some((name, children)) = self.stack.pop() {
            self.attach(ParseNode::Rule { name, children });
        }
        Ok(())
    }

    fn accepted_terminal(&mut self, token: &Token) -> Result<(), ParseError> {
        self.attach(ParseNode::Terminal(token.clone()));
        Ok(())
    }
}

// ============================================================================
// Silent sink
// ============================================================================

/// Sink for drivers that only want the success/failure verdict.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentEvents;

impl ParseEvents for SilentEvents {
    fn enter_rule(&mut self, _name: &str) -> Result<(), ParseError> {
        Ok(())
    }

    fn exit_rule(&mut self, _name: &str) -> Result<(), ParseError> {
        Ok(())
    }

    fn accepted_terminal(&mut self, _token: &Token) -> Result<(), ParseError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::TokenKind;

    #[test]
    fn echo_indents_by_rule_depth() {
        let mut echo = EchoEvents::new(Vec::new());
        echo.enter_rule("StatementPart").unwrap();
        echo.accepted_terminal(&Token::new(TokenKind::Begin, 1)).unwrap();
        echo.enter_rule("StatementList").unwrap();
        echo.exit_rule("StatementList").unwrap();
        echo.exit_rule("StatementPart").unwrap();

        let out = String::from_utf8(echo.into_inner()).unwrap();
        assert_eq!(
            out,
            "<StatementPart>\n  'begin'\n  <StatementList>\n  </StatementList>\n</StatementPart>\n"
        );
    }

    #[test]
    fn tree_builder_nests_children_under_their_rule() {
        let mut tree = TreeBuilder::new();
        tree.enter_rule("StatementPart").unwrap();
        tree.accepted_terminal(&Token::new(TokenKind::Begin, 1)).unwrap();
        tree.enter_rule("StatementList").unwrap();
        tree.exit_rule("StatementList").unwrap();
        tree.exit_rule("StatementPart").unwrap();

        let root = tree.finish().unwrap();
        assert_eq!(
            root,
            ParseNode::Rule {
                name: "StatementPart".into(),
                children: vec![
                    ParseNode::Terminal(Token::new(TokenKind::Begin, 1)),
                    ParseNode::Rule {
                        name: "StatementList".into(),
                        children: vec![],
                    },
                ],
            }
        );
    }

    #[test]
    fn tree_builder_without_success_has_no_root() {
        let mut tree = TreeBuilder::new();
        tree.enter_rule("StatementPart").unwrap();
        tree.accepted_terminal(&Token::new(TokenKind::Begin, 1)).unwrap();
        // No exit: the parse aborted inside the rule.
        assert!(tree.finish().is_none());
    }
}
