//! Token types for the Rill lexer.
//!
//! The terminal vocabulary is a **closed enumeration**: one [`TokenKind`]
//! variant per reserved word, punctuation symbol, and operator, plus the
//! three text-bearing kinds (identifier, number, string) and end-of-input.
//!
//! ## Notes
//! - `TokenKind` is `Copy` and payload-free, so grammar choice points can
//!   match on it exhaustively; literal text lives on [`Token`] instead.
//! - Use the `*_LEADERS` constants when dispatching on the first token of an
//!   alternative — they are also what the determinism tests check.

use std::fmt;

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Reserved words ==========
    Begin,
    End,
    If,
    Then,
    Else,
    While,
    Loop,
    Call,
    Do,
    Until,
    For,

    // ========== Identifiers and literals ==========
    Identifier,
    Number,
    StringLit,

    // ========== Punctuation ==========
    /// `:=`
    Becomes,
    Semicolon,
    Comma,
    LParen,
    RParen,

    // ========== Arithmetic operators ==========
    Plus,
    Minus,
    Star,
    Slash,
    Percent,

    // ========== Comparison operators ==========
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,

    // ========== Special ==========
    Eof,
}

/// Kinds that may begin a `Statement`.
pub const STATEMENT_LEADERS: [TokenKind; 6] = [
    TokenKind::Identifier,
    TokenKind::If,
    TokenKind::While,
    TokenKind::Call,
    TokenKind::Do,
    TokenKind::For,
];

/// Kinds that may begin a `Factor`.
pub const FACTOR_LEADERS: [TokenKind; 3] =
    [TokenKind::Identifier, TokenKind::Number, TokenKind::LParen];

/// The comparison operators accepted by `ConditionalOperator`.
pub const COMPARISON_OPERATORS: [TokenKind; 6] = [
    TokenKind::Equal,
    TokenKind::NotEqual,
    TokenKind::Less,
    TokenKind::LessEqual,
    TokenKind::Greater,
    TokenKind::GreaterEqual,
];

/// Kinds accepted as the right-hand operand of a `Condition`.
pub const CONDITION_OPERANDS: [TokenKind; 3] =
    [TokenKind::Identifier, TokenKind::Number, TokenKind::StringLit];

impl TokenKind {
    /// Human spelling of the kind, as used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Begin => "begin",
            TokenKind::End => "end",
            TokenKind::If => "if",
            TokenKind::Then => "then",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::Loop => "loop",
            TokenKind::Call => "call",
            TokenKind::Do => "do",
            TokenKind::Until => "until",
            TokenKind::For => "for",
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::StringLit => "string",
            TokenKind::Becomes => ":=",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Equal => "=",
            TokenKind::NotEqual => "!=",
            TokenKind::Less => "<",
            TokenKind::LessEqual => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEqual => ">=",
            TokenKind::Eof => "end of input",
        }
    }

    /// Resolve an identifier spelling to a reserved-word kind, if reserved.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        Some(match text {
            "begin" => TokenKind::Begin,
            "end" => TokenKind::End,
            "if" => TokenKind::If,
            "then" => TokenKind::Then,
            "else" => TokenKind::Else,
            "while" => TokenKind::While,
            "loop" => TokenKind::Loop,
            "call" => TokenKind::Call,
            "do" => TokenKind::Do,
            "until" => TokenKind::Until,
            "for" => TokenKind::For,
            _ => return None,
        })
    }

    /// `true` for the kinds that carry literal text on their tokens.
    pub fn has_text(self) -> bool {
        matches!(
            self,
            TokenKind::Identifier | TokenKind::Number | TokenKind::StringLit
        )
    }

    /// `true` if this kind may begin a `Statement`.
    pub fn starts_statement(self) -> bool {
        STATEMENT_LEADERS.contains(&self)
    }

    /// `true` if this kind is one of the six comparison operators.
    pub fn is_comparison(self) -> bool {
        COMPARISON_OPERATORS.contains(&self)
    }
}

impl fmt::Display for TokenKind {
    /// Word kinds render bare (`identifier`), concrete symbols quoted (`';'`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Identifier | TokenKind::Number | TokenKind::StringLit | TokenKind::Eof => {
                f.write_str(self.name())
            }
            _ => write!(f, "'{}'", self.name()),
        }
    }
}

/// A classified lexical unit: kind, source line, and — for identifier,
/// number, and string tokens only — the literal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: Option<String>,
    pub line: u32,
}

impl Token {
    /// Construct a token for a kind with no literal text.
    pub fn new(kind: TokenKind, line: u32) -> Self {
        Self {
            kind,
            text: None,
            line,
        }
    }

    /// Construct an identifier/number/string token with its literal text.
    pub fn with_text(kind: TokenKind, text: impl Into<String>, line: u32) -> Self {
        Self {
            kind,
            text: Some(text.into()),
            line,
        }
    }
}

impl fmt::Display for Token {
    /// Text-bearing tokens render with their literal (`identifier 'x'`),
    /// everything else by kind alone.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.text {
            Some(text) => write!(f, "{} '{}'", self.kind.name(), text),
            None => write!(f, "{}", self.kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_resolution_covers_all_reserved_words() {
        for word in [
            "begin", "end", "if", "then", "else", "while", "loop", "call", "do", "until", "for",
        ] {
            let kind = TokenKind::keyword(word).unwrap();
            assert_eq!(kind.name(), word);
        }
        assert_eq!(TokenKind::keyword("begins"), None);
        assert_eq!(TokenKind::keyword("x"), None);
    }

    #[test]
    fn display_quotes_symbols_but_not_word_kinds() {
        assert_eq!(TokenKind::Semicolon.to_string(), "';'");
        assert_eq!(TokenKind::Begin.to_string(), "'begin'");
        assert_eq!(TokenKind::Identifier.to_string(), "identifier");
        assert_eq!(TokenKind::Eof.to_string(), "end of input");
    }

    #[test]
    fn token_display_includes_literal_text() {
        let tok = Token::with_text(TokenKind::Identifier, "x", 3);
        assert_eq!(tok.to_string(), "identifier 'x'");
        let tok = Token::new(TokenKind::Becomes, 3);
        assert_eq!(tok.to_string(), "':='");
    }

    #[test]
    fn exactly_the_literal_kinds_carry_text() {
        for kind in [TokenKind::Identifier, TokenKind::Number, TokenKind::StringLit] {
            assert!(kind.has_text());
        }
        for kind in [TokenKind::Begin, TokenKind::Becomes, TokenKind::Equal, TokenKind::Eof] {
            assert!(!kind.has_text());
        }
    }
}
