//! Lexer for the Rill language.
//!
//! Converts source text into the token stream consumed by the syntax
//! analyser. Handles:
//! - Reserved words and identifiers
//! - Unsigned integer literals
//! - Double-quoted string literals (no escape sequences, single line)
//! - One- and two-character operators (`:=`, `!=`, `<=`, `>=`, ...)
//!
//! The token vector always ends with exactly one `Eof` token. Lexical errors
//! are collected across the whole input and reported together; a failed lex
//! never reaches the analyser.

use std::iter::Peekable;
use std::str::Chars;

use crate::diagnostics::ScanError;
use crate::tokens::{Token, TokenKind};

/// Lexer state: a character cursor plus the 1-based current line.
struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    line: u32,
    tokens: Vec<Token>,
    errors: Vec<ScanError>,
}

/// Tokenize `source` into a stream ending with `Eof`.
///
/// ## Errors
/// Returns every lexical error found, in source order, if there are any.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, Vec<ScanError>> {
    Lexer::new(source).tokenize()
}

impl<'a> Lexer<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars().peekable(),
            line: 1,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    fn tokenize(mut self) -> Result<Vec<Token>, Vec<ScanError>> {
        while let Some(c) = self.peek() {
            self.scan_token(c);
        }
        self.tokens.push(Token::new(TokenKind::Eof, self.line));

        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.errors)
        }
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    /// Consume one character, keeping the line count current.
    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next();
        if c == Some('\n') {
            self.line += 1;
        }
        c
    }

    fn push(&mut self, kind: TokenKind) {
        self.tokens.push(Token::new(kind, self.line));
    }

    // ========================================================================
    // Scanning
    // ========================================================================

    fn scan_token(&mut self, c: char) {
        match c {
            _ if c.is_whitespace() => {
                self.bump();
            }
            _ if c.is_ascii_alphabetic() || c == '_' => self.scan_word(),
            _ if c.is_ascii_digit() => self.scan_number(),
            '"' => self.scan_string(),
            ';' => self.single(TokenKind::Semicolon),
            ',' => self.single(TokenKind::Comma),
            '(' => self.single(TokenKind::LParen),
            ')' => self.single(TokenKind::RParen),
            '+' => self.single(TokenKind::Plus),
            '-' => self.single(TokenKind::Minus),
            '*' => self.single(TokenKind::Star),
            '/' => self.single(TokenKind::Slash),
            '%' => self.single(TokenKind::Percent),
            '=' => self.single(TokenKind::Equal),
            // ':' and '!' are only valid as the start of ':=' / '!='
            ':' => self.compound(':', TokenKind::Becomes, None),
            '!' => self.compound('!', TokenKind::NotEqual, None),
            '<' => self.compound('<', TokenKind::LessEqual, Some(TokenKind::Less)),
            '>' => self.compound('>', TokenKind::GreaterEqual, Some(TokenKind::Greater)),
            _ => {
                self.errors.push(ScanError::UnrecognisedCharacter {
                    ch: c,
                    line: self.line,
                });
                self.bump();
            }
        }
    }

    fn single(&mut self, kind: TokenKind) {
        self.bump();
        self.push(kind);
    }

    /// Scan a character that forms `<c>=` (e.g. `:=`, `<=`). `alone` is the
    /// kind to emit when no `=` follows; `None` makes the bare character an
    /// error.
    fn compound(&mut self, c: char, with_eq: TokenKind, alone: Option<TokenKind>) {
        self.bump();
        if self.peek() == Some('=') {
            self.bump();
            self.push(with_eq);
        } else if let Some(kind) = alone {
            self.push(kind);
        } else {
            self.errors.push(ScanError::UnrecognisedCharacter {
                ch: c,
                line: self.line,
            });
        }
    }

    fn scan_word(&mut self) {
        let line = self.line;
        let mut word = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '_' {
                word.push(c);
                self.bump();
            } else {
                break;
            }
        }
        match TokenKind::keyword(&word) {
            Some(kind) => self.tokens.push(Token::new(kind, line)),
            None => self
                .tokens
                .push(Token::with_text(TokenKind::Identifier, word, line)),
        }
    }

    fn scan_number(&mut self) {
        let line = self.line;
        let mut digits = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                digits.push(c);
                self.bump();
            } else {
                break;
            }
        }
        self.tokens
            .push(Token::with_text(TokenKind::Number, digits, line));
    }

    fn scan_string(&mut self) {
        let line = self.line;
        self.bump(); // opening quote
        let mut text = String::new();
        loop {
            match self.peek() {
                Some('"') => {
                    self.bump();
                    self.tokens
                        .push(Token::with_text(TokenKind::StringLit, text, line));
                    return;
                }
                // Strings may not span lines; leave the newline for the
                // ordinary whitespace path so line counting stays right.
                Some('\n') | None => {
                    self.errors.push(ScanError::UnterminatedString { line });
                    return;
                }
                Some(c) => {
                    text.push(c);
                    self.bump();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn keywords_and_identifiers_are_distinguished() {
        assert_eq!(
            kinds("begin ended end"),
            vec![
                TokenKind::Begin,
                TokenKind::Identifier,
                TokenKind::End,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn two_character_operators_win_over_their_prefixes() {
        assert_eq!(
            kinds("x := 1 <= 2 >= 3 != 4 < 5 > 6"),
            vec![
                TokenKind::Identifier,
                TokenKind::Becomes,
                TokenKind::Number,
                TokenKind::LessEqual,
                TokenKind::Number,
                TokenKind::GreaterEqual,
                TokenKind::Number,
                TokenKind::NotEqual,
                TokenKind::Number,
                TokenKind::Less,
                TokenKind::Number,
                TokenKind::Greater,
                TokenKind::Number,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn line_numbers_are_one_based_and_track_newlines() {
        let tokens = lex("begin\n  x := 1\nend").unwrap();
        let lines: Vec<(TokenKind, u32)> = tokens.iter().map(|t| (t.kind, t.line)).collect();
        assert_eq!(
            lines,
            vec![
                (TokenKind::Begin, 1),
                (TokenKind::Identifier, 2),
                (TokenKind::Becomes, 2),
                (TokenKind::Number, 2),
                (TokenKind::End, 3),
                (TokenKind::Eof, 3),
            ]
        );
    }

    #[test]
    fn literals_keep_their_text() {
        let tokens = lex(r#"msg := "hello world""#).unwrap();
        assert_eq!(tokens[0].text.as_deref(), Some("msg"));
        assert_eq!(tokens[2].kind, TokenKind::StringLit);
        assert_eq!(tokens[2].text.as_deref(), Some("hello world"));
    }

    #[test]
    fn unterminated_string_is_a_scan_error() {
        let errs = lex("x := \"oops\ny := 1").unwrap_err();
        assert_eq!(errs, vec![ScanError::UnterminatedString { line: 1 }]);
    }

    #[test]
    fn bare_colon_and_unknown_characters_are_errors() {
        let errs = lex("x : 1 @").unwrap_err();
        assert_eq!(
            errs,
            vec![
                ScanError::UnrecognisedCharacter { ch: ':', line: 1 },
                ScanError::UnrecognisedCharacter { ch: '@', line: 1 },
            ]
        );
    }

    #[test]
    fn empty_input_is_just_eof() {
        let tokens = lex("").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
        assert_eq!(tokens[0].line, 1);
    }
}
