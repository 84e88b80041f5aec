/// Analyser core: token source, lookahead cursor, and the two primitives
/// every rule procedure is built from.
///
/// ## Notes
/// - [`Parser::accept`] is the only place the cursor advances and the only
///   place `accepted_terminal` notifications are emitted.
/// - [`Parser::rule`] owns the enter/exit notifications and the breadcrumb
///   wrapping; rule bodies never touch the sink directly.

/// Supplies classified tokens one at a time.
///
/// Once the underlying input is exhausted this must keep returning `Eof`
/// tokens; it never fails. Grammar violations at end of input surface as
/// ordinary parse errors because `Eof` matches nothing the grammar expects.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

/// [`TokenSource`] over a lexed token slice.
pub struct TokenStream<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> TokenStream<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }
}

impl TokenSource for TokenStream<'_> {
    fn next_token(&mut self) -> Token {
        match self.tokens.get(self.pos) {
            Some(token) => {
                self.pos += 1;
                token.clone()
            }
            // The lexer always ends the slice with Eof; keep echoing it for
            // callers that pull past the end.
            None => {
                let line = self.tokens.last().map_or(1, |t| t.line);
                Token::new(TokenKind::Eof, line)
            }
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

/// The syntax analyser: token source, notification sink, and the single
/// lookahead token.
///
/// A parser is good for exactly one run; construct a fresh one (re-priming
/// the lookahead) to analyse again.
pub struct Parser<'e, S, E> {
    source: S,
    events: &'e mut E,
    lookahead: Token,
}

impl<'e, S: TokenSource, E: ParseEvents> Parser<'e, S, E> {
    /// Create an analyser and prime the lookahead with the first token.
    pub fn new(mut source: S, events: &'e mut E) -> Self {
        let lookahead = source.next_token();
        Self {
            source,
            events,
            lookahead,
        }
    }

    /// The current unconsumed token.
    pub fn lookahead(&self) -> &Token {
        &self.lookahead
    }

    // ========================================================================
    // Primitives
    // ========================================================================

    /// Run a rule body between `enter_rule`/`exit_rule` notifications.
    ///
    /// `exit_rule` fires on the success path only; a failing body instead
    /// gets its error wrapped in an `InRule` breadcrumb for this rule.
    fn rule<T>(
        &mut self,
        name: &'static str,
        body: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        self.events.enter_rule(name)?;
        match body(self) {
            Ok(value) => {
                self.events.exit_rule(name)?;
                Ok(value)
            }
            Err(cause) => Err(ParseError::in_rule(name, cause)),
        }
    }

    /// Accept the expected terminal: notify the sink and advance the cursor.
    ///
    /// On mismatch the failure is routed through the sink's `report_error`
    /// and the enclosing rule aborts; the cursor does not move.
    fn accept(&mut self, expected: TokenKind) -> ParseResult<Token> {
        if self.lookahead.kind != expected {
            let message = format!("expected {}, found {}", expected, self.lookahead);
            return Err(self.events.report_error(&self.lookahead, message));
        }
        self.events.accepted_terminal(&self.lookahead)?;
        let next = self.source.next_token();
        Ok(std::mem::replace(&mut self.lookahead, next))
    }

    // ========================================================================
    // Lookahead helpers
    // ========================================================================

    /// `true` if the lookahead has the given kind (nothing is consumed).
    fn check(&self, kind: TokenKind) -> bool {
        self.lookahead.kind == kind
    }

    /// Consume the kind if it is the lookahead. Repetition points use this
    /// for their continuation symbol.
    fn match_kind(&mut self, kind: TokenKind) -> ParseResult<bool> {
        if self.check(kind) {
            self.accept(kind)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Report a choice-point divergence, listing the acceptable leading
    /// kinds.
    fn unexpected_choice(&mut self, context: &str, kinds: &[TokenKind]) -> ParseError {
        let mut list = String::new();
        for (i, kind) in kinds.iter().enumerate() {
            if i > 0 {
                list.push_str(if i + 1 == kinds.len() { " or " } else { ", " });
            }
            list.push_str(&kind.to_string());
        }
        let message = format!("expected {context} ({list}), found {}", self.lookahead);
        self.events.report_error(&self.lookahead, message)
    }
}
