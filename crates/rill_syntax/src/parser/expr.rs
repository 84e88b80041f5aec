/// Condition and arithmetic-expression rules.
impl<'e, S: TokenSource, E: ParseEvents> Parser<'e, S, E> {
    // ========================================================================
    // Conditions
    // ========================================================================

    /// `Condition -> identifier ConditionalOperator ( identifier | number | string )`
    ///
    /// Exactly one comparison; the grammar does not permit chaining.
    fn condition(&mut self) -> ParseResult<()> {
        self.rule("Condition", |p| {
            p.accept(TokenKind::Identifier)?;
            p.conditional_operator()?;
            match p.lookahead.kind {
                TokenKind::Identifier | TokenKind::Number | TokenKind::StringLit => {
                    p.accept(p.lookahead.kind)?;
                    Ok(())
                }
                _ => Err(p.unexpected_choice("a condition operand", &CONDITION_OPERANDS)),
            }
        })
    }

    /// `ConditionalOperator -> = | != | < | <= | > | >=`
    fn conditional_operator(&mut self) -> ParseResult<()> {
        self.rule("ConditionalOperator", |p| {
            if p.lookahead.kind.is_comparison() {
                p.accept(p.lookahead.kind)?;
                Ok(())
            } else {
                Err(p.unexpected_choice("a comparison operator", &COMPARISON_OPERATORS))
            }
        })
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    /// `Expression -> Term ( (+|-) Term )*`
    fn expression(&mut self) -> ParseResult<()> {
        self.rule("Expression", |p| {
            p.term()?;
            while matches!(p.lookahead.kind, TokenKind::Plus | TokenKind::Minus) {
                p.accept(p.lookahead.kind)?;
                p.term()?;
            }
            Ok(())
        })
    }

    /// `Term -> Factor ( (*|/|%) Factor )*`
    fn term(&mut self) -> ParseResult<()> {
        self.rule("Term", |p| {
            p.factor()?;
            while matches!(
                p.lookahead.kind,
                TokenKind::Star | TokenKind::Slash | TokenKind::Percent
            ) {
                p.accept(p.lookahead.kind)?;
                p.factor()?;
            }
            Ok(())
        })
    }

    /// `Factor -> identifier | number | ( Expression )`
    fn factor(&mut self) -> ParseResult<()> {
        self.rule("Factor", |p| match p.lookahead.kind {
            TokenKind::Identifier => {
                p.accept(TokenKind::Identifier)?;
                Ok(())
            }
            TokenKind::Number => {
                p.accept(TokenKind::Number)?;
                Ok(())
            }
            TokenKind::LParen => {
                p.accept(TokenKind::LParen)?;
                p.expression()?;
                p.accept(TokenKind::RParen)?;
                Ok(())
            }
            _ => Err(p.unexpected_choice("the start of a factor", &FACTOR_LEADERS)),
        })
    }
}
