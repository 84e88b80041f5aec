/// Statement rules.
///
/// `StatementPart` is the top of the grammar; everything else is reached
/// from it. Rule bodies follow the three grammar shapes: sequences accept
/// terminals and child rules in order, choices dispatch on the lookahead
/// kind, repetitions loop on their continuation symbol.
impl<'e, S: TokenSource, E: ParseEvents> Parser<'e, S, E> {
    // ========================================================================
    // Statements
    // ========================================================================

    /// `StatementPart -> begin StatementList end`
    ///
    /// The only rule a driver invokes directly; success or failure here is
    /// the verdict for the whole analysis run.
    pub fn parse_statement_part(mut self) -> ParseResult<()> {
        self.statement_part()
    }

    fn statement_part(&mut self) -> ParseResult<()> {
        self.rule("StatementPart", |p| {
            p.accept(TokenKind::Begin)?;
            p.statement_list()?;
            p.accept(TokenKind::End)?;
            Ok(())
        })
    }

    /// `StatementList -> Statement ( ; Statement )*`
    fn statement_list(&mut self) -> ParseResult<()> {
        self.rule("StatementList", |p| {
            p.statement()?;
            while p.match_kind(TokenKind::Semicolon)? {
                p.statement()?;
            }
            Ok(())
        })
    }

    /// `Statement` — dispatch on the leading kind. An identifier can only
    /// begin an assignment, so one token of lookahead settles every
    /// alternative.
    fn statement(&mut self) -> ParseResult<()> {
        self.rule("Statement", |p| match p.lookahead.kind {
            TokenKind::Identifier => p.assignment_statement(),
            TokenKind::If => p.if_statement(),
            TokenKind::While => p.while_statement(),
            TokenKind::Call => p.procedure_statement(),
            TokenKind::Do => p.until_statement(),
            TokenKind::For => p.for_statement(),
            _ => Err(p.unexpected_choice("the start of a statement", &STATEMENT_LEADERS)),
        })
    }

    /// `AssignmentStatement -> identifier := ( string | Expression )`
    ///
    /// The right-hand side is a string literal exactly when the token after
    /// `:=` is one; there is no mixing of strings into expressions.
    fn assignment_statement(&mut self) -> ParseResult<()> {
        self.rule("AssignmentStatement", |p| {
            p.accept(TokenKind::Identifier)?;
            p.accept(TokenKind::Becomes)?;
            if p.check(TokenKind::StringLit) {
                p.accept(TokenKind::StringLit)?;
            } else {
                p.expression()?;
            }
            Ok(())
        })
    }

    /// `IfStatement -> if Condition then StatementList ( else StatementList )? end if`
    fn if_statement(&mut self) -> ParseResult<()> {
        self.rule("IfStatement", |p| {
            p.accept(TokenKind::If)?;
            p.condition()?;
            p.accept(TokenKind::Then)?;
            p.statement_list()?;
            if p.match_kind(TokenKind::Else)? {
                p.statement_list()?;
            }
            p.accept(TokenKind::End)?;
            p.accept(TokenKind::If)?;
            Ok(())
        })
    }

    /// `WhileStatement -> while Condition loop StatementList end loop`
    fn while_statement(&mut self) -> ParseResult<()> {
        self.rule("WhileStatement", |p| {
            p.accept(TokenKind::While)?;
            p.condition()?;
            p.accept(TokenKind::Loop)?;
            p.statement_list()?;
            p.accept(TokenKind::End)?;
            p.accept(TokenKind::Loop)?;
            Ok(())
        })
    }

    /// `ProcedureStatement -> call identifier ( ArgumentList )`
    fn procedure_statement(&mut self) -> ParseResult<()> {
        self.rule("ProcedureStatement", |p| {
            p.accept(TokenKind::Call)?;
            p.accept(TokenKind::Identifier)?;
            p.accept(TokenKind::LParen)?;
            p.argument_list()?;
            p.accept(TokenKind::RParen)?;
            Ok(())
        })
    }

    /// `UntilStatement -> do StatementList until Condition`
    fn until_statement(&mut self) -> ParseResult<()> {
        self.rule("UntilStatement", |p| {
            p.accept(TokenKind::Do)?;
            p.statement_list()?;
            p.accept(TokenKind::Until)?;
            p.condition()?;
            Ok(())
        })
    }

    /// `ForStatement -> for ( AssignmentStatement ; Condition ; AssignmentStatement ) do StatementList end loop`
    ///
    /// The initializer and increment are full assignment statements, reusing
    /// that rule.
    fn for_statement(&mut self) -> ParseResult<()> {
        self.rule("ForStatement", |p| {
            p.accept(TokenKind::For)?;
            p.accept(TokenKind::LParen)?;
            p.assignment_statement()?;
            p.accept(TokenKind::Semicolon)?;
            p.condition()?;
            p.accept(TokenKind::Semicolon)?;
            p.assignment_statement()?;
            p.accept(TokenKind::RParen)?;
            p.accept(TokenKind::Do)?;
            p.statement_list()?;
            p.accept(TokenKind::End)?;
            p.accept(TokenKind::Loop)?;
            Ok(())
        })
    }

    /// `ArgumentList -> identifier ( , identifier )*`
    fn argument_list(&mut self) -> ParseResult<()> {
        self.rule("ArgumentList", |p| {
            p.accept(TokenKind::Identifier)?;
            while p.match_kind(TokenKind::Comma)? {
                p.accept(TokenKind::Identifier)?;
            }
            Ok(())
        })
    }
}
