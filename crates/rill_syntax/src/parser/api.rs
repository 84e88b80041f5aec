/// Run the analyser over a lexed token stream.
///
/// This is the main public entrypoint for parsing: it primes a fresh
/// lookahead cursor over `tokens`, invokes `StatementPart`, and narrates the
/// derivation to `events`.
///
/// ## Errors
/// Returns the first [`ParseError`], its cause chain naming every rule it
/// unwound through.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse<E: ParseEvents>(tokens: &[Token], events: &mut E) -> Result<(), ParseError> {
    Parser::new(TokenStream::new(tokens), events).parse_statement_part()
}
