/// Token-stream helpers.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `advance`)
/// - Matching / expecting keywords, operators, and punctuation
/// - Span bookkeeping (`current_span`, `previous_span`)
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` if the current token is [`TokenKind::Eof`].
    fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    /// Return the current token without consuming it.
    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Return the token after the current token without consuming it.
    fn peek_next(&self) -> &Token {
        self.peek_at(1)
    }

    /// Return the token `offset` positions ahead, clamped to the trailing `Eof`.
    fn peek_at(&self, offset: usize) -> &Token {
        let index = (self.pos + offset).min(self.tokens.len() - 1);
        &self.tokens[index]
    }

    /// Advance to the next token and return the token we just consumed.
    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.pos += 1;
        }
        &self.tokens[self.pos.saturating_sub(1)]
    }

    /// Return `true` if the current token is the given keyword.
    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek().kind.is_keyword(id)
    }

    /// Return `true` if the current token is an identifier spelled like the given contextual keyword.
    fn check_contextual(&self, id: KeywordId) -> bool {
        self.peek().kind.is_contextual(id)
    }

    /// Return `true` if the current token is the given punctuation.
    fn check_punct(&self, id: PunctuationId) -> bool {
        self.peek().kind.is_punctuation(id)
    }

    /// Return `true` if the current token is the given operator.
    fn check_op(&self, id: OperatorId) -> bool {
        self.peek().kind.is_operator(id)
    }

    /// Return `true` if the current token is an identifier.
    fn check_ident(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Ident(_))
    }

    fn match_keyword(&mut self, id: KeywordId) -> bool {
        if self.check_keyword(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_punct(&mut self, id: PunctuationId) -> bool {
        if self.check_punct(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect_keyword(&mut self, id: KeywordId, msg: &str) -> Result<&Token, CompileError> {
        if self.check_keyword(id) {
            Ok(self.advance())
        } else {
            Err(self.error_here(msg))
        }
    }

    fn expect_punct(&mut self, id: PunctuationId, msg: &str) -> Result<&Token, CompileError> {
        if self.check_punct(id) {
            Ok(self.advance())
        } else {
            Err(self.error_here(msg))
        }
    }

    /// Build a syntax error at the current token: `"{msg}, found {token}"`.
    fn error_here(&self, msg: &str) -> CompileError {
        CompileError::syntax(
            format!("{}, found {}", msg, describe(&self.peek().kind)),
            self.current_span(),
        )
    }

    fn current_span(&self) -> Span {
        self.peek().span
    }

    /// Span of the most recently consumed token.
    fn previous_span(&self) -> Span {
        if self.pos == 0 {
            self.current_span()
        } else {
            self.tokens[self.pos - 1].span
        }
    }

    /// Span from `start` through the most recently consumed token.
    fn span_from(&self, start: Span) -> Span {
        start.merge(self.previous_span())
    }
}

/// Human-readable token description for diagnostics.
fn describe(kind: &TokenKind) -> String {
    match kind {
        TokenKind::Keyword(id) => format!("keyword `{}`", keywords::as_str(*id)),
        TokenKind::Operator(id) => format!("`{}`", testgen_core::lang::operators::as_str(*id)),
        TokenKind::Punctuation(id) => format!("`{}`", punctuation::as_str(*id)),
        TokenKind::Ident(name) => format!("identifier `{}`", name),
        TokenKind::Number(raw) => format!("number `{}`", raw),
        TokenKind::String(_) => "string literal".to_string(),
        TokenKind::Char(_) => "character literal".to_string(),
        TokenKind::Eof => "end of file".to_string(),
    }
}
