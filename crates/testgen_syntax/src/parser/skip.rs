/// Bracket-matched skipping of regions the tree does not model.
///
/// Member bodies, initializers, attribute argument lists, base lists and default values are consumed here
/// without being parsed. Only `()`, `[]` and `{}` are balanced: `<`/`>` double as comparison operators inside
/// expressions.
impl<'a> Parser<'a> {
    // ========================================================================
    // Groups
    // ========================================================================

    /// Skip any number of `[...]` attribute sections.
    fn skip_attributes(&mut self) -> Result<(), CompileError> {
        while self.check_punct(PunctuationId::LBracket) {
            self.skip_group()?;
        }
        Ok(())
    }

    /// Consume a balanced group starting at the current opening delimiter, through its matching closer.
    fn skip_group(&mut self) -> Result<(), CompileError> {
        let mut stack: Vec<(PunctuationId, Span)> = Vec::new();
        loop {
            let token = self.peek();
            let span = token.span;
            match &token.kind {
                TokenKind::Eof => return Err(unclosed(&stack, span)),
                TokenKind::Punctuation(p) => {
                    let p = *p;
                    if let Some(closer) = punctuation::closer_for(p) {
                        stack.push((closer, span));
                    } else if is_closer(p) {
                        pop_closer(&mut stack, p, span)?;
                    }
                    self.advance();
                    if stack.is_empty() {
                        return Ok(());
                    }
                }
                _ => {
                    if stack.is_empty() {
                        return Err(self.error_here("Expected `(`, `[` or `{`"));
                    }
                    self.advance();
                }
            }
        }
    }

    /// Skip a type's base list and constraint clauses, stopping before `{` or `;`.
    fn skip_type_header(&mut self) -> Result<(), CompileError> {
        loop {
            match &self.peek().kind {
                TokenKind::Eof => return Err(self.error_here("Expected `{` or `;` after type header")),
                TokenKind::Punctuation(PunctuationId::LBrace | PunctuationId::Semicolon) => return Ok(()),
                TokenKind::Punctuation(PunctuationId::LParen | PunctuationId::LBracket) => self.skip_group()?,
                TokenKind::Punctuation(p @ (PunctuationId::RParen | PunctuationId::RBracket | PunctuationId::RBrace)) => {
                    return Err(CompileError::syntax(
                        format!("Unexpected `{}` in type header", punctuation::as_str(*p)),
                        self.current_span(),
                    ));
                }
                _ => {
                    self.advance();
                }
            }
        }
    }

    // ========================================================================
    // Member tails
    // ========================================================================

    /// Skip the rest of a member declaration: constraints, initializers, bodies and accessor lists.
    ///
    /// The tail ends after a `;` at depth 0, or after a `}` that returns to depth 0 when no `=`/`=>` has been seen at
    /// depth 0 (a property accessor list may still be followed by `= initializer;`).
    fn skip_member_tail(&mut self) -> Result<(), CompileError> {
        self.skip_until_terminator(false)
    }

    /// Skip an initializer expression after `=`, through the terminating `;`.
    fn skip_initializer(&mut self) -> Result<(), CompileError> {
        self.skip_until_terminator(true)
    }

    fn skip_until_terminator(&mut self, mut expr_context: bool) -> Result<(), CompileError> {
        let mut stack: Vec<(PunctuationId, Span)> = Vec::new();
        loop {
            let token = self.peek();
            let span = token.span;
            let p = match &token.kind {
                TokenKind::Eof => {
                    if stack.is_empty() {
                        return Err(self.error_here("Expected `;` or `}` to end declaration"));
                    }
                    return Err(unclosed(&stack, span));
                }
                TokenKind::Punctuation(p) => *p,
                _ => {
                    self.advance();
                    continue;
                }
            };

            if let Some(closer) = punctuation::closer_for(p) {
                stack.push((closer, span));
                self.advance();
                continue;
            }

            if is_closer(p) {
                pop_closer(&mut stack, p, span)?;
                self.advance();
                if stack.is_empty() && p == PunctuationId::RBrace && !expr_context {
                    if self.match_punct(PunctuationId::Eq) {
                        expr_context = true;
                        continue;
                    }
                    return Ok(());
                }
                continue;
            }

            if stack.is_empty() {
                match p {
                    PunctuationId::Semicolon => {
                        self.advance();
                        return Ok(());
                    }
                    PunctuationId::Eq | PunctuationId::FatArrow => expr_context = true,
                    _ => {}
                }
            }
            self.advance();
        }
    }

    /// Skip a default parameter value, stopping before the `,` or `)` that ends it.
    fn skip_default_value(&mut self) -> Result<(), CompileError> {
        let mut stack: Vec<(PunctuationId, Span)> = Vec::new();
        loop {
            let token = self.peek();
            let span = token.span;
            match &token.kind {
                TokenKind::Eof => {
                    if stack.is_empty() {
                        return Err(self.error_here("Expected `,` or `)` after default value"));
                    }
                    return Err(unclosed(&stack, span));
                }
                TokenKind::Punctuation(p) => {
                    let p = *p;
                    if stack.is_empty() && matches!(p, PunctuationId::Comma | PunctuationId::RParen) {
                        return Ok(());
                    }
                    if let Some(closer) = punctuation::closer_for(p) {
                        stack.push((closer, span));
                    } else if is_closer(p) {
                        pop_closer(&mut stack, p, span)?;
                    }
                    self.advance();
                }
                _ => {
                    self.advance();
                }
            }
        }
    }
}

fn is_closer(p: PunctuationId) -> bool {
    matches!(p, PunctuationId::RParen | PunctuationId::RBracket | PunctuationId::RBrace)
}

/// Pop the innermost open group, which must be closed by `p`.
fn pop_closer(stack: &mut Vec<(PunctuationId, Span)>, p: PunctuationId, span: Span) -> Result<(), CompileError> {
    match stack.pop() {
        Some((expected, _)) if expected == p => Ok(()),
        Some((expected, open)) => Err(CompileError::syntax(
            format!(
                "Mismatched `{}`, expected `{}`",
                punctuation::as_str(p),
                punctuation::as_str(expected)
            ),
            span,
        )
        .with_note(format!("group opened at byte {}", open.start))),
        None => Err(CompileError::syntax(
            format!("Unexpected `{}`", punctuation::as_str(p)),
            span,
        )),
    }
}

fn unclosed(stack: &[(PunctuationId, Span)], eof: Span) -> CompileError {
    match stack.last() {
        Some((closer, open)) => CompileError::syntax(
            format!("Unclosed group, expected `{}` before end of file", punctuation::as_str(*closer)),
            *open,
        ),
        None => CompileError::syntax("Unexpected end of file".to_string(), eof),
    }
}
