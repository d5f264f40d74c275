/// Miscellaneous parser utilities.
///
/// This chunk contains small shared parsing helpers that don't cleanly fit into
/// "decl", "members", or "types" (identifiers, dotted names and modifier runs).
impl<'a> Parser<'a> {
    // ========================================================================
    // Utilities
    // ========================================================================

    fn identifier(&mut self) -> Result<Ident, CompileError> {
        match &self.peek().kind {
            TokenKind::Ident(name) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            _ => Err(self.error_here("Expected identifier")),
        }
    }

    /// Parse `A.B.C`.
    fn qualified_name(&mut self) -> Result<QualifiedName, CompileError> {
        let mut segments = vec![self.identifier()?];
        while self.match_punct(PunctuationId::Dot) {
            segments.push(self.identifier()?);
        }
        Ok(QualifiedName::new(segments))
    }

    /// Parse a (possibly empty) run of declaration modifiers.
    ///
    /// ## Notes
    /// - Contextual modifiers (`partial`, `async`, `required`, `file`) only count when followed by another keyword
    ///   or identifier, so a type or member that happens to be named `file` still parses.
    fn modifiers(&mut self) -> Modifiers {
        let mut ids = Vec::new();
        loop {
            match &self.peek().kind {
                TokenKind::Keyword(id) if keywords::is_modifier(*id) => {
                    ids.push(*id);
                    self.advance();
                }
                // `ref struct`
                TokenKind::Keyword(KeywordId::Ref) if self.peek_next().kind.is_keyword(KeywordId::Struct) => {
                    ids.push(KeywordId::Ref);
                    self.advance();
                }
                TokenKind::Ident(name) => {
                    let contextual = keywords::contextual_from_str(name).filter(|id| keywords::is_modifier(*id));
                    let follows_word = matches!(self.peek_next().kind, TokenKind::Ident(_) | TokenKind::Keyword(_));
                    match contextual {
                        Some(id) if follows_word => {
                            ids.push(id);
                            self.advance();
                        }
                        _ => break,
                    }
                }
                _ => break,
            }
        }
        Modifiers::new(ids)
    }

    /// Return `true` if the current position starts a type declaration (after modifiers).
    fn at_type_declaration(&self) -> bool {
        self.check_keyword(KeywordId::Class)
            || self.check_keyword(KeywordId::Interface)
            || self.check_keyword(KeywordId::Struct)
            || self.check_keyword(KeywordId::Enum)
            || (self.check_contextual(KeywordId::Record)
                && matches!(
                    self.peek_next().kind,
                    TokenKind::Ident(_) | TokenKind::Keyword(KeywordId::Class) | TokenKind::Keyword(KeywordId::Struct)
                ))
    }
}
