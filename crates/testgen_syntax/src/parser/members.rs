/// Type members.
///
/// Constructors, methods, fields and properties become tree nodes; nested types recurse into
/// `type_declaration`. Events, operators, conversion operators, indexers, destructors and delegates
/// are recognized and skipped.
impl<'a> Parser<'a> {
    /// Parse members up to (not including) the closing `}` of the type body.
    fn type_body(&mut self, type_id: NodeId, type_name: &str) -> Result<(), CompileError> {
        loop {
            if self.check_punct(PunctuationId::RBrace) {
                return Ok(());
            }
            if self.is_at_end() {
                return Err(self.error_here(&format!("Expected `}}` to close type `{}`", type_name)));
            }
            if self.match_punct(PunctuationId::Semicolon) {
                continue;
            }
            self.member(type_id, type_name)?;
        }
    }

    fn member(&mut self, type_id: NodeId, type_name: &str) -> Result<(), CompileError> {
        let start = self.current_span();
        self.skip_attributes()?;
        let modifiers = self.modifiers();

        if self.at_type_declaration() {
            self.type_declaration(type_id, modifiers, start)?;
            return Ok(());
        }

        if self.check_keyword(KeywordId::Delegate)
            || self.check_keyword(KeywordId::Event)
            || self.check_keyword(KeywordId::Implicit)
            || self.check_keyword(KeywordId::Explicit)
            || self.check_op(OperatorId::Tilde)
        {
            return self.skip_member_tail();
        }

        if self.peek().kind.ident() == Some(type_name) && self.peek_next().kind.is_punctuation(PunctuationId::LParen) {
            return self.constructor(type_id, modifiers, start);
        }

        let return_type = if self.match_keyword(KeywordId::Void) {
            None
        } else {
            // `ref T M()` / `ref readonly T M()`
            if self.match_keyword(KeywordId::Ref) {
                self.match_keyword(KeywordId::Readonly);
            }
            Some(self.type_ref()?)
        };

        // Operators and indexers.
        if self.check_keyword(KeywordId::Operator) || self.check_keyword(KeywordId::This) {
            return self.skip_member_tail();
        }

        let mut name = self.identifier()?;
        // Explicit interface implementation: `void IDisposable.Dispose()`, `int IList<int>.this[int i]`.
        loop {
            if self.check_punct(PunctuationId::LAngle) && !self.is_method_type_parameter_list() {
                self.type_argument_list()?;
            }
            if !self.match_punct(PunctuationId::Dot) {
                break;
            }
            if self.check_keyword(KeywordId::This) || self.check_keyword(KeywordId::Operator) {
                return self.skip_member_tail();
            }
            name = self.identifier()?;
        }

        if self.check_punct(PunctuationId::LAngle) || self.check_punct(PunctuationId::LParen) {
            let type_params = if self.check_punct(PunctuationId::LAngle) {
                self.type_parameter_list()?
            } else {
                Vec::new()
            };
            let params = self.param_list()?;
            self.skip_member_tail()?;
            let method = MethodDeclaration {
                modifiers,
                return_type,
                name,
                type_params,
                params,
            };
            let span = self.span_from(start);
            self.builder.add(type_id, NodeKind::Method(method), span);
            return Ok(());
        }

        let Some(ty) = return_type else {
            return Err(self.error_here(&format!("Expected `(` after `void {}`", name)));
        };

        if self.check_punct(PunctuationId::LBrace) || self.check_punct(PunctuationId::FatArrow) {
            self.skip_member_tail()?;
            let property = PropertyDeclaration { modifiers, ty, name };
            let span = self.span_from(start);
            self.builder.add(type_id, NodeKind::Property(property), span);
            return Ok(());
        }

        if self.check_punct(PunctuationId::Eq)
            || self.check_punct(PunctuationId::Semicolon)
            || self.check_punct(PunctuationId::Comma)
        {
            let names = self.field_declarators(name)?;
            let field = FieldDeclaration { modifiers, ty, names };
            let span = self.span_from(start);
            self.builder.add(type_id, NodeKind::Field(field), span);
            return Ok(());
        }

        Err(self.error_here(&format!("Expected member body after `{}`", name)))
    }

    fn constructor(&mut self, type_id: NodeId, modifiers: Modifiers, start: Span) -> Result<(), CompileError> {
        let name = self.identifier()?;
        let params = self.param_list()?;
        // `: base(...)` / `: this(...)` initializer and body
        self.skip_member_tail()?;
        let ctor = ConstructorDeclaration { modifiers, name, params };
        let span = self.span_from(start);
        self.builder.add(type_id, NodeKind::Constructor(ctor), span);
        Ok(())
    }

    /// Parse `a, b = 1, c;` after the first name has been consumed.
    ///
    /// ## Notes
    /// - Once an initializer is seen, the rest of the declaration is skipped as one expression, so commas inside
    ///   generic type arguments (`new Dictionary<int, string>()`) are never mistaken for declarator separators.
    fn field_declarators(&mut self, first: Ident) -> Result<Vec<Ident>, CompileError> {
        let mut names = vec![first];
        loop {
            if self.match_punct(PunctuationId::Semicolon) {
                return Ok(names);
            }
            if self.match_punct(PunctuationId::Eq) {
                self.skip_initializer()?;
                return Ok(names);
            }
            self.expect_punct(PunctuationId::Comma, "Expected `,`, `=` or `;` in field declaration")?;
            names.push(self.identifier()?);
        }
    }

    /// At `<` after a member name: return `true` if it opens a method's type parameter list (`M<T>(`) rather than
    /// the type arguments of an explicitly implemented interface (`IFoo<int>.M`).
    fn is_method_type_parameter_list(&self) -> bool {
        let mut depth = 0usize;
        let mut offset = 0;
        loop {
            let kind = &self.peek_at(offset).kind;
            match kind {
                TokenKind::Eof => return false,
                TokenKind::Punctuation(PunctuationId::LAngle) => depth += 1,
                TokenKind::Punctuation(PunctuationId::RAngle) => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return !self.peek_at(offset + 1).kind.is_punctuation(PunctuationId::Dot);
                    }
                }
                _ => {}
            }
            offset += 1;
        }
    }
}
