/// Type references, type parameter lists and formal parameter lists.
///
/// ## Notes
/// - Type arguments close on single `>` tokens (the lexer never fuses `>>`).
/// - Default parameter values are skipped, only their presence is recorded.
impl<'a> Parser<'a> {
    // ========================================================================
    // Types
    // ========================================================================

    /// Parse a type reference: a named/generic/qualified type or a tuple, followed by any `?`, `[]` and `*`
    /// suffixes.
    fn type_ref(&mut self) -> Result<TypeRef, CompileError> {
        let mut ty = if self.check_punct(PunctuationId::LParen) {
            self.tuple_type()?
        } else {
            TypeRef::Named(self.named_type()?)
        };

        loop {
            if self.match_punct(PunctuationId::Question) {
                ty = TypeRef::Nullable(Box::new(ty));
            } else if self.check_punct(PunctuationId::LBracket)
                && (self.peek_next().kind.is_punctuation(PunctuationId::RBracket)
                    || self.peek_next().kind.is_punctuation(PunctuationId::Comma))
            {
                self.advance();
                let mut rank = 1;
                while self.match_punct(PunctuationId::Comma) {
                    rank += 1;
                }
                self.expect_punct(PunctuationId::RBracket, "Expected `]` to close array rank")?;
                ty = TypeRef::Array {
                    element: Box::new(ty),
                    rank,
                };
            } else if self.check_op(OperatorId::Star) {
                self.advance();
                ty = TypeRef::Pointer(Box::new(ty));
            } else {
                break;
            }
        }

        Ok(ty)
    }

    fn named_type(&mut self) -> Result<NamedType, CompileError> {
        let alias = if self.check_ident() && self.peek_next().kind.is_punctuation(PunctuationId::ColonColon) {
            let alias = self.identifier()?;
            self.advance();
            Some(alias)
        } else {
            None
        };

        let mut segments = Vec::new();
        loop {
            let name = self.identifier().map_err(|_| self.error_here("Expected type name"))?;
            let args = if self.check_punct(PunctuationId::LAngle) {
                self.type_argument_list()?
            } else {
                Vec::new()
            };
            segments.push(TypeSegment { name, args });

            // `A.B` continues the type; `A.B(` or `A.this` belong to the member that follows.
            if self.check_punct(PunctuationId::Dot) && matches!(self.peek_next().kind, TokenKind::Ident(_)) {
                self.advance();
            } else {
                break;
            }
        }

        Ok(NamedType { alias, segments })
    }

    fn type_argument_list(&mut self) -> Result<Vec<TypeRef>, CompileError> {
        self.expect_punct(PunctuationId::LAngle, "Expected `<`")?;
        let mut args = vec![self.type_ref()?];
        while self.match_punct(PunctuationId::Comma) {
            args.push(self.type_ref()?);
        }
        self.expect_punct(PunctuationId::RAngle, "Expected `>` to close type arguments")?;
        Ok(args)
    }

    fn tuple_type(&mut self) -> Result<TypeRef, CompileError> {
        self.expect_punct(PunctuationId::LParen, "Expected `(`")?;
        let mut elements = Vec::new();
        loop {
            let ty = self.type_ref()?;
            let name = if self.check_ident() { Some(self.identifier()?) } else { None };
            elements.push(TupleElement { ty, name });
            if !self.match_punct(PunctuationId::Comma) {
                break;
            }
        }
        self.expect_punct(PunctuationId::RParen, "Expected `)` to close tuple type")?;
        Ok(TypeRef::Tuple(elements))
    }

    /// Parse `<T, in TIn, out TOut>`; variance annotations and attributes are dropped.
    fn type_parameter_list(&mut self) -> Result<Vec<Ident>, CompileError> {
        self.expect_punct(PunctuationId::LAngle, "Expected `<`")?;
        let mut params = Vec::new();
        loop {
            self.skip_attributes()?;
            if !self.match_keyword(KeywordId::In) {
                self.match_keyword(KeywordId::Out);
            }
            params.push(self.identifier()?);
            if !self.match_punct(PunctuationId::Comma) {
                break;
            }
        }
        self.expect_punct(PunctuationId::RAngle, "Expected `>` to close type parameters")?;
        Ok(params)
    }

    // ========================================================================
    // Parameters
    // ========================================================================

    /// Parse `( ... )` for constructors, methods and primary constructors.
    fn param_list(&mut self) -> Result<Vec<Param>, CompileError> {
        self.expect_punct(PunctuationId::LParen, "Expected `(` to start parameter list")?;
        let mut params = Vec::new();
        if self.match_punct(PunctuationId::RParen) {
            return Ok(params);
        }

        loop {
            params.push(self.param()?);
            if self.match_punct(PunctuationId::Comma) {
                continue;
            }
            self.expect_punct(PunctuationId::RParen, "Expected `,` or `)` in parameter list")?;
            return Ok(params);
        }
    }

    fn param(&mut self) -> Result<Param, CompileError> {
        self.skip_attributes()?;
        if self.check_contextual(KeywordId::Scoped) && !self.peek_next().kind.is_punctuation(PunctuationId::Comma) {
            self.advance();
        }

        let modifier = self.peek().keyword_id().and_then(ParamModifier::from_keyword);
        if modifier.is_some() {
            self.advance();
            // `this ref T x`, `ref readonly T x`
            self.match_keyword(KeywordId::Ref);
            self.match_keyword(KeywordId::Readonly);
        }

        let ty = self.type_ref()?;
        let name = self.identifier()?;
        let has_default = if self.match_punct(PunctuationId::Eq) {
            self.skip_default_value()?;
            true
        } else {
            false
        };

        Ok(Param {
            modifier,
            ty,
            name,
            has_default,
        })
    }
}
