/// Namespace-level declarations.
///
/// This chunk parses the compilation unit, namespaces (block and file-scoped), using directives
/// and type declaration headers. Type bodies are handed to the member parser (`members.rs`).
impl<'a> Parser<'a> {
    // ========================================================================
    // Namespace scope
    // ========================================================================

    /// Parse members of the compilation unit or a namespace into `parent`.
    ///
    /// For [`Scope::Block`] this stops *before* the closing `}`.
    fn scope_members(&mut self, parent: NodeId, scope: Scope) -> Result<(), CompileError> {
        loop {
            if scope == Scope::Block && self.check_punct(PunctuationId::RBrace) {
                return Ok(());
            }
            if self.is_at_end() {
                if scope == Scope::Block {
                    return Err(self.error_here("Expected `}` to close namespace"));
                }
                return Ok(());
            }
            if self.match_punct(PunctuationId::Semicolon) {
                continue;
            }
            self.namespace_member(parent, scope)?;
        }
    }

    fn namespace_member(&mut self, parent: NodeId, scope: Scope) -> Result<(), CompileError> {
        let start = self.current_span();
        self.skip_attributes()?;
        if self.is_at_end() || (scope == Scope::Block && self.check_punct(PunctuationId::RBrace)) {
            // Assembly or module attributes with nothing after them.
            return Ok(());
        }

        if self.at_using_directive() {
            return self.using_directive(parent);
        }
        if self.check_keyword(KeywordId::Namespace) {
            return self.namespace_declaration(parent, scope);
        }

        let modifiers = self.modifiers();
        if self.at_type_declaration() {
            self.type_declaration(parent, modifiers, start)?;
            return Ok(());
        }
        if self.check_keyword(KeywordId::Delegate) {
            return self.skip_member_tail();
        }
        if scope == Scope::File {
            // Top-level statements and `extern alias` directives.
            tracing::trace!(offset = start.start, "skipping top-level statement");
            return self.skip_member_tail();
        }
        Err(self.error_here("Expected namespace, type or using declaration"))
    }

    // ========================================================================
    // Usings
    // ========================================================================

    /// Return `true` if the current position starts a using *directive* (not a `using` statement).
    fn at_using_directive(&self) -> bool {
        let offset = if self.check_contextual(KeywordId::Global) && self.peek_next().kind.is_keyword(KeywordId::Using) {
            1
        } else if self.check_keyword(KeywordId::Using) {
            0
        } else {
            return false;
        };
        let after = &self.peek_at(offset + 1).kind;
        let statement = after.is_punctuation(PunctuationId::LParen)
            || (matches!(after, TokenKind::Ident(_)) && matches!(self.peek_at(offset + 2).kind, TokenKind::Ident(_)));
        !statement
    }

    fn using_directive(&mut self, parent: NodeId) -> Result<(), CompileError> {
        let start = self.current_span();
        let is_global = self.check_contextual(KeywordId::Global);
        if is_global {
            self.advance();
        }
        self.expect_keyword(KeywordId::Using, "Expected `using`")?;
        let is_static = self.match_keyword(KeywordId::Static);

        let alias = if self.check_ident() && self.peek_next().kind.is_punctuation(PunctuationId::Eq) {
            let alias = self.identifier()?;
            self.advance();
            Some(alias)
        } else {
            None
        };

        let target = self.type_ref()?;
        self.expect_punct(PunctuationId::Semicolon, "Expected `;` after using directive")?;

        let using = UsingDirective {
            is_global,
            is_static,
            alias,
            target,
        };
        let span = self.span_from(start);
        self.builder.add(parent, NodeKind::Using(using), span);
        Ok(())
    }

    // ========================================================================
    // Namespaces
    // ========================================================================

    fn namespace_declaration(&mut self, parent: NodeId, scope: Scope) -> Result<(), CompileError> {
        let start = self.current_span();
        self.expect_keyword(KeywordId::Namespace, "Expected `namespace`")?;
        let name = self.qualified_name()?;

        if self.check_punct(PunctuationId::Semicolon) {
            if scope != Scope::File {
                return Err(CompileError::syntax(
                    format!("File-scoped namespace `{}` must be declared at file level", name),
                    self.span_from(start),
                ));
            }
            self.advance();
            let id = self.builder.add(
                parent,
                NodeKind::Namespace(NamespaceDeclaration { name, file_scoped: true }),
                start,
            );
            self.scope_members(id, Scope::FileScoped)?;
            let span = self.span_from(start);
            self.builder.set_span(id, span);
            return Ok(());
        }

        self.expect_punct(PunctuationId::LBrace, "Expected `{` or `;` after namespace name")?;
        let id = self.builder.add(
            parent,
            NodeKind::Namespace(NamespaceDeclaration {
                name,
                file_scoped: false,
            }),
            start,
        );
        self.scope_members(id, Scope::Block)?;
        self.expect_punct(PunctuationId::RBrace, "Expected `}` to close namespace")?;
        let span = self.span_from(start);
        self.builder.set_span(id, span);
        Ok(())
    }

    // ========================================================================
    // Type declarations
    // ========================================================================

    /// Parse a type declaration whose modifiers have already been consumed.
    fn type_declaration(&mut self, parent: NodeId, modifiers: Modifiers, start: Span) -> Result<NodeId, CompileError> {
        let kind = self.type_kind()?;
        let name = self.identifier()?;
        let type_params = if self.check_punct(PunctuationId::LAngle) {
            self.type_parameter_list()?
        } else {
            Vec::new()
        };

        let primary = if self.check_punct(PunctuationId::LParen) {
            let ctor_start = self.current_span();
            Some((self.param_list()?, self.span_from(ctor_start)))
        } else {
            None
        };

        // Base list and constraint clauses.
        self.skip_type_header()?;

        let decl = TypeDeclaration {
            kind,
            name: name.clone(),
            modifiers,
            type_params,
        };
        let id = self.builder.add(parent, NodeKind::Type(decl), start);

        if let Some((params, span)) = primary {
            let ctor = ConstructorDeclaration {
                modifiers: Modifiers::new(vec![KeywordId::Public]),
                name: name.clone(),
                params,
            };
            self.builder.add(id, NodeKind::Constructor(ctor), span);
        }

        if !self.match_punct(PunctuationId::Semicolon) {
            if kind == TypeKind::Enum {
                if !self.check_punct(PunctuationId::LBrace) {
                    return Err(self.error_here("Expected `{` to open enum body"));
                }
                self.skip_group()?;
            } else {
                self.expect_punct(PunctuationId::LBrace, "Expected `{` to open type body")?;
                self.type_body(id, &name)?;
                self.expect_punct(PunctuationId::RBrace, "Expected `}` to close type body")?;
            }
        }

        let span = self.span_from(start);
        self.builder.set_span(id, span);
        Ok(id)
    }

    fn type_kind(&mut self) -> Result<TypeKind, CompileError> {
        let kind = match &self.peek().kind {
            TokenKind::Keyword(KeywordId::Class) => TypeKind::Class,
            TokenKind::Keyword(KeywordId::Interface) => TypeKind::Interface,
            TokenKind::Keyword(KeywordId::Struct) => TypeKind::Struct,
            TokenKind::Keyword(KeywordId::Enum) => TypeKind::Enum,
            kind if kind.is_contextual(KeywordId::Record) => {
                self.advance();
                if self.match_keyword(KeywordId::Struct) {
                    return Ok(TypeKind::RecordStruct);
                }
                self.match_keyword(KeywordId::Class);
                return Ok(TypeKind::Record);
            }
            _ => return Err(self.error_here("Expected type declaration")),
        };
        self.advance();
        Ok(kind)
    }
}
