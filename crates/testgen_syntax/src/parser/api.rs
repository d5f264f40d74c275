/// Parse a token stream into a [`SyntaxTree`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `tokens`: Token stream produced by `testgen_syntax::lexer`.
///
/// ## Errors
/// Returns `Err(Vec<CompileError>)` holding the first syntax error.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<SyntaxTree, Vec<CompileError>> {
    Parser::new(tokens).parse()
}
