/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type and its top-level `parse()` entrypoint.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single "god file".

/// Where a run of namespace-level members appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    /// The compilation unit itself; top-level statements are tolerated and skipped
    File,
    /// `namespace A { ... }`, ends at the closing brace
    Block,
    /// `namespace A;`, extends to the end of the file
    FileScoped,
}

/// Parser state.
///
/// ## Notes
/// - The parser is single-pass and stops at the first error: declarations that cannot be delimited make every
///   later declaration suspect, so partial trees are never produced.
/// - Most parsing helpers are implemented on `Parser` but split across multiple files.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    builder: TreeBuilder,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `testgen_syntax::lexer` (must end with `Eof`).
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            builder: TreeBuilder::new(),
        }
    }

    /// Parse the entire token stream into a [`SyntaxTree`].
    ///
    /// ## Errors
    /// Returns the first [`CompileError`] encountered.
    pub fn parse(mut self) -> Result<SyntaxTree, Vec<CompileError>> {
        let root = self.builder.root();
        match self.scope_members(root, Scope::File) {
            Ok(()) => {
                let end = self.current_span().end;
                self.builder.set_span(root, Span::new(0, end));
                Ok(self.builder.finish())
            }
            Err(e) => Err(vec![e]),
        }
    }
}
