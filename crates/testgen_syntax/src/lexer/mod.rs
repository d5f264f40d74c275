//! Lexer for scaffolded source files.
//!
//! Handles tokenization including:
//! - Reserved keywords (contextual keywords such as `record` or `partial` stay identifiers)
//! - Identifiers, including verbatim `@name` identifiers
//! - Literals (numbers, characters, regular/verbatim/raw/interpolated strings), kept as raw text
//! - Operators and punctuation, longest match first
//! - Trivia: whitespace, `//` and `/* */` comments, preprocessor lines
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//! - `strings` - String and character literal scanning
//! - `numbers` - Numeric literal scanning
//! - `directives` - Preprocessor lines and conditional compilation
//!
//! ## Notes
//! - `>` is always emitted as a single token, so `List<List<int>>` closes two argument lists.
//! - `#if`/`#elif`/`#else` are evaluated with every symbol undefined unless the file `#define`s it. Only the
//!   active branch is tokenized.

mod directives;
mod numbers;
mod strings;
pub mod tokens;

pub use tokens::{Token, TokenKind, keyword_id};

use std::collections::HashSet;

use crate::ast::Span;
use crate::diagnostics::CompileError;
use directives::Conditional;
use testgen_core::lang::operators::{self, MAX_SPELLING_LEN};
use testgen_core::lang::punctuation;

// ============================================================================
// LEXER STATE
// ============================================================================

/// Lexer for source code.
///
/// Converts source text into a stream of tokens. Errors are collected and lexing continues, so a single pass
/// reports every malformed literal and stray character.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    /// Only whitespace has been seen since the last newline (preprocessor directives must start a line)
    at_line_start: bool,
    /// Open `#if` groups, innermost last
    conditionals: Vec<Conditional>,
    /// Symbols set by `#define` in this file
    defined: HashSet<String>,
    tokens: Vec<Token>,
    errors: Vec<CompileError>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            at_line_start: true,
            conditionals: Vec::new(),
            defined: HashSet::new(),
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Tokenize the entire source code.
    ///
    /// Returns a vector of tokens on success, or a vector of errors on failure.
    /// The token stream always ends with an `Eof` token.
    pub fn tokenize(mut self) -> Result<Vec<Token>, Vec<CompileError>> {
        loop {
            self.skip_trivia();
            if self.is_at_end() {
                break;
            }
            self.scan_token();
            self.at_line_start = false;
        }
        self.close_conditionals();

        self.tokens.push(Token::new(
            TokenKind::Eof,
            Span::new(self.current_pos, self.current_pos),
        ));

        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.errors)
        }
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.source[self.current_pos..].chars();
        iter.next(); // skip current
        iter.next()
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Remaining source text from the current position.
    fn rest(&self) -> &'a str {
        &self.source[self.current_pos..]
    }

    fn add_token(&mut self, kind: TokenKind, start: usize) {
        self.tokens.push(Token::new(kind, Span::new(start, self.current_pos)));
    }

    // ========================================================================
    // Trivia
    // ========================================================================

    /// Skip whitespace, comments, preprocessor lines and inactive conditional branches.
    fn skip_trivia(&mut self) {
        while let Some(c) = self.peek() {
            match c {
                '\n' => {
                    self.advance();
                    self.at_line_start = true;
                }
                _ if !self.is_active() => self.skip_inactive_line(),
                c if c.is_whitespace() || c == '\u{feff}' => {
                    self.advance();
                }
                '/' if self.peek_next() == Some('/') => self.skip_line(),
                '/' if self.peek_next() == Some('*') => self.skip_block_comment(),
                '#' if self.at_line_start => self.directive(),
                _ => return,
            }
        }
    }

    /// Skip to (not past) the end of the current line.
    fn skip_line(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
    }

    fn skip_block_comment(&mut self) {
        let start = self.current_pos;
        self.advance();
        self.advance();
        loop {
            match self.advance() {
                Some('*') if self.peek() == Some('/') => {
                    self.advance();
                    return;
                }
                Some(_) => {}
                None => {
                    self.errors.push(CompileError::lexical(
                        "Unterminated block comment".to_string(),
                        Span::new(start, self.current_pos),
                    ));
                    return;
                }
            }
        }
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) {
        let start = self.current_pos;
        let Some(c) = self.peek() else {
            return;
        };

        if strings::string_prefix(self.rest()).is_some() {
            self.scan_string(start);
            return;
        }

        match c {
            '\'' => self.scan_char(start),
            '0'..='9' => self.scan_number(start),
            '.' if self.peek_next().is_some_and(|n| n.is_ascii_digit()) => self.scan_number(start),
            '@' if self.peek_next().is_some_and(is_ident_start) => {
                self.advance();
                self.scan_identifier(start);
            }
            _ if is_ident_start(c) => self.scan_identifier(start),
            _ => self.scan_symbol(start),
        }
    }

    // ========================================================================
    // Identifier scanning
    // ========================================================================

    fn scan_identifier(&mut self, start: usize) {
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                self.advance();
            } else {
                break;
            }
        }

        let spelling = &self.source[start..self.current_pos];

        // Verbatim identifiers are never keywords.
        let kind = match keyword_id(spelling) {
            Some(id) if !spelling.starts_with('@') => TokenKind::Keyword(id),
            _ => TokenKind::Ident(spelling.to_string()),
        };
        self.add_token(kind, start);
    }

    // ========================================================================
    // Operators and punctuation
    // ========================================================================

    /// Longest-match scan over the punctuation and operator registries.
    fn scan_symbol(&mut self, start: usize) {
        let rest = self.rest();
        for len in (1..=MAX_SPELLING_LEN).rev() {
            let Some(candidate) = leading_chars(rest, len) else {
                continue;
            };
            let kind = punctuation::from_str(candidate)
                .map(TokenKind::Punctuation)
                .or_else(|| operators::from_str(candidate).map(TokenKind::Operator));
            if let Some(kind) = kind {
                for _ in 0..len {
                    self.advance();
                }
                self.add_token(kind, start);
                return;
            }
        }

        if let Some(c) = self.advance() {
            self.errors.push(CompileError::lexical(
                format!("Unexpected character '{}'", c),
                Span::new(start, self.current_pos),
            ));
        }
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier.
fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier.
fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// The first `n` characters of `s`, if it has that many.
fn leading_chars(s: &str, n: usize) -> Option<&str> {
    let end = s.char_indices().map(|(i, c)| i + c.len_utf8()).nth(n.checked_sub(1)?)?;
    Some(&s[..end])
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, Vec<CompileError>> {
    Lexer::new(source).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use testgen_core::lang::keywords::KeywordId;
    use testgen_core::lang::operators::OperatorId;
    use testgen_core::lang::punctuation::PunctuationId;

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_punctuation_registry_parity() {
        for p in punctuation::PUNCTUATION {
            let tokens = lex(p.canonical).unwrap();
            assert_eq!(tokens.len(), 2, "{} should lex to one token", p.canonical);
            assert!(tokens[0].kind.is_punctuation(p.id), "{}", p.canonical);
        }
    }

    #[test]
    fn test_operator_registry_parity() {
        for o in operators::OPERATORS {
            // `#` at the start of a line begins a directive.
            let source = format!("x {}", o.spelling);
            let tokens = lex(&source).unwrap();
            assert_eq!(tokens.len(), 3, "{} should lex to one token", o.spelling);
            assert!(tokens[1].kind.is_operator(o.id), "{}", o.spelling);
        }
    }

    #[test]
    fn test_leading_operators() {
        for o in operators::OPERATORS.iter().filter(|o| o.spelling != "#") {
            let tokens = lex(o.spelling).unwrap();
            assert_eq!(tokens.len(), 2, "{} should lex to one token", o.spelling);
            assert!(tokens[0].kind.is_operator(o.id), "{}", o.spelling);
        }
    }

    #[test]
    fn test_keywords_and_contextual_words() {
        let tokens = kinds("public static partial class record");
        assert_eq!(tokens[0], TokenKind::Keyword(KeywordId::Public));
        assert_eq!(tokens[1], TokenKind::Keyword(KeywordId::Static));
        assert_eq!(tokens[2], TokenKind::Ident("partial".to_string()));
        assert_eq!(tokens[3], TokenKind::Keyword(KeywordId::Class));
        assert_eq!(tokens[4], TokenKind::Ident("record".to_string()));
    }

    #[test]
    fn test_verbatim_identifier_is_not_a_keyword() {
        let tokens = kinds("@class @event x");
        assert_eq!(tokens[0], TokenKind::Ident("@class".to_string()));
        assert_eq!(tokens[1], TokenKind::Ident("@event".to_string()));
        assert_eq!(tokens[2], TokenKind::Ident("x".to_string()));
    }

    #[test]
    fn test_nested_generic_close_is_two_tokens() {
        let tokens = kinds("List<List<int>>");
        let closers = tokens
            .iter()
            .filter(|k| k.is_punctuation(PunctuationId::RAngle))
            .count();
        assert_eq!(closers, 2);
    }

    #[test]
    fn test_longest_match() {
        let tokens = kinds("a ??= b => c :: d");
        assert!(tokens[1].is_operator(OperatorId::QuestionQuestionEq));
        assert!(tokens[3].is_punctuation(PunctuationId::FatArrow));
        assert!(tokens[5].is_punctuation(PunctuationId::ColonColon));
    }

    #[test]
    fn test_comments_and_directives_are_skipped() {
        let source = "#region Fields\n// line comment\nint /* inline */ x; #notadirective\n#endregion\n";
        let tokens = kinds(source);
        assert_eq!(tokens[0], TokenKind::Ident("int".to_string()));
        assert_eq!(tokens[1], TokenKind::Ident("x".to_string()));
        assert!(tokens[2].is_punctuation(PunctuationId::Semicolon));
        // `#` in the middle of a line is not a directive.
        assert!(tokens[3].is_operator(OperatorId::Hash));
    }

    fn idents(source: &str) -> Vec<String> {
        kinds(source)
            .into_iter()
            .filter_map(|k| match k {
                TokenKind::Ident(name) => Some(name),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_inactive_branch_is_dropped() {
        let source = "public void M() {\n#if DEBUG\n if (x) {\n#else\n if (y) {\n#endif\n } }";
        assert_eq!(idents(source), vec!["M", "if", "y"]);
        let braces = kinds(source)
            .iter()
            .filter(|k| k.is_punctuation(PunctuationId::LBrace))
            .count();
        assert_eq!(braces, 2);
    }

    #[test]
    fn test_conditions_with_undefined_symbols() {
        assert_eq!(idents("#if !DEBUG\na\n#endif\nb"), vec!["a", "b"]);
        assert_eq!(idents("#if true\na\n#else\nb\n#endif"), vec!["a"]);
        assert_eq!(idents("#if DEBUG || (TRACE && !false)\na\n#endif"), Vec::<String>::new());
        assert_eq!(idents("#if A\na\n#elif !B\nb\n#elif true\nc\n#else\nd\n#endif"), vec!["b"]);
    }

    #[test]
    fn test_nested_conditionals() {
        let source = "#if DEBUG\n#if true\na\n#else\nb\n#endif\n#else\n  #if !TRACE // indented\nc\n  #endif\n#endif";
        assert_eq!(idents(source), vec!["c"]);
    }

    #[test]
    fn test_define_and_undef() {
        assert_eq!(idents("#define FAST\n#if FAST\na\n#endif"), vec!["a"]);
        assert_eq!(idents("#define FAST\n#undef FAST\n#if FAST\na\n#endif"), Vec::<String>::new());
        // A define inside an inactive branch has no effect.
        assert_eq!(idents("#if DEBUG\n#define FAST\n#endif\n#if FAST\na\n#endif"), Vec::<String>::new());
    }

    #[test]
    fn test_inactive_text_is_not_lexed() {
        let source = "#if DEBUG\nstring s = \"unterminated;\nchar c = `;\n#endif\nint x;";
        assert_eq!(idents(source), vec!["int", "x"]);
    }

    #[test]
    fn test_unbalanced_conditionals() {
        let errors = lex("class A {}\n#endif").unwrap_err();
        assert!(errors[0].message.contains("`#endif` without matching `#if`"));

        let errors = lex("#if DEBUG\nclass A {}").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("Expected `#endif`"));
        assert_eq!(errors[0].span, Span::new(0, 9));

        let errors = lex("#if A\n#else\n#else\n#endif").unwrap_err();
        assert!(errors[0].message.contains("after `#else`"));

        let errors = lex("#if (A\n#endif").unwrap_err();
        assert!(errors[0].message.contains("preprocessor expression"));
    }

    #[test]
    fn test_numbers_keep_raw_text() {
        let tokens = kinds("42 3.14 1_000 0xFF 1e-3 2.5f .5m");
        let numbers: Vec<_> = tokens
            .iter()
            .filter_map(|k| match k {
                TokenKind::Number(n) => Some(n.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(numbers, vec!["42", "3.14", "1_000", "0xFF", "1e-3", "2.5f", ".5m"]);
    }

    #[test]
    fn test_member_access_after_number_is_not_a_fraction() {
        let tokens = kinds("1.ToString()");
        assert_eq!(tokens[0], TokenKind::Number("1".to_string()));
        assert!(tokens[1].is_punctuation(PunctuationId::Dot));
    }

    #[test]
    fn test_unterminated_block_comment() {
        let errors = lex("class /* never closed").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("block comment"));
    }

    #[test]
    fn test_unexpected_character() {
        let errors = lex("int x = `y`;").unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].message.contains("Unexpected character"));
    }

    #[test]
    fn test_spans_cover_tokens() {
        let tokens = lex("namespace  Shop").unwrap();
        assert_eq!(tokens[0].span, Span::new(0, 9));
        assert_eq!(tokens[1].span, Span::new(11, 15));
        assert_eq!(tokens[2].kind, TokenKind::Eof);
    }
}
