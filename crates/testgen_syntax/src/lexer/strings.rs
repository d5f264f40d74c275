//! String and character literal scanning.
//!
//! Supported forms:
//! - regular `"a\"b"` and verbatim `@"C:\dir"` strings
//! - interpolated `$"{x}"` / `$@"..."` / `@$"..."` strings, with nested literals inside holes
//! - raw `"""..."""` strings (any run of three or more quotes), optionally `$`-prefixed
//! - character literals `'a'`, `'\n'`

use super::{Lexer, TokenKind};
use crate::ast::Span;
use crate::diagnostics::CompileError;

/// Prefix characters in front of a string literal's opening quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct StringPrefix {
    /// Byte length of the prefix (`$`, `@`, `$@`, `$$`, ...)
    pub(super) len: usize,
    pub(super) interpolated: bool,
    pub(super) verbatim: bool,
}

/// Return the prefix of a string literal starting at the beginning of `rest`, if one starts there.
pub(super) fn string_prefix(rest: &str) -> Option<StringPrefix> {
    let mut interpolated = false;
    let mut verbatim = false;
    for (i, c) in rest.char_indices() {
        match c {
            '$' => interpolated = true,
            '@' if !verbatim => verbatim = true,
            '"' => {
                return Some(StringPrefix {
                    len: i,
                    interpolated,
                    verbatim,
                });
            }
            _ => return None,
        }
    }
    None
}

impl<'a> Lexer<'a> {
    pub(super) fn scan_string(&mut self, start: usize) {
        match self.consume_string_literal() {
            Ok(()) => {
                let raw = self.source[start..self.current_pos].to_string();
                self.add_token(TokenKind::String(raw), start);
            }
            Err(e) => self.errors.push(e),
        }
    }

    pub(super) fn scan_char(&mut self, start: usize) {
        match self.consume_char_literal() {
            Ok(()) => {
                let raw = self.source[start..self.current_pos].to_string();
                self.add_token(TokenKind::Char(raw), start);
            }
            Err(e) => self.errors.push(e),
        }
    }

    /// Consume one string literal (prefix included) starting at the current position.
    fn consume_string_literal(&mut self) -> Result<(), CompileError> {
        let start = self.current_pos;
        let prefix = string_prefix(self.rest()).ok_or_else(|| {
            CompileError::lexical("Expected string literal".to_string(), Span::new(start, start))
        })?;
        for _ in 0..prefix.len {
            self.advance();
        }

        if !prefix.verbatim {
            let quotes = self.rest().chars().take_while(|c| *c == '"').count();
            if quotes >= 3 {
                for _ in 0..quotes {
                    self.advance();
                }
                return self.consume_raw_body(start, quotes);
            }
        }

        self.advance(); // opening quote
        if prefix.verbatim {
            self.consume_verbatim_body(start, prefix.interpolated)
        } else {
            self.consume_regular_body(start, prefix.interpolated)
        }
    }

    fn consume_regular_body(&mut self, start: usize, interpolated: bool) -> Result<(), CompileError> {
        loop {
            match self.advance() {
                None | Some('\n') => return Err(self.unterminated("string", start)),
                Some('\\') => {
                    self.advance();
                }
                Some('"') => return Ok(()),
                Some('{') if interpolated => {
                    if !self.match_char('{') {
                        self.consume_interpolation_hole(start)?;
                    }
                }
                Some(_) => {}
            }
        }
    }

    fn consume_verbatim_body(&mut self, start: usize, interpolated: bool) -> Result<(), CompileError> {
        loop {
            match self.advance() {
                None => return Err(self.unterminated("verbatim string", start)),
                Some('"') => {
                    // `""` is an escaped quote
                    if !self.match_char('"') {
                        return Ok(());
                    }
                }
                Some('{') if interpolated => {
                    if !self.match_char('{') {
                        self.consume_interpolation_hole(start)?;
                    }
                }
                Some(_) => {}
            }
        }
    }

    fn consume_raw_body(&mut self, start: usize, quotes: usize) -> Result<(), CompileError> {
        loop {
            match self.peek() {
                None => return Err(self.unterminated("raw string", start)),
                Some('"') => {
                    let run = self.rest().chars().take_while(|c| *c == '"').count();
                    for _ in 0..run {
                        self.advance();
                    }
                    if run >= quotes {
                        return Ok(());
                    }
                }
                Some(_) => {
                    self.advance();
                }
            }
        }
    }

    /// Consume an interpolation hole after its opening `{`, up to and including the matching `}`.
    fn consume_interpolation_hole(&mut self, start: usize) -> Result<(), CompileError> {
        let mut depth = 1usize;
        while depth > 0 {
            let Some(c) = self.peek() else {
                return Err(self.unterminated("interpolated string", start));
            };
            if string_prefix(self.rest()).is_some() {
                self.consume_string_literal()?;
                continue;
            }
            if c == '\'' {
                self.consume_char_literal()?;
                continue;
            }
            self.advance();
            match c {
                '{' => depth += 1,
                '}' => depth -= 1,
                _ => {}
            }
        }
        Ok(())
    }

    fn consume_char_literal(&mut self) -> Result<(), CompileError> {
        let start = self.current_pos;
        self.advance(); // opening quote
        loop {
            match self.advance() {
                None | Some('\n') => return Err(self.unterminated("character", start)),
                Some('\\') => {
                    self.advance();
                }
                Some('\'') => return Ok(()),
                Some(_) => {}
            }
        }
    }

    fn unterminated(&self, what: &str, start: usize) -> CompileError {
        CompileError::lexical(
            format!("Unterminated {} literal", what),
            Span::new(start, self.current_pos),
        )
    }
}
