//! Numeric literal scanning.
//!
//! Numbers are kept as raw text: digits, separators, radix prefixes, exponents and type suffixes all end up in
//! [`TokenKind::Number`].

use super::{Lexer, TokenKind};

impl<'a> Lexer<'a> {
    /// Scan a numeric literal starting at `start` (a digit, or `.` followed by a digit).
    pub(super) fn scan_number(&mut self, start: usize) {
        let rest = &self.source[start..];
        let radix_prefixed = ["0x", "0X", "0b", "0B"].iter().any(|p| rest.starts_with(p));

        let mut prev: Option<char> = None;
        while let Some(c) = self.peek() {
            let accept = if c.is_ascii_alphanumeric() || c == '_' {
                true
            } else if c == '.' {
                !radix_prefixed && self.peek_next().is_some_and(|n| n.is_ascii_digit())
            } else if c == '+' || c == '-' {
                !radix_prefixed && matches!(prev, Some('e' | 'E'))
            } else {
                false
            };
            if !accept {
                break;
            }
            self.advance();
            prev = Some(c);
        }

        let raw = self.source[start..self.current_pos].to_string();
        self.add_token(TokenKind::Number(raw), start);
    }
}
