//! Preprocessor directives.
//!
//! Conditional compilation is resolved while lexing: `#if`/`#elif`/`#else`/`#endif` are tracked as a stack of
//! branches and lines of inactive branches are skipped as raw text, without being tokenized. Symbols are undefined
//! unless the file itself `#define`s them. Other directives (`#region`, `#pragma`, `#nullable`, ...) are ignored.

use super::Lexer;
use crate::ast::Span;
use crate::diagnostics::CompileError;

/// One open `#if` group.
#[derive(Debug, Clone, Copy)]
pub(super) struct Conditional {
    /// Whether the code around the group is active
    enclosing_active: bool,
    /// Whether an earlier branch of the group was taken
    taken: bool,
    /// Whether the current branch is active
    active: bool,
    seen_else: bool,
    /// The `#if` line
    span: Span,
}

#[derive(Debug, PartialEq, Eq)]
enum Directive<'s> {
    If(&'s str),
    Elif(&'s str),
    Else,
    Endif,
    Define(&'s str),
    Undef(&'s str),
    Other,
}

impl<'a> Lexer<'a> {
    /// Whether tokens at the current position are compiled.
    pub(super) fn is_active(&self) -> bool {
        self.conditionals.last().is_none_or(|c| c.active)
    }

    /// Consume the directive line at the current `#`, up to (not including) the newline.
    pub(super) fn directive(&mut self) {
        let start = self.current_pos;
        self.skip_line();
        let source = self.source;
        let span = Span::new(start, self.current_pos);
        let line = &source[start..self.current_pos];

        match parse_directive(line) {
            Directive::If(condition) => {
                let enclosing_active = self.is_active();
                let active = enclosing_active && self.evaluate(condition, span);
                self.conditionals.push(Conditional {
                    enclosing_active,
                    taken: active,
                    active,
                    seen_else: false,
                    span,
                });
            }
            Directive::Elif(condition) => {
                let Some(mut group) = self.open_group("#elif", span) else {
                    return;
                };
                let active = group.enclosing_active && !group.taken && self.evaluate(condition, span);
                group.active = active;
                group.taken |= active;
                self.replace_group(group);
            }
            Directive::Else => {
                let Some(mut group) = self.open_group("#else", span) else {
                    return;
                };
                group.active = group.enclosing_active && !group.taken;
                group.taken = true;
                group.seen_else = true;
                self.replace_group(group);
            }
            Directive::Endif => {
                if self.conditionals.pop().is_none() {
                    self.errors
                        .push(CompileError::lexical("`#endif` without matching `#if`".to_string(), span));
                }
            }
            Directive::Define(symbol) if self.is_active() => {
                self.defined.insert(symbol.to_string());
            }
            Directive::Undef(symbol) if self.is_active() => {
                self.defined.remove(symbol);
            }
            Directive::Define(_) | Directive::Undef(_) | Directive::Other => {}
        }
    }

    /// Skip one line of an inactive branch; a directive at its start is still processed.
    pub(super) fn skip_inactive_line(&mut self) {
        if self.at_line_start {
            while self.peek().is_some_and(|c| c != '\n' && c.is_whitespace()) {
                self.advance();
            }
            if self.peek() == Some('#') {
                self.directive();
                return;
            }
        }
        self.skip_line();
    }

    /// Report every `#if` still open at end of file.
    pub(super) fn close_conditionals(&mut self) {
        for group in std::mem::take(&mut self.conditionals) {
            self.errors.push(
                CompileError::lexical("Expected `#endif` before end of file".to_string(), group.span)
                    .with_note("conditional group opened here"),
            );
        }
    }

    fn open_group(&mut self, directive: &str, span: Span) -> Option<Conditional> {
        match self.conditionals.last() {
            Some(group) if group.seen_else => {
                self.errors
                    .push(CompileError::lexical(format!("`{directive}` after `#else`"), span));
                None
            }
            Some(group) => Some(*group),
            None => {
                self.errors
                    .push(CompileError::lexical(format!("`{directive}` without matching `#if`"), span));
                None
            }
        }
    }

    fn replace_group(&mut self, group: Conditional) {
        if let Some(last) = self.conditionals.last_mut() {
            *last = group;
        }
    }

    fn evaluate(&mut self, condition: &str, span: Span) -> bool {
        match evaluate_condition(condition, &|symbol| self.defined.contains(symbol)) {
            Ok(value) => value,
            Err(message) => {
                self.errors.push(CompileError::lexical(message, span));
                false
            }
        }
    }
}

/// Split a directive line (`#  if DEBUG // note`) into its kind and argument.
fn parse_directive(line: &str) -> Directive<'_> {
    let body = line.trim_start().trim_start_matches('#').trim_start();
    let name_len = body.find(|c: char| !c.is_ascii_alphabetic()).unwrap_or(body.len());
    let (name, rest) = body.split_at(name_len);
    let argument = rest.split("//").next().unwrap_or("").trim();
    match name {
        "if" => Directive::If(argument),
        "elif" => Directive::Elif(argument),
        "else" => Directive::Else,
        "endif" => Directive::Endif,
        "define" => Directive::Define(argument),
        "undef" => Directive::Undef(argument),
        _ => Directive::Other,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum CondToken<'s> {
    Symbol(&'s str),
    Not,
    And,
    Or,
    Eq,
    NotEq,
    LParen,
    RParen,
}

fn condition_tokens(expr: &str) -> Result<Vec<CondToken<'_>>, String> {
    let mut tokens = Vec::new();
    let mut rest = expr.trim_start();
    while let Some(c) = rest.chars().next() {
        let (token, len) = match c {
            '!' if rest.starts_with("!=") => (CondToken::NotEq, 2),
            '!' => (CondToken::Not, 1),
            '&' if rest.starts_with("&&") => (CondToken::And, 2),
            '|' if rest.starts_with("||") => (CondToken::Or, 2),
            '=' if rest.starts_with("==") => (CondToken::Eq, 2),
            '(' => (CondToken::LParen, 1),
            ')' => (CondToken::RParen, 1),
            c if c.is_alphanumeric() || c == '_' => {
                let len = rest
                    .find(|c: char| !(c.is_alphanumeric() || c == '_'))
                    .unwrap_or(rest.len());
                (CondToken::Symbol(&rest[..len]), len)
            }
            other => return Err(format!("Unexpected `{other}` in preprocessor expression")),
        };
        tokens.push(token);
        rest = rest[len..].trim_start();
    }
    Ok(tokens)
}

/// Evaluate a conditional-compilation expression; `true`/`false` are literals, any other symbol asks `defined`.
fn evaluate_condition(expr: &str, defined: &dyn Fn(&str) -> bool) -> Result<bool, String> {
    let tokens = condition_tokens(expr)?;
    let mut eval = ConditionEval {
        tokens: &tokens,
        pos: 0,
        defined,
    };
    let value = eval.or()?;
    if eval.pos != tokens.len() {
        return Err("Unexpected tokens after preprocessor expression".to_string());
    }
    Ok(value)
}

/// Precedence climbing over `||`, `&&`, `==`/`!=` and `!`.
struct ConditionEval<'t, 's> {
    tokens: &'t [CondToken<'s>],
    pos: usize,
    defined: &'t dyn Fn(&str) -> bool,
}

impl ConditionEval<'_, '_> {
    fn eat(&mut self, token: &CondToken<'_>) -> bool {
        if self.tokens.get(self.pos) == Some(token) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn or(&mut self) -> Result<bool, String> {
        let mut value = self.and()?;
        while self.eat(&CondToken::Or) {
            let rhs = self.and()?;
            value = value || rhs;
        }
        Ok(value)
    }

    fn and(&mut self) -> Result<bool, String> {
        let mut value = self.equality()?;
        while self.eat(&CondToken::And) {
            let rhs = self.equality()?;
            value = value && rhs;
        }
        Ok(value)
    }

    fn equality(&mut self) -> Result<bool, String> {
        let mut value = self.unary()?;
        loop {
            if self.eat(&CondToken::Eq) {
                value = value == self.unary()?;
            } else if self.eat(&CondToken::NotEq) {
                value = value != self.unary()?;
            } else {
                return Ok(value);
            }
        }
    }

    fn unary(&mut self) -> Result<bool, String> {
        if self.eat(&CondToken::Not) {
            return Ok(!self.unary()?);
        }
        if self.eat(&CondToken::LParen) {
            let value = self.or()?;
            if !self.eat(&CondToken::RParen) {
                return Err("Expected `)` in preprocessor expression".to_string());
            }
            return Ok(value);
        }
        let tokens = self.tokens;
        match tokens.get(self.pos) {
            Some(CondToken::Symbol(symbol)) => {
                self.pos += 1;
                Ok(match *symbol {
                    "true" => true,
                    "false" => false,
                    name => (self.defined)(name),
                })
            }
            _ => Err("Expected symbol in preprocessor expression".to_string()),
        }
    }
}
