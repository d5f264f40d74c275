//! Core formatting logic for generated test sources
//!
//! Walks the output tree and emits normalized source: usings first, then block namespaces with Allman braces,
//! attributes on their own lines, fields grouped, and blank lines around methods.

use super::config::FormatConfig;
use super::writer::FormatWriter;
use crate::scaffold::ir::*;

/// Formatter that turns an output tree into source text
pub struct Formatter {
    writer: FormatWriter,
}

impl Formatter {
    /// Create a new formatter with the given config
    pub fn new(config: FormatConfig) -> Self {
        Self {
            writer: FormatWriter::new(config),
        }
    }

    /// Format a compilation unit and return the source
    pub fn format(mut self, unit: &IrCompilationUnit) -> String {
        self.format_unit(unit);
        self.writer.finish()
    }

    // ========================================================================
    // Compilation unit
    // ========================================================================

    fn format_unit(&mut self, unit: &IrCompilationUnit) {
        for using in &unit.usings {
            self.writer.line(&using.to_string());
        }
        if !unit.usings.is_empty() && !unit.members.is_empty() {
            self.writer.blank_lines(1);
        }
        self.format_members(&unit.members);
    }

    fn format_members(&mut self, members: &[IrMember]) {
        for (i, member) in members.iter().enumerate() {
            if i > 0 {
                self.writer.blank_lines(1);
            }
            match member {
                IrMember::Namespace(ns) => self.format_namespace(ns),
                IrMember::Class(class) => self.format_class(class),
            }
        }
    }

    fn format_namespace(&mut self, ns: &IrNamespace) {
        self.writer.line(&format!("namespace {}", ns.name));
        self.writer.open_block();
        self.format_members(&ns.members);
        self.writer.close_block();
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    fn format_attributes(&mut self, attributes: &[IrAttribute]) {
        for attribute in attributes {
            self.writer.line(&format!("[{}]", attribute.name));
        }
    }

    fn format_class(&mut self, class: &IrClass) {
        self.format_attributes(&class.attributes);
        let header = if class.modifiers.is_empty() {
            format!("class {}", class.name)
        } else {
            format!("{} class {}", class.modifiers, class.name)
        };
        self.writer.line(&header);
        self.writer.open_block();

        let blank_lines = self.writer.config().blank_lines_between_members;
        let mut previous: Option<&IrClassMember> = None;
        for member in &class.members {
            // Fields stay grouped; anything touching a method is separated.
            let both_fields = matches!(
                (previous, member),
                (Some(IrClassMember::Field(_)), IrClassMember::Field(_))
            );
            if previous.is_some() && !both_fields {
                self.writer.blank_lines(blank_lines);
            }
            match member {
                IrClassMember::Field(field) => self.format_field(field),
                IrClassMember::Method(method) => self.format_method(method),
            }
            previous = Some(member);
        }

        self.writer.close_block();
    }

    fn format_field(&mut self, field: &IrField) {
        let line = if field.modifiers.is_empty() {
            format!("{} {};", field.ty, field.name)
        } else {
            format!("{} {} {};", field.modifiers, field.ty, field.name)
        };
        self.writer.line(&line);
    }

    fn format_method(&mut self, method: &IrMethod) {
        self.format_attributes(&method.attributes);
        let return_type = method
            .return_type
            .as_ref()
            .map_or_else(|| "void".to_string(), |ty| ty.to_string());
        let header = if method.modifiers.is_empty() {
            format!("{} {}()", return_type, method.name)
        } else {
            format!("{} {} {}()", method.modifiers, return_type, method.name)
        };
        self.writer.line(&header);
        self.writer.open_block();
        for stmt in &method.body {
            self.writer.line(&render_stmt(stmt));
        }
        self.writer.close_block();
    }
}

// ============================================================================
// Statements and expressions
// ============================================================================

/// Render one statement on a single line, including its terminating `;`.
pub fn render_stmt(stmt: &IrStmt) -> String {
    match stmt {
        IrStmt::Local { ty, name, value } => {
            let ty = match ty {
                IrLocalType::Explicit(ty) => ty.to_string(),
                IrLocalType::Var => "var".to_string(),
            };
            format!("{} {} = {};", ty, name, render_expr(value))
        }
        IrStmt::Assign { target, value } => format!("{} = {};", render_expr(target), render_expr(value)),
        IrStmt::Expr(expr) => format!("{};", render_expr(expr)),
    }
}

/// Render an expression.
pub fn render_expr(expr: &IrExpr) -> String {
    match expr {
        IrExpr::Name(name) => name.clone(),
        IrExpr::Member { target, name } => format!("{}.{}", render_expr(target), name),
        IrExpr::Call { callee, args } => format!("{}({})", render_expr(callee), render_args(args)),
        IrExpr::New { ty, args } => format!("new {}({})", ty, render_args(args)),
        IrExpr::Default => "default".to_string(),
        IrExpr::Str(value) => quote_string(value),
    }
}

fn render_args(args: &[IrArg]) -> String {
    args.iter()
        .map(|arg| match arg.modifier {
            Some(modifier) => format!("{} {}", modifier, render_expr(&arg.value)),
            None => render_expr(&arg.value),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Quote a value as a regular string literal.
fn quote_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
