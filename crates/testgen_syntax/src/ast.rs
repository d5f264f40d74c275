//! Leaf syntax types shared by the parsed tree and the generated test tree.
//!
//! Declarations themselves live in [`crate::tree`] (parsed input) and in the scaffold engine's
//! output tree; both are built from the pieces defined here: spans, names, type references,
//! parameters, modifiers and using directives.

use std::fmt;

use testgen_core::lang::keywords::{self, KeywordId};

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Identifier as written in source (a verbatim identifier keeps its leading `@`)
pub type Ident = String;

/// Dotted name such as a namespace name (`Company.Product.Core`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct QualifiedName {
    pub segments: Vec<Ident>,
}

impl QualifiedName {
    pub fn new(segments: Vec<Ident>) -> Self {
        Self { segments }
    }

    /// Parse a dotted string. Empty segments are dropped.
    pub fn dotted(name: &str) -> Self {
        Self {
            segments: name.split('.').filter(|s| !s.is_empty()).map(str::to_string).collect(),
        }
    }

    /// Return a copy with `segment` appended (`A.B` + `Tests` → `A.B.Tests`).
    pub fn with_segment(&self, segment: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.to_string());
        Self { segments }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

// ============================================================================
// Types
// ============================================================================

/// A type as written in a declaration.
///
/// ## Notes
/// - Predefined types (`int`, `string`, ...) are ordinary single-segment names.
/// - `void` is not a type here; return positions use `Option<TypeRef>` with `None` for void.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// `System.Collections.Generic.List<int>`, optionally `global::`-qualified
    Named(NamedType),
    /// `T[]`, `T[,]`
    Array { element: Box<TypeRef>, rank: usize },
    /// `T?`
    Nullable(Box<TypeRef>),
    /// `(int, string name)`
    Tuple(Vec<TupleElement>),
    /// `T*`
    Pointer(Box<TypeRef>),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamedType {
    /// Alias qualifier before `::` (`global` in `global::System.String`)
    pub alias: Option<Ident>,
    pub segments: Vec<TypeSegment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeSegment {
    pub name: Ident,
    pub args: Vec<TypeRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TupleElement {
    pub ty: TypeRef,
    pub name: Option<Ident>,
}

impl TypeRef {
    /// Single-segment, non-generic type (`int`, `IPrintable`).
    pub fn named(name: impl Into<Ident>) -> Self {
        Self::generic(name, Vec::new())
    }

    /// Single-segment generic type (`Mock<IPrintable>`).
    pub fn generic(name: impl Into<Ident>, args: Vec<TypeRef>) -> Self {
        TypeRef::Named(NamedType {
            alias: None,
            segments: vec![TypeSegment {
                name: name.into(),
                args,
            }],
        })
    }

    /// The rightmost name segment, looking through `?`.
    ///
    /// This is the name naming conventions apply to: `Services.IClock` → `IClock`, `IRepo<User>?` → `IRepo`.
    pub fn simple_name(&self) -> Option<&str> {
        match self {
            TypeRef::Named(named) => named.segments.last().map(|s| s.name.as_str()),
            TypeRef::Nullable(inner) => inner.simple_name(),
            TypeRef::Array { .. } | TypeRef::Tuple(_) | TypeRef::Pointer(_) => None,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named(named) => write!(f, "{named}"),
            TypeRef::Array { element, rank } => {
                write!(f, "{element}[{}]", ",".repeat(rank.saturating_sub(1)))
            }
            TypeRef::Nullable(inner) => write!(f, "{inner}?"),
            TypeRef::Pointer(inner) => write!(f, "{inner}*"),
            TypeRef::Tuple(elements) => {
                write!(f, "(")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", element.ty)?;
                    if let Some(name) = &element.name {
                        write!(f, " {name}")?;
                    }
                }
                write!(f, ")")
            }
        }
    }
}

impl fmt::Display for NamedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(alias) = &self.alias {
            write!(f, "{alias}::")?;
        }
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", segment.name)?;
            if !segment.args.is_empty() {
                write!(f, "<")?;
                for (j, arg) in segment.args.iter().enumerate() {
                    if j > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ">")?;
            }
        }
        Ok(())
    }
}

// ============================================================================
// Parameters
// ============================================================================

/// Parameter passing modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamModifier {
    Ref,
    Out,
    In,
    Params,
    /// Receiver of an extension method
    This,
}

impl ParamModifier {
    pub fn from_keyword(id: KeywordId) -> Option<Self> {
        match id {
            KeywordId::Ref => Some(ParamModifier::Ref),
            KeywordId::Out => Some(ParamModifier::Out),
            KeywordId::In => Some(ParamModifier::In),
            KeywordId::Params => Some(ParamModifier::Params),
            KeywordId::This => Some(ParamModifier::This),
            _ => None,
        }
    }

    pub fn keyword(self) -> KeywordId {
        match self {
            ParamModifier::Ref => KeywordId::Ref,
            ParamModifier::Out => KeywordId::Out,
            ParamModifier::In => KeywordId::In,
            ParamModifier::Params => KeywordId::Params,
            ParamModifier::This => KeywordId::This,
        }
    }

    /// Modifiers that must be repeated at the call site (`Foo(out x)`).
    pub fn is_by_reference(self) -> bool {
        matches!(self, ParamModifier::Ref | ParamModifier::Out | ParamModifier::In)
    }
}

impl fmt::Display for ParamModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(keywords::as_str(self.keyword()))
    }
}

/// A formal parameter of a constructor or method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub modifier: Option<ParamModifier>,
    pub ty: TypeRef,
    pub name: Ident,
    /// The parameter declares a default value (the value itself is skipped)
    pub has_default: bool,
}

// ============================================================================
// Modifiers and visibility
// ============================================================================

/// Declared accessibility, after combining access modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Internal,
    Protected,
    ProtectedInternal,
    PrivateProtected,
    Private,
}

/// Modifier keywords in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Modifiers(pub Vec<KeywordId>);

impl Modifiers {
    pub fn new(ids: Vec<KeywordId>) -> Self {
        Self(ids)
    }

    pub fn contains(&self, id: KeywordId) -> bool {
        self.0.contains(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = KeywordId> + '_ {
        self.0.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_static(&self) -> bool {
        self.contains(KeywordId::Static)
    }

    /// Explicitly declared accessibility, if any access modifier is present.
    pub fn visibility(&self) -> Option<Visibility> {
        let public = self.contains(KeywordId::Public);
        let protected = self.contains(KeywordId::Protected);
        let internal = self.contains(KeywordId::Internal);
        let private = self.contains(KeywordId::Private);
        match (public, protected, internal, private) {
            (true, _, _, _) => Some(Visibility::Public),
            (_, true, true, _) => Some(Visibility::ProtectedInternal),
            (_, true, _, true) => Some(Visibility::PrivateProtected),
            (_, true, _, _) => Some(Visibility::Protected),
            (_, _, true, _) => Some(Visibility::Internal),
            (_, _, _, true) => Some(Visibility::Private),
            _ => None,
        }
    }

    pub fn is_public(&self) -> bool {
        self.visibility() == Some(Visibility::Public)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let words: Vec<&str> = self.iter().map(keywords::as_str).collect();
        f.write_str(&words.join(" "))
    }
}

// ============================================================================
// Using directives
// ============================================================================

/// `using X.Y;`, `using static X.Y;`, `global using X;`, `using Alias = X.Y<Z>;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsingDirective {
    pub is_global: bool,
    pub is_static: bool,
    pub alias: Option<Ident>,
    pub target: TypeRef,
}

impl UsingDirective {
    /// Plain namespace import (`using NUnit.Framework;`).
    pub fn namespace(name: &str) -> Self {
        let segments = name
            .split('.')
            .map(|s| TypeSegment {
                name: s.to_string(),
                args: Vec::new(),
            })
            .collect();
        Self {
            is_global: false,
            is_static: false,
            alias: None,
            target: TypeRef::Named(NamedType { alias: None, segments }),
        }
    }
}

impl fmt::Display for UsingDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_global {
            write!(f, "{} ", keywords::as_str(KeywordId::Global))?;
        }
        write!(f, "{} ", keywords::as_str(KeywordId::Using))?;
        if self.is_static {
            write!(f, "{} ", keywords::as_str(KeywordId::Static))?;
        }
        if let Some(alias) = &self.alias {
            write!(f, "{alias} = ")?;
        }
        write!(f, "{};", self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_refs_print_in_source_form() {
        let list = TypeRef::generic("List", vec![TypeRef::Nullable(Box::new(TypeRef::named("int")))]);
        assert_eq!(list.to_string(), "List<int?>");

        let grid = TypeRef::Array {
            element: Box::new(TypeRef::named("double")),
            rank: 2,
        };
        assert_eq!(grid.to_string(), "double[,]");

        let pair = TypeRef::Tuple(vec![
            TupleElement {
                ty: TypeRef::named("int"),
                name: Some("count".into()),
            },
            TupleElement {
                ty: TypeRef::named("string"),
                name: None,
            },
        ]);
        assert_eq!(pair.to_string(), "(int count, string)");
    }

    #[test]
    fn simple_name_looks_through_nullable() {
        let ty = TypeRef::Nullable(Box::new(TypeRef::generic("IRepo", vec![TypeRef::named("User")])));
        assert_eq!(ty.simple_name(), Some("IRepo"));
        assert_eq!(TypeRef::Pointer(Box::new(TypeRef::named("int"))).simple_name(), None);
    }

    #[test]
    fn combined_access_modifiers() {
        let m = Modifiers::new(vec![KeywordId::Protected, KeywordId::Internal]);
        assert_eq!(m.visibility(), Some(Visibility::ProtectedInternal));
        assert!(!m.is_public());
        assert_eq!(Modifiers::default().visibility(), None);
    }

    #[test]
    fn using_directives_print_all_forms() {
        assert_eq!(UsingDirective::namespace("NUnit.Framework").to_string(), "using NUnit.Framework;");
        let directive = UsingDirective {
            is_global: true,
            is_static: true,
            alias: None,
            target: TypeRef::named("Math"),
        };
        assert_eq!(directive.to_string(), "global using static Math;");
    }
}
