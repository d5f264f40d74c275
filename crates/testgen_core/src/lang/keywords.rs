//! Define the keyword vocabulary of the scaffolded source language.
//!
//! This module is the single source of truth for keywords: a stable identifier ([`KeywordId`]) plus a
//! const metadata table ([`KEYWORDS`]) that records canonical spellings, categories and whether the
//! word is reserved.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and only matches **reserved** keywords. The lexer uses it, so
//!   contextual keywords (`partial`, `record`, `async`, ...) always lex as identifiers.
//! - Use [`contextual_from_str`] in the parser when an identifier may act as a contextual keyword.
//!
//! ## Examples
//! ```rust
//! use testgen_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("class"), Some(KeywordId::Class));
//! assert_eq!(keywords::from_str("partial"), None);
//! assert_eq!(keywords::contextual_from_str("partial"), Some(KeywordId::Partial));
//! ```

/// Stable identifier for every keyword the workspace cares about.
///
/// ## Notes
/// - The canonical spelling is accessible via [`as_str`].
/// - Statement keywords (`if`, `return`, ...) are deliberately absent: member bodies are skipped, so they only
///   ever appear as identifiers inside skipped regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Declarations
    Namespace,
    Using,
    Class,
    Interface,
    Struct,
    Enum,
    Delegate,
    Event,
    Operator,
    Implicit,
    Explicit,
    Extern,

    // Access and member modifiers
    Public,
    Private,
    Protected,
    Internal,
    Static,
    Readonly,
    Abstract,
    Sealed,
    Virtual,
    Override,
    Const,
    New,
    Unsafe,
    Volatile,
    Fixed,

    // Parameter modifiers
    Ref,
    Out,
    In,
    Params,

    // Types and expressions
    Void,
    This,
    Base,
    Default,

    // Contextual keywords
    Partial,
    Async,
    Record,
    Required,
    File,
    Global,
    Where,
    Alias,
    Scoped,
    Var,
}

/// High-level grouping for tooling and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Declaration,
    Modifier,
    ParameterModifier,
    Expression,
}

/// Metadata for a keyword.
///
/// ## Notes
/// - `reserved` keywords can never be identifiers; contextual ones are identifiers the parser may reinterpret.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    pub reserved: bool,
}

/// Registry of all keywords.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Declarations
    reserved(KeywordId::Namespace, "namespace", KeywordCategory::Declaration),
    reserved(KeywordId::Using, "using", KeywordCategory::Declaration),
    reserved(KeywordId::Class, "class", KeywordCategory::Declaration),
    reserved(KeywordId::Interface, "interface", KeywordCategory::Declaration),
    reserved(KeywordId::Struct, "struct", KeywordCategory::Declaration),
    reserved(KeywordId::Enum, "enum", KeywordCategory::Declaration),
    reserved(KeywordId::Delegate, "delegate", KeywordCategory::Declaration),
    reserved(KeywordId::Event, "event", KeywordCategory::Declaration),
    reserved(KeywordId::Operator, "operator", KeywordCategory::Declaration),
    reserved(KeywordId::Implicit, "implicit", KeywordCategory::Declaration),
    reserved(KeywordId::Explicit, "explicit", KeywordCategory::Declaration),
    reserved(KeywordId::Extern, "extern", KeywordCategory::Modifier),
    // Modifiers
    reserved(KeywordId::Public, "public", KeywordCategory::Modifier),
    reserved(KeywordId::Private, "private", KeywordCategory::Modifier),
    reserved(KeywordId::Protected, "protected", KeywordCategory::Modifier),
    reserved(KeywordId::Internal, "internal", KeywordCategory::Modifier),
    reserved(KeywordId::Static, "static", KeywordCategory::Modifier),
    reserved(KeywordId::Readonly, "readonly", KeywordCategory::Modifier),
    reserved(KeywordId::Abstract, "abstract", KeywordCategory::Modifier),
    reserved(KeywordId::Sealed, "sealed", KeywordCategory::Modifier),
    reserved(KeywordId::Virtual, "virtual", KeywordCategory::Modifier),
    reserved(KeywordId::Override, "override", KeywordCategory::Modifier),
    reserved(KeywordId::Const, "const", KeywordCategory::Modifier),
    reserved(KeywordId::New, "new", KeywordCategory::Modifier),
    reserved(KeywordId::Unsafe, "unsafe", KeywordCategory::Modifier),
    reserved(KeywordId::Volatile, "volatile", KeywordCategory::Modifier),
    reserved(KeywordId::Fixed, "fixed", KeywordCategory::Modifier),
    // Parameter modifiers
    reserved(KeywordId::Ref, "ref", KeywordCategory::ParameterModifier),
    reserved(KeywordId::Out, "out", KeywordCategory::ParameterModifier),
    reserved(KeywordId::In, "in", KeywordCategory::ParameterModifier),
    reserved(KeywordId::Params, "params", KeywordCategory::ParameterModifier),
    // Types and expressions
    reserved(KeywordId::Void, "void", KeywordCategory::Expression),
    reserved(KeywordId::This, "this", KeywordCategory::Expression),
    reserved(KeywordId::Base, "base", KeywordCategory::Expression),
    reserved(KeywordId::Default, "default", KeywordCategory::Expression),
    // Contextual
    contextual(KeywordId::Partial, "partial", KeywordCategory::Modifier),
    contextual(KeywordId::Async, "async", KeywordCategory::Modifier),
    contextual(KeywordId::Record, "record", KeywordCategory::Declaration),
    contextual(KeywordId::Required, "required", KeywordCategory::Modifier),
    contextual(KeywordId::File, "file", KeywordCategory::Modifier),
    contextual(KeywordId::Global, "global", KeywordCategory::Declaration),
    contextual(KeywordId::Where, "where", KeywordCategory::Declaration),
    contextual(KeywordId::Alias, "alias", KeywordCategory::Declaration),
    contextual(KeywordId::Scoped, "scoped", KeywordCategory::ParameterModifier),
    contextual(KeywordId::Var, "var", KeywordCategory::Expression),
];

/// Canonical spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Return `true` if `id` can prefix a type or member declaration as a modifier.
pub fn is_modifier(id: KeywordId) -> bool {
    category(id) == KeywordCategory::Modifier
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup a **reserved** keyword by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if `s` is a reserved keyword, `None` otherwise (including contextual keywords).
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.reserved && k.canonical == s).map(|k| k.id)
}

/// Lookup a **contextual** keyword by spelling.
pub fn contextual_from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| !k.reserved && k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn reserved(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        reserved: true,
    }
}

const fn contextual(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        reserved: false,
    }
}
