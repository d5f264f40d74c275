//! Arena-backed syntax tree of declarations.
//!
//! Every node lives in one `Vec` and is addressed by a [`NodeId`]; children are stored in document order and every
//! node except the root records its parent. Enclosing-scope queries ([`SyntaxTree::ancestors`]) are therefore plain
//! parent-link walks, with no back-pointers into owned children.
//!
//! ## Notes
//! - Node 0 is always the [`NodeKind::CompilationUnit`].
//! - Members of a file-scoped namespace (`namespace A.B;`) are children of that namespace node.

use crate::ast::{Ident, Modifiers, Param, QualifiedName, Span, TypeRef, UsingDirective};

/// Index of a node in a [`SyntaxTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Kind of type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Class,
    Interface,
    Struct,
    /// `record` / `record class`
    Record,
    /// `record struct`
    RecordStruct,
    Enum,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceDeclaration {
    pub name: QualifiedName,
    pub file_scoped: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDeclaration {
    pub kind: TypeKind,
    pub name: Ident,
    pub modifiers: Modifiers,
    pub type_params: Vec<Ident>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorDeclaration {
    pub modifiers: Modifiers,
    pub name: Ident,
    pub params: Vec<Param>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDeclaration {
    pub modifiers: Modifiers,
    /// `None` for `void`
    pub return_type: Option<TypeRef>,
    pub name: Ident,
    pub type_params: Vec<Ident>,
    pub params: Vec<Param>,
}

impl MethodDeclaration {
    pub fn is_void(&self) -> bool {
        self.return_type.is_none()
    }
}

/// One field declaration statement; `int a, b;` declares two names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDeclaration {
    pub modifiers: Modifiers,
    pub ty: TypeRef,
    pub names: Vec<Ident>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDeclaration {
    pub modifiers: Modifiers,
    pub ty: TypeRef,
    pub name: Ident,
}

/// What a node declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    CompilationUnit,
    Using(UsingDirective),
    Namespace(NamespaceDeclaration),
    Type(TypeDeclaration),
    Constructor(ConstructorDeclaration),
    Method(MethodDeclaration),
    Field(FieldDeclaration),
    Property(PropertyDeclaration),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub span: Span,
}

/// Parsed compilation unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTree {
    nodes: Vec<Node>,
}

impl SyntaxTree {
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// ## Panics
    /// - If `id` does not belong to this tree.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.node(id).kind
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Enclosing nodes of `id`, innermost first, ending with the compilation unit.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.parent(id),
        }
    }

    /// Nodes below `id` in document order (pre-order, `id` itself excluded).
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        let mut stack: Vec<NodeId> = self.children(id).to_vec();
        stack.reverse();
        Descendants { tree: self, stack }
    }

    /// Every type declaration in the tree, nested ones included, in document order.
    pub fn type_declarations(&self) -> impl Iterator<Item = (NodeId, &TypeDeclaration)> + '_ {
        self.descendants(self.root()).filter_map(|id| match self.kind(id) {
            NodeKind::Type(decl) => Some((id, decl)),
            _ => None,
        })
    }

    /// Using directives declared directly in `scope` (the compilation unit or a namespace).
    pub fn usings_in(&self, scope: NodeId) -> impl Iterator<Item = &UsingDirective> + '_ {
        self.children(scope).iter().filter_map(|&id| match self.kind(id) {
            NodeKind::Using(using) => Some(using),
            _ => None,
        })
    }
}

/// Iterator over a node's enclosing scopes. See [`SyntaxTree::ancestors`].
pub struct Ancestors<'t> {
    tree: &'t SyntaxTree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.parent(current);
        Some(current)
    }
}

/// Pre-order iterator. See [`SyntaxTree::descendants`].
pub struct Descendants<'t> {
    tree: &'t SyntaxTree,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.stack.pop()?;
        self.stack.extend(self.tree.children(current).iter().rev());
        Some(current)
    }
}

/// Incremental tree construction used by the parser.
#[derive(Debug)]
pub(crate) struct TreeBuilder {
    nodes: Vec<Node>,
}

impl TreeBuilder {
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![Node {
                kind: NodeKind::CompilationUnit,
                parent: None,
                children: Vec::new(),
                span: Span::default(),
            }],
        }
    }

    pub(crate) fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append a node as the last child of `parent`.
    pub(crate) fn add(&mut self, parent: NodeId, kind: NodeKind, span: Span) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            parent: Some(parent),
            children: Vec::new(),
            span,
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    pub(crate) fn set_span(&mut self, id: NodeId, span: Span) {
        self.nodes[id.0].span = span;
    }

    pub(crate) fn finish(self) -> SyntaxTree {
        SyntaxTree { nodes: self.nodes }
    }
}
