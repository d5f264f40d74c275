//! Namespace reconstruction and using-directive collection for generated units.

use testgen_core::lang::conventions;
use testgen_syntax::ast::{QualifiedName, UsingDirective};
use testgen_syntax::tree::{NodeId, NodeKind, SyntaxTree};

use super::ir::{IrMember, IrNamespace};

/// Names of the namespaces enclosing `id`, outermost first.
///
/// File-scoped and block namespaces are treated alike.
pub fn namespace_chain(tree: &SyntaxTree, id: NodeId) -> Vec<QualifiedName> {
    let mut chain: Vec<QualifiedName> = tree
        .ancestors(id)
        .filter_map(|ancestor| match tree.kind(ancestor) {
            NodeKind::Namespace(ns) => Some(ns.name.clone()),
            _ => None,
        })
        .collect();
    chain.reverse();
    chain
}

/// The chain a generated fixture lives in: the innermost namespace gains a `Tests` segment, outer ones are kept.
pub fn test_namespace_chain(chain: &[QualifiedName]) -> Vec<QualifiedName> {
    let mut out = chain.to_vec();
    if let Some(innermost) = out.last_mut() {
        *innermost = innermost.with_segment(conventions::TEST_NAMESPACE_SEGMENT);
    }
    out
}

/// Nest `member` inside block namespaces for `chain`, outermost first.
pub fn wrap_in_namespaces(chain: &[QualifiedName], member: IrMember) -> IrMember {
    chain.iter().rev().fold(member, |inner, name| {
        IrMember::Namespace(IrNamespace {
            name: name.clone(),
            members: vec![inner],
        })
    })
}

/// Dotted name of a fixture: every namespace segment, outer to inner, then the class name.
pub fn qualified_name(chain: &[QualifiedName], class_name: &str) -> String {
    chain
        .iter()
        .flat_map(|ns| ns.segments.iter().map(String::as_str))
        .chain(std::iter::once(class_name))
        .collect::<Vec<_>>()
        .join(".")
}

/// Using directives for the unit generated from the class at `id`.
///
/// File-level directives come first, then those of each enclosing namespace (outer to inner), then the test
/// framework and mocking library imports. Exact duplicates are emitted once.
pub fn collect_usings(tree: &SyntaxTree, id: NodeId) -> Vec<UsingDirective> {
    let mut scopes: Vec<NodeId> = tree
        .ancestors(id)
        .filter(|&scope| matches!(tree.kind(scope), NodeKind::Namespace(_) | NodeKind::CompilationUnit))
        .collect();
    scopes.reverse();

    let framework = [
        UsingDirective::namespace(conventions::TEST_FRAMEWORK_NAMESPACE),
        UsingDirective::namespace(conventions::MOCKING_NAMESPACE),
    ];

    let mut usings: Vec<UsingDirective> = Vec::new();
    let declared = scopes.iter().flat_map(|&scope| tree.usings_in(scope).cloned());
    for using in declared.chain(framework) {
        if !usings.contains(&using) {
            usings.push(using);
        }
    }
    usings
}
