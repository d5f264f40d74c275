//! Read-only views over the classes the engine scaffolds.

use testgen_core::lang::keywords::KeywordId;
use testgen_syntax::tree::{ConstructorDeclaration, MethodDeclaration, NodeId, NodeKind, SyntaxTree, TypeDeclaration, TypeKind};

/// One class declaration together with its constructors and methods, in declaration order.
#[derive(Debug, Clone)]
pub struct ClassDescriptor<'t> {
    pub id: NodeId,
    pub decl: &'t TypeDeclaration,
    pub constructors: Vec<&'t ConstructorDeclaration>,
    pub methods: Vec<&'t MethodDeclaration>,
}

impl<'t> ClassDescriptor<'t> {
    /// View the type declaration at `id`; `None` if `id` is not a type declaration.
    pub fn from_node(tree: &'t SyntaxTree, id: NodeId) -> Option<Self> {
        let NodeKind::Type(decl) = tree.kind(id) else {
            return None;
        };
        let mut constructors = Vec::new();
        let mut methods = Vec::new();
        for &child in tree.children(id) {
            match tree.kind(child) {
                NodeKind::Constructor(ctor) => constructors.push(ctor),
                NodeKind::Method(method) => methods.push(method),
                _ => {}
            }
        }
        Some(Self {
            id,
            decl,
            constructors,
            methods,
        })
    }

    pub fn name(&self) -> &'t str {
        &self.decl.name
    }

    pub fn is_public(&self) -> bool {
        self.decl.modifiers.is_public()
    }

    pub fn is_static(&self) -> bool {
        self.decl.modifiers.is_static()
    }

    /// The constructor with the fewest parameters, first declared on ties. Static constructors are ignored.
    ///
    /// `None` when the class declares no instance constructor; it is then built with no arguments.
    pub fn primary_constructor(&self) -> Option<&'t ConstructorDeclaration> {
        self.constructors
            .iter()
            .copied()
            .filter(|ctor| !ctor.modifiers.contains(KeywordId::Static))
            .min_by_key(|ctor| ctor.params.len())
    }

    /// Public methods sorted by name; methods sharing a name keep their declaration order.
    pub fn testable_methods(&self) -> Vec<&'t MethodDeclaration> {
        let mut methods: Vec<&MethodDeclaration> = self
            .methods
            .iter()
            .copied()
            .filter(|m| m.modifiers.is_public())
            .collect();
        methods.sort_by(|a, b| a.name.cmp(&b.name));
        methods
    }
}

/// Public classes declared directly in a namespace or the compilation unit, in document order.
///
/// Nested classes, records, structs and interfaces are not scaffolded.
pub fn qualifying_classes(tree: &SyntaxTree) -> Vec<ClassDescriptor<'_>> {
    tree.type_declarations()
        .filter(|(id, decl)| {
            decl.kind == TypeKind::Class
                && decl.modifiers.is_public()
                && tree.parent(*id).is_some_and(|parent| {
                    matches!(tree.kind(parent), NodeKind::Namespace(_) | NodeKind::CompilationUnit)
                })
        })
        .filter_map(|(id, _)| ClassDescriptor::from_node(tree, id))
        .collect()
}

/// Overload index of each method in a name-sorted list.
///
/// A method whose neighbours have different names gets `None`; a run of equal names is numbered from 0.
pub fn overload_indices(methods: &[&MethodDeclaration]) -> Vec<Option<usize>> {
    let mut indices = Vec::with_capacity(methods.len());
    let mut run_start = 0;
    while run_start < methods.len() {
        let name = &methods[run_start].name;
        let run_len = methods[run_start..].iter().take_while(|m| &m.name == name).count();
        if run_len == 1 {
            indices.push(None);
        } else {
            indices.extend((0..run_len).map(Some));
        }
        run_start += run_len;
    }
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use testgen_syntax::parse_source;

    #[test]
    fn test_only_public_top_level_classes_qualify() {
        let tree = parse_source(
            r#"
public class Root { public class Nested { } }
class Hidden { }
namespace N
{
    public class A { }
    internal class B { }
    public record R(int X);
    public struct S { }
    public interface IThing { }
    namespace M { public static class C { } }
}
"#,
        )
        .unwrap();
        let names: Vec<&str> = qualifying_classes(&tree).iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Root", "A", "C"]);
    }

    #[test]
    fn test_primary_constructor_has_fewest_parameters() {
        let tree = parse_source(
            "public class A { static A() { } public A(int a, int b) { } public A(string s) { } public A(int x) { } }",
        )
        .unwrap();
        let class = &qualifying_classes(&tree)[0];
        let ctor = class.primary_constructor().unwrap();
        assert_eq!(ctor.params.len(), 1);
        assert_eq!(ctor.params[0].name, "s");
    }

    #[test]
    fn test_class_primary_constructor_counts() {
        let tree = parse_source("public class Greeter(IClock clock) { public string Greet() => \"\"; }").unwrap();
        let class = &qualifying_classes(&tree)[0];
        assert_eq!(class.primary_constructor().unwrap().params[0].name, "clock");
    }

    #[test]
    fn test_no_constructor() {
        let tree = parse_source("public class A { }").unwrap();
        assert!(qualifying_classes(&tree)[0].primary_constructor().is_none());
    }

    #[test]
    fn test_testable_methods_are_public_and_sorted() {
        let tree = parse_source(
            r#"
public class A
{
    public void b() { }
    public int Zeta(int x) => x;
    private void Alpha() { }
    static void Main(string[] args) { }
    public double Beta(double x) => x;
    public int Beta(int x) => x;
}
"#,
        )
        .unwrap();
        let class = &qualifying_classes(&tree)[0];
        let methods = class.testable_methods();
        let names: Vec<&str> = methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Beta", "Beta", "Zeta", "b"]);
        assert_eq!(methods[0].params[0].ty.to_string(), "double");
        assert_eq!(overload_indices(&methods), vec![Some(0), Some(1), None, None]);
    }

    #[test]
    fn test_overload_indices_restart_per_run() {
        let tree = parse_source(
            "public class A { public void M() { } public void M(int a) { } public void N() { } public void N(int a) { } public void N(int a, int b) { } }",
        )
        .unwrap();
        let class = &qualifying_classes(&tree)[0];
        let methods = class.testable_methods();
        assert_eq!(
            overload_indices(&methods),
            vec![Some(0), Some(1), Some(0), Some(1), Some(2)]
        );
        assert!(overload_indices(&[]).is_empty());
    }
}
