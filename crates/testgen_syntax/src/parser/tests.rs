#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex;

    fn parse_str(source: &str) -> SyntaxTree {
        let tokens = lex(source).unwrap();
        parse(&tokens).unwrap()
    }

    fn parse_err(source: &str) -> CompileError {
        let tokens = lex(source).unwrap();
        let mut errors = parse(&tokens).unwrap_err();
        assert_eq!(errors.len(), 1, "parser stops at the first error");
        errors.remove(0)
    }

    fn only_type(tree: &SyntaxTree) -> (NodeId, &TypeDeclaration) {
        let mut types = tree.type_declarations();
        let first = types.next().unwrap();
        assert!(types.next().is_none());
        first
    }

    fn methods(tree: &SyntaxTree, ty: NodeId) -> Vec<&MethodDeclaration> {
        tree.children(ty)
            .iter()
            .filter_map(|&id| match tree.kind(id) {
                NodeKind::Method(m) => Some(m),
                _ => None,
            })
            .collect()
    }

    fn constructors(tree: &SyntaxTree, ty: NodeId) -> Vec<&ConstructorDeclaration> {
        tree.children(ty)
            .iter()
            .filter_map(|&id| match tree.kind(id) {
                NodeKind::Constructor(c) => Some(c),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_nested_namespaces_and_usings() {
        let tree = parse_str(
            r#"
using System;
namespace Outer.Inner
{
    using System.Text;
    namespace Deep
    {
        public class Widget { }
    }
}
"#,
        );
        let (widget, decl) = only_type(&tree);
        assert_eq!(decl.name, "Widget");
        assert_eq!(decl.kind, TypeKind::Class);
        assert!(decl.modifiers.is_public());

        let names: Vec<String> = tree
            .ancestors(widget)
            .filter_map(|id| match tree.kind(id) {
                NodeKind::Namespace(ns) => Some(ns.name.to_string()),
                _ => None,
            })
            .collect();
        assert_eq!(names, vec!["Deep", "Outer.Inner"]);

        let root_usings: Vec<String> = tree.usings_in(tree.root()).map(|u| u.to_string()).collect();
        assert_eq!(root_usings, vec!["using System;"]);
        let outer = tree.ancestors(widget).nth(1).unwrap();
        let inner_usings: Vec<String> = tree.usings_in(outer).map(|u| u.to_string()).collect();
        assert_eq!(inner_usings, vec!["using System.Text;"]);
    }

    #[test]
    fn test_file_scoped_namespace_owns_following_members() {
        let tree = parse_str("namespace Shop.Core;\n\npublic class Cart { }\npublic class Order { }\n");
        let ns = tree.children(tree.root())[0];
        assert!(matches!(tree.kind(ns), NodeKind::Namespace(n) if n.file_scoped));
        assert_eq!(tree.children(ns).len(), 2);
    }

    #[test]
    fn test_using_forms() {
        let tree = parse_str(
            "global using System.Linq;\nusing static System.Math;\nusing Map = System.Collections.Generic.Dictionary<string, int>;\n",
        );
        let usings: Vec<&UsingDirective> = tree.usings_in(tree.root()).collect();
        assert_eq!(usings.len(), 3);
        assert!(usings[0].is_global);
        assert!(usings[1].is_static);
        assert_eq!(usings[2].alias.as_deref(), Some("Map"));
        assert_eq!(
            usings[2].to_string(),
            "using Map = System.Collections.Generic.Dictionary<string, int>;"
        );
    }

    #[test]
    fn test_members_are_classified() {
        let tree = parse_str(
            r#"
public class Account
{
    private readonly ILogger _log;
    private int a, b;
    private Dictionary<int, string> _names = new Dictionary<int, string>(), _unused;
    public decimal Balance { get; private set; } = 0m;
    public string Owner => _owner;
    public event EventHandler Changed;
    public int this[int i] => i;
    public static Account operator +(Account x, Account y) => x;
    public static implicit operator decimal(Account a) => a.Balance;
    ~Account() { }
    public Account(ILogger log) : this(log, 0) { }
    public Account(ILogger log, int seed) { _log = log; }
    public void Deposit(decimal amount) { if (amount > 0) { Balance += amount; } }
    public T Convert<T>(Func<decimal, T> f) where T : struct => f(Balance);
    public abstract int Pending();
}
"#,
        );
        let (account, _) = only_type(&tree);
        let kinds: Vec<&str> = tree
            .children(account)
            .iter()
            .map(|&id| match tree.kind(id) {
                NodeKind::Field(_) => "field",
                NodeKind::Property(_) => "property",
                NodeKind::Constructor(_) => "ctor",
                NodeKind::Method(_) => "method",
                other => panic!("unexpected member {other:?}"),
            })
            .collect();
        assert_eq!(
            kinds,
            vec!["field", "field", "field", "property", "property", "ctor", "ctor", "method", "method", "method"]
        );

        let fields: Vec<&FieldDeclaration> = tree
            .children(account)
            .iter()
            .filter_map(|&id| match tree.kind(id) {
                NodeKind::Field(f) => Some(f),
                _ => None,
            })
            .collect();
        assert_eq!(fields[1].names, vec!["a", "b"]);
        assert_eq!(fields[2].ty.to_string(), "Dictionary<int, string>");

        let methods = methods(&tree, account);
        assert!(methods[0].is_void());
        assert_eq!(methods[1].type_params, vec!["T"]);
        assert_eq!(methods[1].params[0].ty.to_string(), "Func<decimal, T>");
        assert_eq!(methods[2].name, "Pending");
    }

    #[test]
    fn test_parameters() {
        let tree = parse_str(
            "public class P { public void M(ref int a, out string b, in double c, params object[] rest) { } \
             public void N([NotNull] IFoo foo, int limit = Defaults.Limit(3, 4), List<int>? items = null) { } }",
        );
        let (p, _) = only_type(&tree);
        let methods = methods(&tree, p);
        let m = &methods[0].params;
        assert_eq!(m[0].modifier, Some(ParamModifier::Ref));
        assert_eq!(m[1].modifier, Some(ParamModifier::Out));
        assert_eq!(m[2].modifier, Some(ParamModifier::In));
        assert_eq!(m[3].modifier, Some(ParamModifier::Params));
        assert_eq!(m[3].ty.to_string(), "object[]");

        let n = &methods[1].params;
        assert_eq!(n.len(), 3);
        assert_eq!(n[0].ty.simple_name(), Some("IFoo"));
        assert!(n[1].has_default);
        assert_eq!(n[2].ty.to_string(), "List<int>?");
    }

    #[test]
    fn test_nested_generics_close_on_split_angles() {
        let tree = parse_str("public class C { public List<List<int>> Grid(Dictionary<string, List<int>> map) => null; }");
        let (c, _) = only_type(&tree);
        let method = methods(&tree, c)[0];
        assert_eq!(method.return_type.as_ref().unwrap().to_string(), "List<List<int>>");
        assert_eq!(method.params[0].ty.to_string(), "Dictionary<string, List<int>>");
    }

    #[test]
    fn test_explicit_interface_implementation() {
        let tree = parse_str(
            "public class D : IDisposable, IEnumerable<int> { void IDisposable.Dispose() { } \
             IEnumerator<int> IEnumerable<int>.GetEnumerator() => null; }",
        );
        let (d, _) = only_type(&tree);
        let names: Vec<&str> = methods(&tree, d).iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Dispose", "GetEnumerator"]);
    }

    #[test]
    fn test_record_primary_constructor() {
        let tree = parse_str("public record Person(string Name, int Age);\npublic record struct Point(int X, int Y) { }");
        let types: Vec<_> = tree.type_declarations().collect();
        assert_eq!(types[0].1.kind, TypeKind::Record);
        assert_eq!(types[1].1.kind, TypeKind::RecordStruct);
        let ctors = constructors(&tree, types[0].0);
        assert_eq!(ctors.len(), 1);
        assert_eq!(ctors[0].params.len(), 2);
    }

    #[test]
    fn test_partial_static_generic_class_with_constraints() {
        let tree = parse_str("public static partial class Cache<TKey, TValue> : Base<TKey> where TKey : notnull, new() { }");
        let (_, decl) = only_type(&tree);
        assert!(decl.modifiers.is_static());
        assert!(decl.modifiers.contains(KeywordId::Partial));
        assert_eq!(decl.type_params, vec!["TKey", "TValue"]);
    }

    #[test]
    fn test_nested_types_and_enums() {
        let tree = parse_str(
            "namespace N { public enum Color { Red, Green = 2 } public class Outer { public class Inner { } private struct S { } } interface I { void M(); } }",
        );
        let names: Vec<(&str, TypeKind)> = tree.type_declarations().map(|(_, d)| (d.name.as_str(), d.kind)).collect();
        assert_eq!(
            names,
            vec![
                ("Color", TypeKind::Enum),
                ("Outer", TypeKind::Class),
                ("Inner", TypeKind::Class),
                ("S", TypeKind::Struct),
                ("I", TypeKind::Interface),
            ]
        );
    }

    #[test]
    fn test_top_level_statements_and_attributes_are_skipped() {
        let tree = parse_str(
            "[assembly: InternalsVisibleTo(\"Tests\")]\nusing System;\nConsole.WriteLine($\"{1}\");\nusing var scope = Open();\n[Serializable]\npublic class A { [Obsolete(\"x\")] public void M() { } }\n",
        );
        let (a, decl) = only_type(&tree);
        assert_eq!(decl.name, "A");
        assert_eq!(methods(&tree, a).len(), 1);
        assert_eq!(tree.usings_in(tree.root()).count(), 1);
    }

    #[test]
    fn test_empty_source() {
        let tree = parse_str("");
        assert_eq!(tree.len(), 1);
        assert!(tree.children(tree.root()).is_empty());
    }

    #[test]
    fn test_unclosed_class_is_an_error() {
        let err = parse_err("namespace A { public class B { public void M() { }");
        assert!(err.message.contains("Expected `}`"), "{}", err.message);
    }

    #[test]
    fn test_unclosed_method_body_is_an_error() {
        let err = parse_err("public class B { public void M() { if (x) { }");
        assert!(err.message.contains("Unclosed group"), "{}", err.message);
    }

    #[test]
    fn test_mismatched_brackets_are_an_error() {
        let err = parse_err("public class B { public void M() { Call(1]; } }");
        assert!(err.message.contains("Mismatched"), "{}", err.message);
    }

    #[test]
    fn test_file_scoped_namespace_inside_block_is_an_error() {
        let err = parse_err("namespace A { namespace B; }");
        assert!(err.message.contains("file level"), "{}", err.message);
    }

    #[test]
    fn test_member_spans_cover_their_declaration() {
        let source = "public class A { public int M() => 1; }";
        let tree = parse_str(source);
        let (a, _) = only_type(&tree);
        let member = tree.node(tree.children(a)[0]);
        assert_eq!(&source[member.span.start..member.span.end], "public int M() => 1;");
        let ty = tree.node(a);
        assert_eq!(&source[ty.span.start..ty.span.end], source);
    }
}
