//! Behaviour tests for the scaffold engine.
//!
//! Generated sources are re-parsed with the crate's own frontend so assertions are made on structure (classes,
//! namespaces, methods) rather than on raw text; statement-level checks go through the output tree.

use std::fs;

use testgen::format::render_stmt;
use testgen::frontend::parse_source;
use testgen::scaffold::ir::{IrAttribute, IrClass};
use testgen::scaffold::{NoMocks, ScaffoldConfig, ScaffoldEngine, ScaffoldedClass};
use testgen::tree::{NodeKind, SyntaxTree, TypeKind};
use testgen::{FormatConfig, LineEnding};

fn load_fixture(name: &str) -> String {
    let path = format!("tests/fixtures/{}.cs", name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read fixture: {}", path))
}

fn scaffold(source: &str) -> Vec<ScaffoldedClass> {
    let tree = parse_source(source).expect("source should parse");
    ScaffoldEngine::default().scaffold_tree(&tree)
}

fn only_fixture(source: &str) -> IrClass {
    let scaffolded = scaffold(source);
    assert_eq!(scaffolded.len(), 1);
    scaffolded[0].fixture().expect("unit holds a class").clone()
}

fn body(class: &IrClass, method: &str) -> Vec<String> {
    class
        .method(method)
        .unwrap_or_else(|| panic!("no method {method}"))
        .body
        .iter()
        .map(render_stmt)
        .collect()
}

fn classes(tree: &SyntaxTree) -> usize {
    tree.type_declarations().filter(|(_, d)| d.kind == TypeKind::Class).count()
}

fn method_names(tree: &SyntaxTree) -> Vec<String> {
    tree.descendants(tree.root())
        .filter_map(|id| match tree.kind(id) {
            NodeKind::Method(m) => Some(m.name.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn test_one_output_per_class_each_with_one_class() {
    let source = load_fixture("program") + &load_fixture("overloads") + &load_fixture("dependencies");
    let tests = ScaffoldEngine::default().generate(&source).unwrap();
    assert_eq!(tests.len(), 3);

    for test in &tests {
        let tree = parse_source(&test.source).expect("generated source should parse");
        assert_eq!(classes(&tree), 1, "{}", test.source);
    }
}

#[test]
fn test_generated_method_counts() {
    for (fixture, expected) in [("program", 2), ("overloads", 3), ("dependencies", 3)] {
        let tests = ScaffoldEngine::default().generate(&load_fixture(fixture)).unwrap();
        assert_eq!(tests.len(), 1);
        let tree = parse_source(&tests[0].source).unwrap();
        assert_eq!(method_names(&tree).len(), expected, "{fixture}");
    }
}

#[test]
fn test_overloaded_methods_are_numbered() {
    let tests = ScaffoldEngine::default().generate(&load_fixture("overloads")).unwrap();
    let tree = parse_source(&tests[0].source).unwrap();
    assert_eq!(method_names(&tree), vec!["Setup", "Calculate0Test", "Calculate1Test"]);
}

#[test]
fn test_setup_method() {
    let fixture = only_fixture(&load_fixture("dependencies"));
    let setup = fixture.methods().next().unwrap();
    assert_eq!(setup.name, "Setup");
    assert_eq!(setup.modifiers.iter().count(), 1);
    assert_eq!(setup.attributes, vec![IrAttribute::new("SetUp")]);

    // 2 interfaces and 1 class
    assert_eq!(fixture.fields().count(), 3);

    assert_eq!(
        body(&fixture, "Setup"),
        vec![
            "_printable = new Mock<IPrintable>(MockBehavior.Strict).Object;",
            "_bebrable = new Mock<IBebrable>(MockBehavior.Strict).Object;",
            "int x = default;",
            "_bebraClass = new BebraClass(_printable, _bebrable, x);",
        ]
    );
}

#[test]
fn test_static_method_body() {
    let fixture = only_fixture(&load_fixture("dependencies"));
    assert_eq!(
        body(&fixture, "MultiplyStringTest"),
        vec![
            "int a = default;",
            "string str = default;",
            "var actual = BebraClass.MultiplyString(a, str);",
            "string expected = default;",
            "Assert.That(actual, Is.EqualTo(expected));",
            "Assert.Fail(\"autogenerated\");",
        ]
    );
}

#[test]
fn test_instance_method_body() {
    let fixture = only_fixture(&load_fixture("program"));
    assert_eq!(
        body(&fixture, "GetRandomTest"),
        vec![
            "var actual = _program.GetRandom();",
            "int expected = default;",
            "Assert.That(actual, Is.EqualTo(expected));",
            "Assert.Fail(\"autogenerated\");",
        ]
    );
    assert_eq!(body(&fixture, "Setup"), vec!["int seed = default;", "_program = new Program(seed);"]);
}

#[test]
fn test_void_method_body() {
    let fixture = only_fixture(&load_fixture("dependencies"));
    assert_eq!(
        body(&fixture, "OuterMethodTest"),
        vec!["int x = default;", "_bebraClass.OuterMethod(x);", "Assert.Fail(\"autogenerated\");"]
    );
}

#[test]
fn test_namespace_names() {
    let tests = ScaffoldEngine::default().generate(&load_fixture("dependencies")).unwrap();
    let tree = parse_source(&tests[0].source).unwrap();
    let namespaces: Vec<String> = tree
        .descendants(tree.root())
        .filter_map(|id| match tree.kind(id) {
            NodeKind::Namespace(ns) => Some(ns.name.to_string()),
            _ => None,
        })
        .collect();
    assert_eq!(namespaces, vec!["Bebra.Bebra1", "Bebra2.Tests"]);
}

#[test]
fn test_nested_namespace_qualified_name() {
    let tests = ScaffoldEngine::default()
        .generate("namespace A.B { namespace C { public class Widget { } } }")
        .unwrap();
    assert_eq!(tests[0].qualified_name, "A.B.C.Tests.WidgetTests");
}

#[test]
fn test_no_qualifying_classes() {
    let tests = ScaffoldEngine::default().generate(&load_fixture("no_classes")).unwrap();
    assert!(tests.is_empty());
    assert!(ScaffoldEngine::default().generate("").unwrap().is_empty());
}

#[test]
fn test_class_without_namespace_stays_at_top_level() {
    let tests = ScaffoldEngine::default()
        .generate("using System;\npublic class Calculator { public int Add(int a, int b) => a + b; }")
        .unwrap();
    assert_eq!(tests[0].qualified_name, "CalculatorTests");
    let tree = parse_source(&tests[0].source).unwrap();
    assert!(
        !tree
            .descendants(tree.root())
            .any(|id| matches!(tree.kind(id), NodeKind::Namespace(_)))
    );
    assert!(tests[0].source.starts_with("using System;\nusing NUnit.Framework;\nusing Moq;\n\n[TestFixture]\n"));
}

#[test]
fn test_classes_are_emitted_in_document_order() {
    let tests = ScaffoldEngine::default()
        .generate("namespace N { public class Zebra { } public class Apple { } } public class Mango { }")
        .unwrap();
    let names: Vec<&str> = tests.iter().map(|t| t.qualified_name.as_str()).collect();
    assert_eq!(names, vec!["N.Tests.ZebraTests", "N.Tests.AppleTests", "MangoTests"]);
}

#[test]
fn test_generation_is_deterministic() {
    let source = load_fixture("dependencies") + &load_fixture("file_scoped");
    let engine = ScaffoldEngine::default();
    assert_eq!(engine.generate(&source).unwrap(), engine.generate(&source).unwrap());
}

#[test]
fn test_configuration_is_honoured() {
    let config = ScaffoldConfig::new()
        .with_fail_marker("write me")
        .with_mock_policy(NoMocks)
        .with_format(FormatConfig::new().with_indent_width(2).with_line_ending(LineEnding::CrLf));
    let tests = ScaffoldEngine::new(config)
        .generate("namespace N { public class A { public A(IClock clock) { } public void Run() { } } }")
        .unwrap();
    let source = &tests[0].source;
    assert!(source.contains("\r\n  [TestFixture]\r\n"), "{source:?}");
    assert!(source.contains("IClock clock = default;"));
    assert!(source.contains("Assert.Fail(\"write me\");"));
    assert!(!source.contains("Mock<"));
}

#[test]
fn test_parse_error_carries_location() {
    let err = ScaffoldEngine::default().generate(&load_fixture("broken")).unwrap_err();
    assert!(err.message.contains("to close type `Unclosed`"), "{}", err.message);
    assert_eq!(err.file_name, "<source>");
    assert!(err.errors()[0].span.start > 0);
}

#[test]
fn test_inactive_preprocessor_branch_is_ignored() {
    let source = "namespace N { public class C {\npublic void M() {\n#if DEBUG\n if (x) {\n#else\n if (y) {\n#endif\n } } } }";
    let tests = ScaffoldEngine::default().generate(source).unwrap();
    assert_eq!(tests.len(), 1);
    assert_eq!(tests[0].qualified_name, "N.Tests.CTests");

    let tree = parse_source(&tests[0].source).unwrap();
    assert_eq!(method_names(&tree), vec!["Setup", "MTest"]);
}
