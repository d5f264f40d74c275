//! Test scaffold generation
//!
//! [`ScaffoldEngine`] turns one source text into one generated test source per qualifying class:
//!
//! ```text
//! source → SyntaxTree → ClassDescriptor → IrCompilationUnit → format → GeneratedTest
//! ```
//!
//! For every public class declared directly in a namespace (or at file level) the engine builds a `[TestFixture]`
//! class with:
//! - private fields for mocked constructor dependencies and for the instance under test,
//! - a `[SetUp]` method that creates the mocks and constructs the instance,
//! - one `[Test]` method per public method, sorted by name, with arranged `default` inputs, the call, a placeholder
//!   expectation and an `Assert.Fail` marker.
//!
//! The fixture is placed in the class's namespace chain with `Tests` appended to the innermost namespace, and is
//! named by that chain (`A.B.C.Tests.WidgetTests`).
//!
//! ## Examples
//!
//! ```rust
//! use testgen::scaffold::ScaffoldEngine;
//!
//! let engine = ScaffoldEngine::default();
//! let tests = engine.generate("namespace Shop { public class Cart { public int Count() => 0; } }").unwrap();
//! assert_eq!(tests[0].qualified_name, "Shop.Tests.CartTests");
//! assert!(tests[0].source.contains("var actual = _cart.Count();"));
//! ```
//!
//! ## Error Handling
//!
//! Generation is all-or-nothing per source: any lexical or syntax error yields a [`ParseError`] and no output.

pub mod error;
pub mod ir;
pub mod methods;
pub mod mocks;
pub mod model;
pub mod namespaces;
pub mod setup;

use std::fmt;
use std::sync::Arc;

use testgen_core::lang::conventions;
use testgen_core::lang::keywords::KeywordId;
use testgen_syntax::ast::Modifiers;
use testgen_syntax::tree::SyntaxTree;

use crate::format::{FormatConfig, format_unit};
use crate::frontend;

pub use error::ParseError;
pub use mocks::{InterfacePrefix, MockPolicy, NoMocks};

use ir::{IrAttribute, IrClass, IrClassMember, IrCompilationUnit, IrMember};
use model::{ClassDescriptor, overload_indices, qualifying_classes};

/// One generated test source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedTest {
    /// Dotted name of the fixture (`A.B.Tests.WidgetTests`); names the output file
    pub qualified_name: String,
    /// Complete compilation unit
    pub source: String,
}

/// A fixture before printing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldedClass {
    pub qualified_name: String,
    pub unit: IrCompilationUnit,
}

impl ScaffoldedClass {
    /// The fixture class inside the unit.
    pub fn fixture(&self) -> Option<&IrClass> {
        self.unit.classes().into_iter().next()
    }
}

/// Scaffold engine configuration
#[derive(Clone)]
pub struct ScaffoldConfig {
    /// Printer settings for generated sources
    pub format: FormatConfig,
    /// Message of the `Assert.Fail` closing every test
    pub fail_marker: String,
    /// Which constructor dependencies become mocks
    pub mock_policy: Arc<dyn MockPolicy>,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            format: FormatConfig::default(),
            fail_marker: conventions::DEFAULT_FAIL_MARKER.to_string(),
            mock_policy: Arc::new(InterfacePrefix::default()),
        }
    }
}

impl ScaffoldConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(mut self, format: FormatConfig) -> Self {
        self.format = format;
        self
    }

    pub fn with_fail_marker(mut self, marker: impl Into<String>) -> Self {
        self.fail_marker = marker.into();
        self
    }

    pub fn with_mock_policy(mut self, policy: impl MockPolicy + 'static) -> Self {
        self.mock_policy = Arc::new(policy);
        self
    }
}

impl fmt::Debug for ScaffoldConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScaffoldConfig")
            .field("format", &self.format)
            .field("fail_marker", &self.fail_marker)
            .finish_non_exhaustive()
    }
}

/// Generates test scaffolds from source text. Stateless between calls; share it behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct ScaffoldEngine {
    config: ScaffoldConfig,
}

impl ScaffoldEngine {
    pub fn new(config: ScaffoldConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScaffoldConfig {
        &self.config
    }

    /// Generate one test source per qualifying class of `source`, in document order.
    ///
    /// ## Errors
    ///
    /// Returns a [`ParseError`] if `source` cannot be lexed or parsed.
    #[tracing::instrument(skip_all, fields(source_len = source.len()))]
    pub fn generate(&self, source: &str) -> Result<Vec<GeneratedTest>, ParseError> {
        let tree = frontend::parse_source(source).map_err(|errors| ParseError::new(source, errors))?;
        let tests: Vec<GeneratedTest> = self
            .scaffold_tree(&tree)
            .into_iter()
            .map(|class| GeneratedTest {
                source: format_unit(&class.unit, &self.config.format),
                qualified_name: class.qualified_name,
            })
            .collect();
        tracing::debug!(count = tests.len(), "generated test sources");
        Ok(tests)
    }

    /// Build the output trees for every qualifying class of `tree`, without printing them.
    pub fn scaffold_tree(&self, tree: &SyntaxTree) -> Vec<ScaffoldedClass> {
        qualifying_classes(tree)
            .iter()
            .map(|class| self.scaffold_class(tree, class))
            .collect()
    }

    fn scaffold_class(&self, tree: &SyntaxTree, class: &ClassDescriptor<'_>) -> ScaffoldedClass {
        let setup = setup::synthesize_setup(class, self.config.mock_policy.as_ref());

        let methods = class.testable_methods();
        let tests = methods
            .iter()
            .zip(overload_indices(&methods))
            .map(|(method, index)| methods::synthesize_test(class, method, index, &self.config.fail_marker));

        let mut members: Vec<IrClassMember> = setup.fields.into_iter().map(IrClassMember::Field).collect();
        members.push(IrClassMember::Method(setup.method));
        members.extend(tests.map(IrClassMember::Method));

        let fixture = IrClass {
            attributes: vec![IrAttribute::new(conventions::TEST_FIXTURE_ATTRIBUTE)],
            modifiers: Modifiers::new(vec![KeywordId::Public]),
            name: conventions::test_class_name(class.name()),
            members,
        };

        let chain = namespaces::test_namespace_chain(&namespaces::namespace_chain(tree, class.id));
        let qualified_name = namespaces::qualified_name(&chain, &fixture.name);
        tracing::trace!(class = class.name(), %qualified_name, "scaffolded class");

        ScaffoldedClass {
            qualified_name,
            unit: IrCompilationUnit {
                usings: namespaces::collect_usings(tree, class.id),
                members: vec![namespaces::wrap_in_namespaces(&chain, IrMember::Class(fixture))],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use testgen_syntax::ast::TypeRef;

    #[test]
    fn test_fixture_member_order() {
        let engine = ScaffoldEngine::default();
        let tree = frontend::parse_source(
            "namespace N { public class Shop { public Shop(IClock clock) { } public void Zed() { } public int Add(int a) => a; } }",
        )
        .unwrap();
        let scaffolded = engine.scaffold_tree(&tree);
        assert_eq!(scaffolded.len(), 1);
        let fixture = scaffolded[0].fixture().unwrap();
        assert_eq!(fixture.name, "ShopTests");
        let fields: Vec<&str> = fixture.fields().map(|f| f.name.as_str()).collect();
        assert_eq!(fields, vec!["_clock", "_shop"]);
        let methods: Vec<&str> = fixture.methods().map(|m| m.name.as_str()).collect();
        assert_eq!(methods, vec!["Setup", "AddTest", "ZedTest"]);
        assert!(matches!(fixture.members[0], IrClassMember::Field(_)));
    }

    #[test]
    fn test_config_builders() {
        let config = ScaffoldConfig::new()
            .with_fail_marker("todo")
            .with_mock_policy(|ty: &TypeRef| ty.simple_name() == Some("Clock"));
        assert_eq!(config.fail_marker, "todo");
        assert!(config.mock_policy.should_mock(&TypeRef::named("Clock")));
        assert!(format!("{config:?}").contains("todo"));
    }

    #[test]
    fn test_generate_reports_parse_errors() {
        let err = ScaffoldEngine::default().generate("public class A {").unwrap_err();
        assert!(!err.errors().is_empty());
    }
}
