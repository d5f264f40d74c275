//! Setup synthesis: fixture fields and the `[SetUp]` method that builds the instance under test.

use testgen_core::lang::conventions;
use testgen_core::lang::keywords::KeywordId;
use testgen_syntax::ast::{Modifiers, Param, TypeRef};

use super::ir::{IrArg, IrAttribute, IrExpr, IrField, IrMethod, IrStmt};
use super::mocks::{MockPolicy, mock_target};
use super::model::ClassDescriptor;

/// Fields and setup method generated for one class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupPlan {
    /// Mocked dependencies in parameter order, then the instance under test
    pub fields: Vec<IrField>,
    pub method: IrMethod,
}

/// Build the setup of the fixture for `class`.
///
/// Each parameter of the primary constructor is either a strict mock stored in a field (when `policy` accepts its
/// type) or a `default` local. A mock field named like the instance field gets a `Mock` suffix. The instance is then
/// constructed with those values, in parameter order. Static
/// classes have no instance: their setup only carries the attribute.
pub fn synthesize_setup(class: &ClassDescriptor<'_>, policy: &dyn MockPolicy) -> SetupPlan {
    let mut fields = Vec::new();
    let mut body = Vec::new();

    if !class.is_static() {
        let params: &[Param] = class.primary_constructor().map_or(&[][..], |ctor| ctor.params.as_slice());
        let mut args = Vec::with_capacity(params.len());
        let instance = conventions::instance_field_name(class.name());

        for param in params {
            let value = if policy.should_mock(&param.ty) {
                let mut field = conventions::dependency_field_name(&param.name);
                if field == instance {
                    field.push_str(conventions::MOCK_FIELD_SUFFIX);
                }
                fields.push(private_field(param.ty.clone(), field.clone()));
                body.push(IrStmt::assign(IrExpr::name(field.clone()), strict_mock(&param.ty)));
                IrExpr::name(field)
            } else {
                body.push(IrStmt::default_local(param.ty.clone(), param.name.clone()));
                IrExpr::name(param.name.clone())
            };
            args.push(IrArg::for_param(param.modifier, value));
        }

        fields.push(private_field(TypeRef::named(class.name()), instance.clone()));
        body.push(IrStmt::assign(
            IrExpr::name(instance),
            IrExpr::new_object(TypeRef::named(class.name()), args),
        ));
    }

    SetupPlan {
        fields,
        method: IrMethod {
            attributes: vec![IrAttribute::new(conventions::SETUP_ATTRIBUTE)],
            modifiers: Modifiers::new(vec![KeywordId::Public]),
            return_type: None,
            name: conventions::SETUP_METHOD_NAME.to_string(),
            body,
        },
    }
}

fn private_field(ty: TypeRef, name: String) -> IrField {
    IrField {
        modifiers: Modifiers::new(vec![KeywordId::Private]),
        ty,
        name,
    }
}

/// `new Mock<T>(MockBehavior.Strict).Object`
fn strict_mock(ty: &TypeRef) -> IrExpr {
    let behavior = IrExpr::name(conventions::MOCK_BEHAVIOR_TYPE).member(conventions::MOCK_BEHAVIOR_STRICT);
    IrExpr::new_object(
        TypeRef::generic(conventions::MOCK_TYPE, vec![mock_target(ty)]),
        vec![behavior.into()],
    )
    .member(conventions::MOCK_OBJECT_PROPERTY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::render_stmt;
    use crate::scaffold::mocks::{InterfacePrefix, NoMocks};
    use crate::scaffold::model::qualifying_classes;
    use testgen_syntax::parse_source;

    fn setup_for(source: &str, policy: &dyn MockPolicy) -> SetupPlan {
        let tree = parse_source(source).unwrap();
        let class = &qualifying_classes(&tree)[0];
        synthesize_setup(class, policy)
    }

    fn lines(plan: &SetupPlan) -> Vec<String> {
        plan.method.body.iter().map(render_stmt).collect()
    }

    #[test]
    fn test_mocks_and_locals_in_parameter_order() {
        let plan = setup_for(
            "public class BebraClass { public BebraClass(IPrintable printable, IBebrable bebrable, int x) { } }",
            &InterfacePrefix::default(),
        );
        let fields: Vec<(String, String)> = plan.fields.iter().map(|f| (f.ty.to_string(), f.name.clone())).collect();
        assert_eq!(
            fields,
            vec![
                ("IPrintable".to_string(), "_printable".to_string()),
                ("IBebrable".to_string(), "_bebrable".to_string()),
                ("BebraClass".to_string(), "_bebraClass".to_string()),
            ]
        );
        assert_eq!(
            lines(&plan),
            vec![
                "_printable = new Mock<IPrintable>(MockBehavior.Strict).Object;",
                "_bebrable = new Mock<IBebrable>(MockBehavior.Strict).Object;",
                "int x = default;",
                "_bebraClass = new BebraClass(_printable, _bebrable, x);",
            ]
        );
        assert_eq!(plan.method.name, "Setup");
        assert_eq!(plan.method.attributes, vec![IrAttribute::new("SetUp")]);
    }

    #[test]
    fn test_no_constructor_builds_with_no_arguments() {
        let plan = setup_for("public class Program { }", &InterfacePrefix::default());
        assert_eq!(lines(&plan), vec!["_program = new Program();"]);
        assert_eq!(plan.fields.len(), 1);
    }

    #[test]
    fn test_by_reference_modifiers_are_preserved() {
        let plan = setup_for(
            "public class Parser { public Parser(ref int depth, in IOptions options, params string[] rest) { } }",
            &InterfacePrefix::default(),
        );
        assert_eq!(
            lines(&plan).last().unwrap(),
            "_parser = new Parser(ref depth, in _options, rest);"
        );
    }

    #[test]
    fn test_nullable_dependency_mock_uses_underlying_type() {
        let plan = setup_for("public class A { public A(ILogger? log) { } }", &InterfacePrefix::default());
        assert_eq!(plan.fields[0].ty.to_string(), "ILogger?");
        assert_eq!(lines(&plan)[0], "_log = new Mock<ILogger>(MockBehavior.Strict).Object;");
    }

    #[test]
    fn test_policy_decides_mocking() {
        let plan = setup_for("public class A { public A(IClock clock) { } }", &NoMocks);
        assert_eq!(lines(&plan), vec!["IClock clock = default;", "_a = new A(clock);"]);
    }

    #[test]
    fn test_mock_field_does_not_shadow_instance() {
        let plan = setup_for("public class Logger { public Logger(ILogger logger) { } }", &InterfacePrefix::default());
        let names: Vec<&str> = plan.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["_loggerMock", "_logger"]);
        assert_eq!(
            lines(&plan),
            vec![
                "_loggerMock = new Mock<ILogger>(MockBehavior.Strict).Object;",
                "_logger = new Logger(_loggerMock);",
            ]
        );
    }

    #[test]
    fn test_static_class_has_no_instance() {
        let plan = setup_for("public static class MathUtil { public static int Twice(int x) => x * 2; }", &NoMocks);
        assert!(plan.fields.is_empty());
        assert!(plan.method.body.is_empty());
    }
}
