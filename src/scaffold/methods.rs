//! Test-method synthesis: one Arrange/Act/Assert skeleton per public method.

use testgen_core::lang::conventions;
use testgen_core::lang::keywords::KeywordId;
use testgen_syntax::ast::Modifiers;
use testgen_syntax::tree::MethodDeclaration;

use super::ir::{IrArg, IrAttribute, IrExpr, IrMethod, IrStmt};
use super::model::ClassDescriptor;

/// Build the test for `method` of `class`.
///
/// ```text
/// [Test]
/// public void GetTest()
/// {
///     int seed = default;                           // arrange, one per parameter
///     var actual = _widget.Get(seed);               // act; a plain call for void methods
///     int expected = default;                       // assert, non-void only
///     Assert.That(actual, Is.EqualTo(expected));
///     Assert.Fail("autogenerated");
/// }
/// ```
pub fn synthesize_test(
    class: &ClassDescriptor<'_>,
    method: &MethodDeclaration,
    overload_index: Option<usize>,
    fail_marker: &str,
) -> IrMethod {
    let mut body: Vec<IrStmt> = method
        .params
        .iter()
        .map(|param| IrStmt::default_local(param.ty.clone(), param.name.clone()))
        .collect();

    let receiver = if method.modifiers.is_static() || class.is_static() {
        IrExpr::name(class.name())
    } else {
        IrExpr::name(conventions::instance_field_name(class.name()))
    };
    let args = method
        .params
        .iter()
        .map(|param| IrArg::for_param(param.modifier, IrExpr::name(param.name.clone())))
        .collect();
    let call = receiver.member(method.name.clone()).call(args);

    match &method.return_type {
        Some(return_type) => {
            body.push(IrStmt::var(conventions::ACTUAL_LOCAL, call));
            body.push(IrStmt::default_local(return_type.clone(), conventions::EXPECTED_LOCAL));
            body.push(IrStmt::Expr(assert_that_equal(
                conventions::ACTUAL_LOCAL,
                conventions::EXPECTED_LOCAL,
            )));
        }
        None => body.push(IrStmt::Expr(call)),
    }
    body.push(IrStmt::Expr(assert_fail(fail_marker)));

    IrMethod {
        attributes: vec![IrAttribute::new(conventions::TEST_ATTRIBUTE)],
        modifiers: Modifiers::new(vec![KeywordId::Public]),
        return_type: None,
        name: conventions::test_method_name(&method.name, overload_index),
        body,
    }
}

/// `Assert.That(actual, Is.EqualTo(expected))`
fn assert_that_equal(actual: &str, expected: &str) -> IrExpr {
    let constraint = IrExpr::name(conventions::CONSTRAINT_TYPE)
        .member(conventions::CONSTRAINT_EQUAL_TO)
        .call(vec![IrExpr::name(expected).into()]);
    IrExpr::name(conventions::ASSERT_TYPE)
        .member(conventions::ASSERT_THAT)
        .call(vec![IrExpr::name(actual).into(), constraint.into()])
}

/// `Assert.Fail("marker")`
fn assert_fail(marker: &str) -> IrExpr {
    IrExpr::name(conventions::ASSERT_TYPE)
        .member(conventions::ASSERT_FAIL)
        .call(vec![IrExpr::str(marker).into()])
}
