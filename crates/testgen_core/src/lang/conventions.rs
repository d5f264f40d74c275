//! Well-known names used by generated test scaffolds.
//!
//! Generated sources reference an NUnit-style test framework and a Moq-style mocking library purely
//! syntactically. Every spelling the scaffold engine emits lives here.

/// Namespace imported for assertions and fixture attributes.
pub const TEST_FRAMEWORK_NAMESPACE: &str = "NUnit.Framework";

/// Namespace imported for mock objects.
pub const MOCKING_NAMESPACE: &str = "Moq";

/// Attribute marking a generated class as a test fixture.
pub const TEST_FIXTURE_ATTRIBUTE: &str = "TestFixture";

/// Attribute marking the per-test setup method.
pub const SETUP_ATTRIBUTE: &str = "SetUp";

/// Attribute marking a test method.
pub const TEST_ATTRIBUTE: &str = "Test";

/// Name of the generated setup method.
pub const SETUP_METHOD_NAME: &str = "Setup";

/// Suffix appended to the class under test to name its fixture.
pub const TEST_CLASS_SUFFIX: &str = "Tests";

/// Suffix appended to a method name (after any overload index) to name its test.
pub const TEST_METHOD_SUFFIX: &str = "Test";

/// Segment appended to the innermost enclosing namespace.
pub const TEST_NAMESPACE_SEGMENT: &str = "Tests";

/// Default fail-marker text passed to [`ASSERT_FAIL`].
pub const DEFAULT_FAIL_MARKER: &str = "autogenerated";

/// Prefix of every synthesized private field.
pub const FIELD_PREFIX: &str = "_";

/// Conventional leading marker of interface type names.
pub const INTERFACE_MARKER: char = 'I';

/// Local receiving the result of the call under test.
pub const ACTUAL_LOCAL: &str = "actual";

/// Local holding the placeholder expected value.
pub const EXPECTED_LOCAL: &str = "expected";

/// Generic mock wrapper type.
pub const MOCK_TYPE: &str = "Mock";

/// Enum selecting mock behaviour.
pub const MOCK_BEHAVIOR_TYPE: &str = "MockBehavior";

/// Strict mock behaviour member.
pub const MOCK_BEHAVIOR_STRICT: &str = "Strict";

/// Property exposing the mocked proxy object.
pub const MOCK_OBJECT_PROPERTY: &str = "Object";

/// Appended to a dependency field whose name is taken by the instance under test (`_loggerMock`).
pub const MOCK_FIELD_SUFFIX: &str = "Mock";

/// Assertion entry type.
pub const ASSERT_TYPE: &str = "Assert";

/// Constraint-based assertion method.
pub const ASSERT_THAT: &str = "That";

/// Unconditional failure method.
pub const ASSERT_FAIL: &str = "Fail";

/// Constraint factory type.
pub const CONSTRAINT_TYPE: &str = "Is";

/// Equality constraint method.
pub const CONSTRAINT_EQUAL_TO: &str = "EqualTo";

/// Default extension of generated source files.
pub const SOURCE_EXTENSION: &str = "cs";

/// Lower-case the leading character of an identifier (`BebraClass` → `bebraClass`).
///
/// ## Notes
/// - A leading `@` (verbatim identifier marker) is dropped; the result is always combined with a prefix.
pub fn lower_first(ident: &str) -> String {
    let ident = ident.strip_prefix('@').unwrap_or(ident);
    let mut chars = ident.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Name of the private field holding a mocked constructor dependency (`printable` → `_printable`).
pub fn dependency_field_name(param: &str) -> String {
    format!("{FIELD_PREFIX}{}", param.strip_prefix('@').unwrap_or(param))
}

/// Name of the private field holding the instance under test (`BebraClass` → `_bebraClass`).
pub fn instance_field_name(class_name: &str) -> String {
    format!("{FIELD_PREFIX}{}", lower_first(class_name))
}

/// Name of the fixture generated for `class_name`.
pub fn test_class_name(class_name: &str) -> String {
    format!("{}{TEST_CLASS_SUFFIX}", class_name.strip_prefix('@').unwrap_or(class_name))
}

/// Name of the test generated for `method_name`, with an optional overload index.
pub fn test_method_name(method_name: &str, overload_index: Option<usize>) -> String {
    let method_name = method_name.strip_prefix('@').unwrap_or(method_name);
    match overload_index {
        Some(index) => format!("{method_name}{index}{TEST_METHOD_SUFFIX}"),
        None => format!("{method_name}{TEST_METHOD_SUFFIX}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instance_fields_lower_case_the_class_name() {
        assert_eq!(instance_field_name("BebraClass"), "_bebraClass");
        assert_eq!(instance_field_name("program"), "_program");
    }

    #[test]
    fn verbatim_markers_are_dropped_from_derived_names() {
        assert_eq!(dependency_field_name("@event"), "_event");
        assert_eq!(test_class_name("@Widget"), "WidgetTests");
    }

    #[test]
    fn test_method_names_carry_the_overload_index() {
        assert_eq!(test_method_name("Calculate", None), "CalculateTest");
        assert_eq!(test_method_name("Calculate", Some(1)), "Calculate1Test");
    }

    #[test]
    fn lower_first_handles_empty_and_unicode() {
        assert_eq!(lower_first(""), "");
        assert_eq!(lower_first("Élan"), "élan");
    }
}
