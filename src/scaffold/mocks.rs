//! Mock eligibility of constructor dependencies.
//!
//! Whether a dependency is replaced with a strict mock is decided syntactically from its declared type: there is no
//! name resolution, so the default policy reads the naming convention of interfaces.

use testgen_core::lang::conventions;
use testgen_syntax::ast::TypeRef;

/// Decides whether a constructor parameter of type `ty` is satisfied with a mock object.
pub trait MockPolicy: Send + Sync {
    fn should_mock(&self, ty: &TypeRef) -> bool;
}

impl<F> MockPolicy for F
where
    F: Fn(&TypeRef) -> bool + Send + Sync,
{
    fn should_mock(&self, ty: &TypeRef) -> bool {
        self(ty)
    }
}

/// Mock every type whose simple name is `marker` followed by an upper-case letter (`IClock`, `Services.IRepo<T>`).
///
/// ## Notes
/// - `Item` and `I` alone are not mocked; `IO` is (the heuristic cannot tell it apart from an interface).
/// - Arrays, tuples and pointers are never mocked. Nullable types are judged by their underlying type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterfacePrefix {
    pub marker: char,
}

impl InterfacePrefix {
    pub fn new(marker: char) -> Self {
        Self { marker }
    }
}

impl Default for InterfacePrefix {
    fn default() -> Self {
        Self::new(conventions::INTERFACE_MARKER)
    }
}

impl MockPolicy for InterfacePrefix {
    fn should_mock(&self, ty: &TypeRef) -> bool {
        let Some(name) = ty.simple_name() else {
            return false;
        };
        let name = name.strip_prefix('@').unwrap_or(name);
        let mut chars = name.chars();
        chars.next() == Some(self.marker) && chars.next().is_some_and(char::is_uppercase)
    }
}

/// Never mock; every dependency becomes a `default` local.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMocks;

impl MockPolicy for NoMocks {
    fn should_mock(&self, _ty: &TypeRef) -> bool {
        false
    }
}

/// The type argument of `Mock<T>` for a dependency declared as `ty`.
///
/// `Mock<T>` requires a reference type, so a nullable annotation is dropped (`IClock?` → `IClock`).
pub fn mock_target(ty: &TypeRef) -> TypeRef {
    match ty {
        TypeRef::Nullable(inner) => mock_target(inner),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use testgen_syntax::ast::{NamedType, TypeSegment};

    fn qualified(segments: &[&str]) -> TypeRef {
        TypeRef::Named(NamedType {
            alias: None,
            segments: segments
                .iter()
                .map(|s| TypeSegment {
                    name: s.to_string(),
                    args: Vec::new(),
                })
                .collect(),
        })
    }

    #[test]
    fn test_interface_prefix_accepts_interfaces() {
        let policy = InterfacePrefix::default();
        assert!(policy.should_mock(&TypeRef::named("IPrintable")));
        assert!(policy.should_mock(&qualified(&["Services", "IClock"])));
        assert!(policy.should_mock(&TypeRef::generic("IRepository", vec![TypeRef::named("User")])));
        assert!(policy.should_mock(&TypeRef::Nullable(Box::new(TypeRef::named("ILogger")))));
    }

    #[test]
    fn test_interface_prefix_rejects_other_types() {
        let policy = InterfacePrefix::default();
        assert!(!policy.should_mock(&TypeRef::named("int")));
        assert!(!policy.should_mock(&TypeRef::named("Item")));
        assert!(!policy.should_mock(&TypeRef::named("I")));
        assert!(!policy.should_mock(&qualified(&["IServices", "Clock"])));
        assert!(!policy.should_mock(&TypeRef::Array {
            element: Box::new(TypeRef::named("IPrintable")),
            rank: 1,
        }));
    }

    #[test]
    fn test_custom_marker() {
        let policy = InterfacePrefix::new('T');
        assert!(policy.should_mock(&TypeRef::named("TClock")));
        assert!(!policy.should_mock(&TypeRef::named("IClock")));
    }

    #[test]
    fn test_closures_are_policies() {
        let policy = |ty: &TypeRef| ty.simple_name().is_some_and(|n| n.ends_with("Service"));
        assert!(policy.should_mock(&TypeRef::named("BillingService")));
        assert!(!NoMocks.should_mock(&TypeRef::named("IClock")));
    }

    #[test]
    fn test_mock_target_strips_nullable() {
        let ty = TypeRef::Nullable(Box::new(TypeRef::named("IClock")));
        assert_eq!(mock_target(&ty).to_string(), "IClock");
    }
}
