//! IR expression definitions

use testgen_syntax::ast::{Ident, ParamModifier, TypeRef};

/// Expression forms used by generated setup and test bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IrExpr {
    /// Simple name (`_printable`, `Assert`)
    Name(Ident),
    /// Member access (`MockBehavior.Strict`)
    Member { target: Box<IrExpr>, name: Ident },
    /// Invocation (`Assert.Fail("...")`)
    Call { callee: Box<IrExpr>, args: Vec<IrArg> },
    /// Object creation (`new Mock<IPrintable>(MockBehavior.Strict)`)
    New { ty: TypeRef, args: Vec<IrArg> },
    /// `default` literal
    Default,
    /// String literal; the value is unescaped
    Str(String),
}

impl IrExpr {
    pub fn name(name: impl Into<Ident>) -> Self {
        IrExpr::Name(name.into())
    }

    pub fn str(value: impl Into<String>) -> Self {
        IrExpr::Str(value.into())
    }

    pub fn new_object(ty: TypeRef, args: Vec<IrArg>) -> Self {
        IrExpr::New { ty, args }
    }

    /// `self.name`
    pub fn member(self, name: impl Into<Ident>) -> Self {
        IrExpr::Member {
            target: Box::new(self),
            name: name.into(),
        }
    }

    /// `self(args)`
    pub fn call(self, args: Vec<IrArg>) -> Self {
        IrExpr::Call {
            callee: Box::new(self),
            args,
        }
    }
}

/// Call argument, with the by-reference modifier the callee's parameter requires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrArg {
    pub modifier: Option<ParamModifier>,
    pub value: IrExpr,
}

impl IrArg {
    pub fn plain(value: IrExpr) -> Self {
        Self { modifier: None, value }
    }

    /// Argument passed to a parameter declared with `modifier`.
    ///
    /// Only `ref`, `out` and `in` are repeated at the call site; `params` and `this` are not.
    pub fn for_param(modifier: Option<ParamModifier>, value: IrExpr) -> Self {
        Self {
            modifier: modifier.filter(|m| m.is_by_reference()),
            value,
        }
    }
}

impl From<IrExpr> for IrArg {
    fn from(value: IrExpr) -> Self {
        IrArg::plain(value)
    }
}
