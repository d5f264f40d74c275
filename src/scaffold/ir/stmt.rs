//! IR statement definitions

use super::IrExpr;
use testgen_syntax::ast::{Ident, TypeRef};

/// Declared type of a local.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IrLocalType {
    Explicit(TypeRef),
    /// `var`
    Var,
}

/// Statement forms used by generated bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IrStmt {
    /// Local declaration (`int x = default;`, `var actual = ...;`)
    Local { ty: IrLocalType, name: Ident, value: IrExpr },

    /// Assignment (`_x = expr;`)
    Assign { target: IrExpr, value: IrExpr },

    /// Expression statement (`expr;`)
    Expr(IrExpr),
}

impl IrStmt {
    /// `T name = default;`
    pub fn default_local(ty: TypeRef, name: impl Into<Ident>) -> Self {
        IrStmt::Local {
            ty: IrLocalType::Explicit(ty),
            name: name.into(),
            value: IrExpr::Default,
        }
    }

    /// `var name = value;`
    pub fn var(name: impl Into<Ident>, value: IrExpr) -> Self {
        IrStmt::Local {
            ty: IrLocalType::Var,
            name: name.into(),
            value,
        }
    }

    pub fn assign(target: IrExpr, value: IrExpr) -> Self {
        IrStmt::Assign { target, value }
    }
}
