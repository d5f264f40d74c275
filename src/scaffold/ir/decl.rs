//! IR declaration definitions

use super::IrStmt;
use testgen_syntax::ast::{Ident, Modifiers, QualifiedName, TypeRef, UsingDirective};

/// One generated source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrCompilationUnit {
    pub usings: Vec<UsingDirective>,
    pub members: Vec<IrMember>,
}

impl IrCompilationUnit {
    /// Every class in the unit, depth-first.
    pub fn classes(&self) -> Vec<&IrClass> {
        fn collect<'a>(members: &'a [IrMember], out: &mut Vec<&'a IrClass>) {
            for member in members {
                match member {
                    IrMember::Class(class) => out.push(class),
                    IrMember::Namespace(ns) => collect(&ns.members, out),
                }
            }
        }
        let mut out = Vec::new();
        collect(&self.members, &mut out);
        out
    }
}

/// Namespace-level member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IrMember {
    Namespace(IrNamespace),
    Class(IrClass),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrNamespace {
    pub name: QualifiedName,
    pub members: Vec<IrMember>,
}

/// Attribute without arguments (`[TestFixture]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrAttribute {
    pub name: Ident,
}

impl IrAttribute {
    pub fn new(name: impl Into<Ident>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrClass {
    pub attributes: Vec<IrAttribute>,
    pub modifiers: Modifiers,
    pub name: Ident,
    pub members: Vec<IrClassMember>,
}

impl IrClass {
    pub fn fields(&self) -> impl Iterator<Item = &IrField> {
        self.members.iter().filter_map(|m| match m {
            IrClassMember::Field(f) => Some(f),
            IrClassMember::Method(_) => None,
        })
    }

    pub fn methods(&self) -> impl Iterator<Item = &IrMethod> {
        self.members.iter().filter_map(|m| match m {
            IrClassMember::Method(method) => Some(method),
            IrClassMember::Field(_) => None,
        })
    }

    pub fn method(&self, name: &str) -> Option<&IrMethod> {
        self.methods().find(|m| m.name == name)
    }
}

/// Class member, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IrClassMember {
    Field(IrField),
    Method(IrMethod),
}

/// Field declaration without initializer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrField {
    pub modifiers: Modifiers,
    pub ty: TypeRef,
    pub name: Ident,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrMethod {
    pub attributes: Vec<IrAttribute>,
    pub modifiers: Modifiers,
    /// `None` for `void`
    pub return_type: Option<TypeRef>,
    pub name: Ident,
    pub body: Vec<IrStmt>,
}
