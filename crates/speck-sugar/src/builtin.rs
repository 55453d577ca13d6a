//! Recognition of builtin helper members.
//!
//! A builtin member is a helper inherited from the specification base type (`Mock()`,
//! `Stub()`, ...) that is either called directly, as in `Mock(List)`, or used to initialize a
//! declaration, as in `List list = Mock()`. The call must have an implicit or explicit
//! `this`/`super` receiver.

use speck_syntax::{BinaryExpr, CallKind, Expr};

use crate::classify::{is_super_reference, is_this_reference};

pub fn is_builtin_member_decl_or_call(
    expr: &Expr,
    name: &str,
    min_args: usize,
    max_args: usize,
) -> bool {
    match expr {
        Expr::Binary(binary) => is_builtin_member_decl(binary, name, min_args, max_args),
        _ => is_builtin_member_call(expr, name, min_args, max_args),
    }
}

/// A local variable declaration or field initializer whose value is a builtin member call.
pub fn is_builtin_member_decl(
    binary: &BinaryExpr,
    name: &str,
    min_args: usize,
    max_args: usize,
) -> bool {
    binary.is_declaration() && is_builtin_member_call(&binary.rhs, name, min_args, max_args)
}

/// A call of the form `name(...)`, `this.name(...)` or `super.name(...)` with between
/// `min_args` and `max_args` arguments (inclusive).
pub fn is_builtin_member_call(expr: &Expr, name: &str, min_args: usize, max_args: usize) -> bool {
    let Expr::Call(call) = expr else {
        return false;
    };
    let CallKind::Instance { receiver } = &call.kind else {
        return false;
    };

    (is_this_reference(receiver) || is_super_reference(receiver))
        && call.method.as_deref() == Some(name)
        && (min_args..=max_args).contains(&call.args.len())
}

/// A registered builtin helper and the argument counts it accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltinMember {
    pub name: String,
    pub min_args: usize,
    pub max_args: usize,
}

impl BuiltinMember {
    pub fn new(name: impl Into<String>, min_args: usize, max_args: usize) -> Self {
        Self {
            name: name.into(),
            min_args,
            max_args,
        }
    }

    pub fn matches(&self, expr: &Expr) -> bool {
        is_builtin_member_decl_or_call(expr, &self.name, self.min_args, self.max_args)
    }
}

/// The set of builtin members a driver looks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltinMembers {
    members: Vec<BuiltinMember>,
}

impl BuiltinMembers {
    pub fn new(members: Vec<BuiltinMember>) -> Self {
        Self { members }
    }

    /// The first registered member matching `expr`, if any.
    pub fn find(&self, expr: &Expr) -> Option<&BuiltinMember> {
        self.members.iter().find(|member| member.matches(expr))
    }

    pub fn iter(&self) -> impl Iterator<Item = &BuiltinMember> {
        self.members.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl Default for BuiltinMembers {
    /// The mock factories: `Mock`, `Stub` and `Spy`, each taking up to a type and a
    /// name/options argument.
    fn default() -> Self {
        Self::new(vec![
            BuiltinMember::new("Mock", 0, 2),
            BuiltinMember::new("Stub", 0, 2),
            BuiltinMember::new("Spy", 0, 2),
        ])
    }
}
