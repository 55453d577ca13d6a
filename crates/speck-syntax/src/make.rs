//! Constructors for tree nodes.
//!
//! Nodes built here carry [`SourceSpan::UNKNOWN`]; use [`Expr::with_span`] when a position
//! matters.

use speck_types::SourceSpan;

use crate::ast::*;

pub fn ty(name: &str) -> TypeRef {
    TypeRef::new(name)
}

pub fn var(name: &str) -> Expr {
    Expr::Variable(VariableExpr {
        name: name.to_string(),
        declared_type: None,
        span: SourceSpan::UNKNOWN,
    })
}

/// A variable with an explicitly declared type, e.g. the `T x` in `T x = ...`.
pub fn typed_var(name: &str, declared: &str) -> Expr {
    Expr::Variable(VariableExpr {
        name: name.to_string(),
        declared_type: Some(ty(declared)),
        span: SourceSpan::UNKNOWN,
    })
}

pub fn this() -> Expr {
    var(THIS)
}

pub fn super_() -> Expr {
    var(SUPER)
}

pub fn class_ref(name: &str) -> Expr {
    Expr::Class(ClassExpr {
        ty: ty(name),
        span: SourceSpan::UNKNOWN,
    })
}

pub fn property(target: Expr, property: &str) -> Expr {
    Expr::Property(PropertyExpr {
        target: Box::new(target),
        property: property.to_string(),
        span: SourceSpan::UNKNOWN,
    })
}

pub fn constant(value: ConstantValue) -> Expr {
    Expr::Constant(ConstantExpr {
        value,
        span: SourceSpan::UNKNOWN,
    })
}

pub fn string(value: &str) -> Expr {
    constant(ConstantValue::String(value.to_string()))
}

pub fn int(value: i64) -> Expr {
    constant(ConstantValue::Int(value))
}

pub fn null() -> Expr {
    constant(ConstantValue::Null)
}

pub fn call(receiver: Expr, method: &str, args: Vec<Expr>) -> Expr {
    Expr::Call(CallExpr {
        kind: CallKind::Instance {
            receiver: Box::new(receiver),
        },
        method: Some(method.to_string()),
        args: Arguments::ArgumentList(args),
        span: SourceSpan::UNKNOWN,
    })
}

/// `method(args)` with the implicit `this` receiver.
pub fn this_call(method: &str, args: Vec<Expr>) -> Expr {
    call(this(), method, args)
}

pub fn static_call(owner: &str, method: &str, args: Vec<Expr>) -> Expr {
    Expr::Call(CallExpr {
        kind: CallKind::Static { owner: ty(owner) },
        method: Some(method.to_string()),
        args: Arguments::ArgumentList(args),
        span: SourceSpan::UNKNOWN,
    })
}

pub fn binary(lhs: Expr, op: BinaryOp, rhs: Expr) -> Expr {
    Expr::Binary(BinaryExpr {
        lhs: Box::new(lhs),
        op,
        rhs: Box::new(rhs),
        declaration: None,
        span: SourceSpan::UNKNOWN,
    })
}

/// `lhs = rhs` as a local variable declaration.
pub fn declare(lhs: Expr, rhs: Expr) -> Expr {
    declaration(DeclarationKind::Local, lhs, rhs)
}

/// `field = rhs` as a field initializer.
pub fn field_init(lhs: Expr, rhs: Expr) -> Expr {
    declaration(DeclarationKind::FieldInitializer, lhs, rhs)
}

fn declaration(kind: DeclarationKind, lhs: Expr, rhs: Expr) -> Expr {
    Expr::Binary(BinaryExpr {
        lhs: Box::new(lhs),
        op: BinaryOp::Assign,
        rhs: Box::new(rhs),
        declaration: Some(kind),
        span: SourceSpan::UNKNOWN,
    })
}

pub fn closure(statements: Vec<Stmt>) -> Expr {
    Expr::Closure(ClosureExpr {
        body: Some(block_of(statements)),
        span: SourceSpan::UNKNOWN,
    })
}

pub fn expr_stmt(expr: Expr) -> Stmt {
    let span = expr.span();
    Stmt::Expr(ExprStmt { expr, span })
}

pub fn block(statements: Vec<Stmt>) -> Stmt {
    Stmt::Block(block_of(statements))
}

fn block_of(statements: Vec<Stmt>) -> Block {
    Block {
        statements,
        span: SourceSpan::UNKNOWN,
    }
}

pub fn assert(condition: Expr, message: Option<Expr>) -> Stmt {
    Stmt::Assert(AssertStmt {
        condition,
        message,
        span: SourceSpan::UNKNOWN,
    })
}
