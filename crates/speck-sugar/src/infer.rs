//! Name and type inference for builtin member calls.
//!
//! An explicit first argument always wins as the type. Without one, a declaration can
//! supply its declared type; a bare call cannot.

use speck_syntax::{BinaryExpr, ClassExpr, Expr};

use crate::args::arguments;
use crate::error::SugarError;

/// Name used for a declaration whose left-hand side is not a simple variable.
pub const UNKNOWN_NAME: &str = "(unknown)";

/// Name used for a builtin call outside of any declaration.
pub const UNNAMED: &str = "(unnamed)";

const TYPE_NOT_INFERRED: &str = "Type cannot be inferred; please specify one explicitly";

/// What a builtin call gets expanded with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inferred {
    pub name: String,
    pub ty: Expr,
}

/// Infers name and type for `lhs = builtin(...)`.
pub fn infer_decl(decl: &BinaryExpr) -> Result<Inferred, SugarError> {
    let ty = resolve_type(&decl.rhs, || declared_type(decl))?;
    Ok(Inferred {
        name: declared_name(decl).to_string(),
        ty,
    })
}

/// Infers name and type for a bare `builtin(...)` call.
pub fn infer_call(call: &Expr) -> Result<Inferred, SugarError> {
    let ty = resolve_type(call, || None)?;
    Ok(Inferred {
        name: UNNAMED.to_string(),
        ty,
    })
}

pub fn declared_name(decl: &BinaryExpr) -> &str {
    match &*decl.lhs {
        Expr::Variable(var) => &var.name,
        _ => UNKNOWN_NAME,
    }
}

/// Reference to the explicitly declared type of the declaration's left-hand side.
pub fn declared_type(decl: &BinaryExpr) -> Option<Expr> {
    let Expr::Variable(var) = &*decl.lhs else {
        return None;
    };
    let ty = var.declared_type.as_ref()?;
    Some(Expr::Class(ClassExpr {
        ty: ty.clone(),
        span: ty.span,
    }))
}

/// The call's first argument, or `fallback` when it has none.
pub fn resolve_type(
    call: &Expr,
    fallback: impl FnOnce() -> Option<Expr>,
) -> Result<Expr, SugarError> {
    let Some(args) = arguments(call) else {
        return Err(SugarError::internal(
            "type inference requires a builtin member call",
        ));
    };

    if let Some(first) = args.first() {
        return Ok(first.clone());
    }

    fallback().ok_or_else(|| {
        tracing::debug!(
            target: "speck.sugar",
            span = ?call.span(),
            "builtin member call has no type argument and no declared type"
        );
        SugarError::syntax(TYPE_NOT_INFERRED, call.span())
    })
}
