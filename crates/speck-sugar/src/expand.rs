//! Rewrites matched builtin member calls into their canonical form.
//!
//! `List list = Mock()` becomes `List list = Mock(List, "list")`: the argument list is
//! replaced by the type, the name literal and any extra arguments the caller supplies.
//! Callers must have checked the expression with [`crate::builtin`] first.

use speck_syntax::{BinaryExpr, CallExpr, ConstantExpr, ConstantValue, Expr, SourceSpan};

use crate::error::SugarError;
use crate::infer::{infer_call, infer_decl};

/// Expands a declaration or a bare call, whichever `expr` is.
pub fn expand_builtin_member_decl_or_call(
    expr: &mut Expr,
    extra: impl IntoIterator<Item = Expr>,
) -> Result<(), SugarError> {
    match expr {
        Expr::Binary(decl) => expand_builtin_member_decl(decl, extra),
        call => expand_builtin_member_call(call, extra),
    }
}

/// Expands `lhs = builtin(...)`, naming the call after the declared variable and falling
/// back to the declared type when the call has no type argument.
pub fn expand_builtin_member_decl(
    decl: &mut BinaryExpr,
    extra: impl IntoIterator<Item = Expr>,
) -> Result<(), SugarError> {
    if !decl.is_declaration() {
        return Err(SugarError::internal(
            "builtin member expansion requires a declaration",
        ));
    }
    let inferred = infer_decl(decl)?;
    let call = call_mut(&mut decl.rhs)?;
    expand_call(call, &inferred.name, inferred.ty, extra)
}

/// Expands a bare `builtin(...)` call. Its first argument must be the type.
pub fn expand_builtin_member_call(
    call: &mut Expr,
    extra: impl IntoIterator<Item = Expr>,
) -> Result<(), SugarError> {
    let inferred = infer_call(call)?;
    expand(call, &inferred.name, inferred.ty, extra)
}

/// Rewrites the call underlying `matched` (the call itself, or the right-hand side of a
/// declaration) to `(ty, "name", extra...)`.
pub fn expand(
    matched: &mut Expr,
    name: &str,
    ty: Expr,
    extra: impl IntoIterator<Item = Expr>,
) -> Result<(), SugarError> {
    let call = match matched {
        Expr::Binary(decl) if decl.is_declaration() => call_mut(&mut decl.rhs)?,
        other => call_mut(other)?,
    };
    expand_call(call, name, ty, extra)
}

/// Replaces the arguments of `call` with `(ty, "name", extra...)`.
///
/// Fails without touching the call if its arguments are the shared empty list.
pub fn expand_call(
    call: &mut CallExpr,
    name: &str,
    ty: Expr,
    extra: impl IntoIterator<Item = Expr>,
) -> Result<(), SugarError> {
    let Some(args) = call.args.exprs_mut() else {
        tracing::error!(
            target: "speck.sugar",
            method = ?call.method,
            span = ?call.span,
            "refusing to rewrite the shared empty argument list"
        );
        return Err(SugarError::internal(
            "builtin member call uses the shared empty argument list, which must not be mutated",
        ));
    };

    args.clear();
    args.push(ty);
    args.push(Expr::Constant(ConstantExpr {
        value: ConstantValue::String(name.to_string()),
        span: SourceSpan::UNKNOWN,
    }));
    args.extend(extra);

    tracing::debug!(
        target: "speck.sugar",
        method = ?call.method,
        name,
        args = args.len(),
        "expanded builtin member call"
    );
    Ok(())
}

fn call_mut(expr: &mut Expr) -> Result<&mut CallExpr, SugarError> {
    match expr {
        Expr::Call(call) => Ok(call),
        _ => Err(SugarError::internal(
            "builtin member expansion requires a call expression",
        )),
    }
}
