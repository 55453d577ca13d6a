use speck_syntax::Expr;

/// The ordered arguments of an instance or static call; `None` for any other expression.
///
/// Argument lists and tuples, and the shared empty list, all present the same view.
pub fn arguments(expr: &Expr) -> Option<&[Expr]> {
    match expr {
        Expr::Call(call) => Some(call.args.as_slice()),
        _ => None,
    }
}

pub fn argument_count(expr: &Expr) -> Option<usize> {
    arguments(expr).map(<[Expr]>::len)
}
