//! Live statement lists for method and closure bodies.
//!
//! Callers splice statements into the returned lists; changes are visible in the tree.

use speck_syntax::{Block, ClosureExpr, MethodNode, Stmt};

/// Statements of `method`, normalizing its body to a block first.
///
/// An absent body becomes an empty block and a single statement is wrapped in a block.
/// Once normalized, every call returns the same list.
pub fn statements(method: &mut MethodNode) -> &mut Vec<Stmt> {
    let span = method.span;
    let block = match method.body.take().map(|body| *body) {
        Some(Stmt::Block(block)) => block,
        Some(single) => {
            tracing::trace!(
                target: "speck.sugar",
                method = %method.name,
                "wrapping single-statement body in a block"
            );
            Block {
                statements: vec![single],
                span,
            }
        }
        None => Block::empty(span),
    };

    let body = method.body.insert(Box::new(Stmt::Block(block)));
    let Stmt::Block(block) = &mut **body else {
        unreachable!("method body was just replaced by a block");
    };
    &mut block.statements
}

/// Statements of `closure`; empty if the closure has no recorded block.
pub fn closure_statements(closure: &ClosureExpr) -> &[Stmt] {
    match &closure.body {
        Some(block) => &block.statements,
        None => &[],
    }
}

/// Mutable statements of `closure`.
///
/// Returns `None` when the closure has no recorded block: such a closure cannot be
/// retrofitted with statements.
pub fn closure_statements_mut(closure: &mut ClosureExpr) -> Option<&mut Vec<Stmt>> {
    closure.body.as_mut().map(|block| &mut block.statements)
}
