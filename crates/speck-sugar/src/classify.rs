//! Structural predicates over tree nodes.
//!
//! Every predicate here is pure and total: a node of an unexpected kind yields `false` or
//! `None`, never an error.

use std::borrow::Cow;

use speck_syntax::{
    Annotation, AnnotationType, AssertStmt, BinaryExpr, BinaryOp, CallKind, ClassExpr, Expr,
    MethodNode, Modifiers, Node, Stmt,
};

/// Qualified name of the base type every specification extends.
pub const SPECIFICATION_TYPE: &str = "speck.lang.Specification";

/// Name of the static placeholder property on [`SPECIFICATION_TYPE`] (`Specification._`).
pub const PLACEHOLDER_SYMBOL: &str = "_";

/// Tells whether `node` carries an annotation of type `ty`.
pub fn has_annotation<'a>(node: impl Into<Node<'a>>, ty: &AnnotationType) -> bool {
    annotation(node, ty).is_some()
}

/// First annotation of type `ty` attached to `node`, in declaration order.
pub fn annotation<'a>(node: impl Into<Node<'a>>, ty: &AnnotationType) -> Option<&'a Annotation> {
    node.into()
        .annotations()?
        .iter()
        .find(|annotation| annotation.is_of(ty))
}

pub fn is_call(expr: &Expr) -> bool {
    matches!(expr, Expr::Call(_))
}

/// The object a call or property access is applied to.
///
/// For static calls this is a synthesized reference to the owner type.
pub fn call_target(expr: &Expr) -> Option<Cow<'_, Expr>> {
    match expr {
        Expr::Call(call) => match &call.kind {
            CallKind::Instance { receiver } => Some(Cow::Borrowed(&**receiver)),
            CallKind::Static { owner } => Some(Cow::Owned(Expr::Class(ClassExpr {
                ty: owner.clone(),
                span: owner.span,
            }))),
        },
        Expr::Property(property) => Some(Cow::Borrowed(&*property.target)),
        _ => None,
    }
}

/// The placeholder value of the specification DSL: a property access on a class reference
/// to the specification base type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderRef {
    pub specification_type: String,
    pub symbol: String,
}

impl PlaceholderRef {
    pub fn new(specification_type: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            specification_type: specification_type.into(),
            symbol: symbol.into(),
        }
    }

    pub fn matches(&self, expr: &Expr) -> bool {
        is_placeholder_of(expr, &self.specification_type, &self.symbol)
    }
}

impl Default for PlaceholderRef {
    fn default() -> Self {
        Self::new(SPECIFICATION_TYPE, PLACEHOLDER_SYMBOL)
    }
}

/// `Specification._` with the default type and symbol.
pub fn is_placeholder_reference(expr: &Expr) -> bool {
    is_placeholder_of(expr, SPECIFICATION_TYPE, PLACEHOLDER_SYMBOL)
}

fn is_placeholder_of(expr: &Expr, specification_type: &str, symbol: &str) -> bool {
    let Expr::Property(property) = expr else {
        return false;
    };
    let Expr::Class(class) = &*property.target else {
        return false;
    };
    class.ty.name == specification_type && property.property == symbol
}

/// The expression wrapped by an expression statement.
pub fn expression(stmt: &Stmt) -> Option<&Expr> {
    match stmt {
        Stmt::Expr(stmt) => Some(&stmt.expr),
        _ => None,
    }
}

/// The binary expression wrapped by an expression statement.
pub fn binary_expression(stmt: &Stmt) -> Option<&BinaryExpr> {
    match expression(stmt)? {
        Expr::Binary(binary) => Some(binary),
        _ => None,
    }
}

/// Interaction statements (`n * mock.call()`, `mock.call() >> result`,
/// `mock.call() >>> results`) are recognized by their top-level operator alone.
pub fn is_interaction(stmt: &Stmt) -> bool {
    binary_expression(stmt).is_some_and(|binary| {
        matches!(
            binary.op,
            BinaryOp::Multiply | BinaryOp::RightShift | BinaryOp::UnsignedRightShift
        )
    })
}

pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if is_ident_start(first) => chars.all(is_ident_part),
        _ => false,
    }
}

fn is_ident_start(ch: char) -> bool {
    ch == '_' || ch == '$' || unicode_ident::is_xid_start(ch)
}

fn is_ident_part(ch: char) -> bool {
    ch == '$' || ch == '_' || unicode_ident::is_xid_continue(ch)
}

pub fn is_synthetic(method: &MethodNode) -> bool {
    method.synthetic || method.modifiers.contains(Modifiers::SYNTHETIC)
}

pub fn is_this_reference(expr: &Expr) -> bool {
    matches!(expr, Expr::Variable(var) if var.is_this())
}

pub fn is_super_reference(expr: &Expr) -> bool {
    matches!(expr, Expr::Variable(var) if var.is_super())
}

/// Tells whether an assertion supplies its own failure message.
///
/// Only a missing message or a literal `null` count as "no message"; any other expression
/// is treated as explicit, even if it evaluates to `null` at runtime.
pub fn has_explicit_assertion_message(stmt: &AssertStmt) -> bool {
    match &stmt.message {
        None => false,
        Some(Expr::Constant(constant)) => !constant.is_null(),
        Some(_) => true,
    }
}

/// Tells whether the node's source position looks real.
///
/// Does not imply that the position is correct.
pub fn has_plausible_span<'a>(node: impl Into<Node<'a>>) -> bool {
    node.into().span().is_plausible()
}
