use speck_types::SourceSpan;

use crate::ast::{Annotation, ClassNode, Expr, FieldNode, MethodNode, Stmt};

/// Borrowed view over any kind of tree node.
///
/// Only classes, methods and fields carry annotations.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Class(&'a ClassNode),
    Method(&'a MethodNode),
    Field(&'a FieldNode),
    Stmt(&'a Stmt),
    Expr(&'a Expr),
}

impl<'a> Node<'a> {
    pub fn span(self) -> SourceSpan {
        match self {
            Node::Class(class) => class.span,
            Node::Method(method) => method.span,
            Node::Field(field) => field.span,
            Node::Stmt(stmt) => stmt.span(),
            Node::Expr(expr) => expr.span(),
        }
    }

    /// Annotations attached to the node, in declaration order; `None` if the node kind
    /// cannot carry annotations.
    pub fn annotations(self) -> Option<&'a [Annotation]> {
        match self {
            Node::Class(class) => Some(&class.annotations),
            Node::Method(method) => Some(&method.annotations),
            Node::Field(field) => Some(&field.annotations),
            Node::Stmt(_) | Node::Expr(_) => None,
        }
    }
}

impl<'a> From<&'a ClassNode> for Node<'a> {
    fn from(node: &'a ClassNode) -> Self {
        Node::Class(node)
    }
}

impl<'a> From<&'a MethodNode> for Node<'a> {
    fn from(node: &'a MethodNode) -> Self {
        Node::Method(node)
    }
}

impl<'a> From<&'a FieldNode> for Node<'a> {
    fn from(node: &'a FieldNode) -> Self {
        Node::Field(node)
    }
}

impl<'a> From<&'a Stmt> for Node<'a> {
    fn from(node: &'a Stmt) -> Self {
        Node::Stmt(node)
    }
}

impl<'a> From<&'a Expr> for Node<'a> {
    fn from(node: &'a Expr) -> Self {
        Node::Expr(node)
    }
}
