//! Tree shapes handed to speck by the host front-end.
//!
//! Nodes are plain owned data. The driver owns the tree exclusively and rewrites happen in
//! place through `&mut`, so later stages observe the same nodes after expansion.

use std::borrow::Cow;

use speck_types::SourceSpan;

use crate::modifiers::Modifiers;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    pub name: String,
    pub span: SourceSpan,
}

impl TypeRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            span: SourceSpan::UNKNOWN,
        }
    }
}

/// Stable identifier of an annotation type, compared by qualified name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnnotationType(Cow<'static, str>);

impl AnnotationType {
    pub const fn from_static(qualified_name: &'static str) -> Self {
        AnnotationType(Cow::Borrowed(qualified_name))
    }

    pub fn new(qualified_name: impl Into<String>) -> Self {
        AnnotationType(Cow::Owned(qualified_name.into()))
    }

    pub fn qualified_name(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub type_name: String,
    pub span: SourceSpan,
}

impl Annotation {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            span: SourceSpan::UNKNOWN,
        }
    }

    pub fn is_of(&self, ty: &AnnotationType) -> bool {
        self.type_name == ty.qualified_name()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNode {
    pub name: String,
    pub annotations: Vec<Annotation>,
    pub fields: Vec<FieldNode>,
    pub methods: Vec<MethodNode>,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNode {
    pub name: String,
    pub ty: Option<TypeRef>,
    pub modifiers: Modifiers,
    pub annotations: Vec<Annotation>,
    pub initial_value: Option<Expr>,
    pub span: SourceSpan,
}

impl FieldNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            modifiers: Modifiers::empty(),
            annotations: Vec::new(),
            initial_value: None,
            span: SourceSpan::UNKNOWN,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodNode {
    pub name: String,
    pub modifiers: Modifiers,
    pub annotations: Vec<Annotation>,
    /// `None` for abstract/bodiless methods. Parsers may hand over a single statement
    /// instead of a block.
    pub body: Option<Box<Stmt>>,
    /// Marked synthetic by the front-end (as opposed to the `SYNTHETIC` access flag).
    pub synthetic: bool,
    pub span: SourceSpan,
}

impl MethodNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifiers: Modifiers::empty(),
            annotations: Vec::new(),
            body: None,
            synthetic: false,
            span: SourceSpan::UNKNOWN,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub statements: Vec<Stmt>,
    pub span: SourceSpan,
}

impl Block {
    pub fn empty(span: SourceSpan) -> Self {
        Self {
            statements: Vec::new(),
            span,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Expr(ExprStmt),
    Block(Block),
    Assert(AssertStmt),
}

impl Stmt {
    pub fn span(&self) -> SourceSpan {
        match self {
            Stmt::Expr(stmt) => stmt.span,
            Stmt::Block(block) => block.span,
            Stmt::Assert(stmt) => stmt.span,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprStmt {
    pub expr: Expr,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertStmt {
    pub condition: Expr,
    pub message: Option<Expr>,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Variable(VariableExpr),
    Property(PropertyExpr),
    Class(ClassExpr),
    Constant(ConstantExpr),
    Call(CallExpr),
    Binary(BinaryExpr),
    Closure(ClosureExpr),
}

impl Expr {
    pub fn span(&self) -> SourceSpan {
        match self {
            Expr::Variable(expr) => expr.span,
            Expr::Property(expr) => expr.span,
            Expr::Class(expr) => expr.span,
            Expr::Constant(expr) => expr.span,
            Expr::Call(expr) => expr.span,
            Expr::Binary(expr) => expr.span,
            Expr::Closure(expr) => expr.span,
        }
    }

    fn span_mut(&mut self) -> &mut SourceSpan {
        match self {
            Expr::Variable(expr) => &mut expr.span,
            Expr::Property(expr) => &mut expr.span,
            Expr::Class(expr) => &mut expr.span,
            Expr::Constant(expr) => &mut expr.span,
            Expr::Call(expr) => &mut expr.span,
            Expr::Binary(expr) => &mut expr.span,
            Expr::Closure(expr) => &mut expr.span,
        }
    }

    #[must_use]
    pub fn with_span(mut self, span: SourceSpan) -> Self {
        *self.span_mut() = span;
        self
    }
}

pub const THIS: &str = "this";
pub const SUPER: &str = "super";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableExpr {
    pub name: String,
    /// Explicitly declared type; `None` for dynamically typed (`def`) variables.
    pub declared_type: Option<TypeRef>,
    pub span: SourceSpan,
}

impl VariableExpr {
    pub fn is_this(&self) -> bool {
        self.name == THIS
    }

    pub fn is_super(&self) -> bool {
        self.name == SUPER
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyExpr {
    pub target: Box<Expr>,
    pub property: String,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassExpr {
    pub ty: TypeRef,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstantValue {
    Null,
    Bool(bool),
    Int(i64),
    String(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantExpr {
    pub value: ConstantValue,
    pub span: SourceSpan,
}

impl ConstantExpr {
    pub fn is_null(&self) -> bool {
        matches!(self.value, ConstantValue::Null)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallKind {
    /// `receiver.method(...)`; implicit-receiver calls use a `this` variable.
    Instance { receiver: Box<Expr> },
    /// `Owner.method(...)`
    Static { owner: TypeRef },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallExpr {
    pub kind: CallKind,
    /// `None` when the method name is computed at runtime (`this."$name"()`).
    pub method: Option<String>,
    pub args: Arguments,
    pub span: SourceSpan,
}

/// Argument list of a call.
///
/// The host parser produces either an argument list or a tuple; both hold the same ordered
/// expressions. Calls synthesized without arguments may instead point at the canonical empty
/// list shared across the whole program, which must never be written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arguments {
    ArgumentList(Vec<Expr>),
    Tuple(Vec<Expr>),
    SharedEmpty,
}

impl Arguments {
    pub const EMPTY: Arguments = Arguments::SharedEmpty;

    pub fn as_slice(&self) -> &[Expr] {
        match self {
            Arguments::ArgumentList(exprs) | Arguments::Tuple(exprs) => exprs,
            Arguments::SharedEmpty => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    pub fn is_shared_empty(&self) -> bool {
        matches!(self, Arguments::SharedEmpty)
    }

    /// Mutable access to the underlying list, or `None` for the shared empty list.
    pub fn exprs_mut(&mut self) -> Option<&mut Vec<Expr>> {
        match self {
            Arguments::ArgumentList(exprs) | Arguments::Tuple(exprs) => Some(exprs),
            Arguments::SharedEmpty => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Assign,
    Plus,
    Minus,
    Multiply,
    Divide,
    Remainder,
    LeftShift,
    RightShift,
    UnsignedRightShift,
    Equal,
    NotEqual,
    Less,
    Greater,
    LogicalAnd,
    LogicalOr,
}

impl BinaryOp {
    pub fn token(self) -> &'static str {
        match self {
            BinaryOp::Assign => "=",
            BinaryOp::Plus => "+",
            BinaryOp::Minus => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Remainder => "%",
            BinaryOp::LeftShift => "<<",
            BinaryOp::RightShift => ">>",
            BinaryOp::UnsignedRightShift => ">>>",
            BinaryOp::Equal => "==",
            BinaryOp::NotEqual => "!=",
            BinaryOp::Less => "<",
            BinaryOp::Greater => ">",
            BinaryOp::LogicalAnd => "&&",
            BinaryOp::LogicalOr => "||",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    /// `T x = ...` / `def x = ...` inside a method body.
    Local,
    /// The initializer of a field, represented as `field = value`.
    FieldInitializer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryExpr {
    pub lhs: Box<Expr>,
    pub op: BinaryOp,
    pub rhs: Box<Expr>,
    /// Set when this binary expression is a declaration rather than a plain operation.
    pub declaration: Option<DeclarationKind>,
    pub span: SourceSpan,
}

impl BinaryExpr {
    pub fn is_declaration(&self) -> bool {
        self.declaration.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosureExpr {
    /// `None` when the front-end recorded no block for the closure.
    pub body: Option<Block>,
    pub span: SourceSpan,
}
