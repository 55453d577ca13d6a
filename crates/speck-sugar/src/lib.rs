//! Desugaring helpers for the speck specification DSL.
//!
//! The passes here recognize DSL shapes in a syntax tree handed over by the front-end
//! (interaction statements, the placeholder `_`, builtin helpers such as `Mock()`) and
//! rewrite builtin helper calls into their canonical, fully explicit form:
//!
//! ```text
//! List list = Mock()      =>  List list = Mock(List, "list")
//! def list = Mock(List)   =>  def list = Mock(List, "list")
//! Mock(List)              =>  Mock(List, "(unnamed)")
//! ```
//!
//! Everything is synchronous and operates on a tree the caller owns exclusively.

mod args;
mod body;
mod builtin;
mod classify;
mod error;
mod expand;
mod infer;
mod visibility;

pub use args::{argument_count, arguments};
pub use body::{closure_statements, closure_statements_mut, statements};
pub use builtin::{
    is_builtin_member_call, is_builtin_member_decl, is_builtin_member_decl_or_call,
    BuiltinMember, BuiltinMembers,
};
pub use classify::{
    annotation, binary_expression, call_target, expression, has_annotation,
    has_explicit_assertion_message, has_plausible_span, is_call, is_identifier, is_interaction,
    is_placeholder_reference, is_super_reference, is_synthetic, is_this_reference,
    PlaceholderRef, PLACEHOLDER_SYMBOL, SPECIFICATION_TYPE,
};
pub use error::{SugarError, SYNTAX_ERROR_CODE};
pub use expand::{
    expand, expand_builtin_member_call, expand_builtin_member_decl,
    expand_builtin_member_decl_or_call, expand_call,
};
pub use infer::{
    declared_name, declared_type, infer_call, infer_decl, resolve_type, Inferred, UNKNOWN_NAME,
    UNNAMED,
};
pub use visibility::{set_visibility, visibility, HasModifiers, Visibility};
