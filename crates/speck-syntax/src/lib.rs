//! Syntax tree consumed by the speck sugar passes.
//!
//! The front-end parser (not part of this workspace) builds these nodes; speck only
//! inspects them and, for a narrow set of calls and bodies, rewrites them in place.

pub mod ast;
pub mod make;
mod modifiers;
mod node;

pub use ast::*;
pub use modifiers::Modifiers;
pub use node::Node;
pub use speck_types::SourceSpan;
