//! Shared types used across speck crates.
//!
//! Kept intentionally small: source positions and the diagnostic shape reported back
//! to the driver.

use std::fmt;

/// A 1-based source region: `(start_line, start_column)` to `(end_line, end_column)`.
///
/// Parsers record unknown positions as `-1` (or leave them at `0`), so fields are signed
/// and a span is not trustworthy until [`SourceSpan::is_plausible`] says so.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SourceSpan {
    pub start_line: i32,
    pub start_column: i32,
    pub end_line: i32,
    pub end_column: i32,
}

impl SourceSpan {
    pub const UNKNOWN: SourceSpan = SourceSpan {
        start_line: -1,
        start_column: -1,
        end_line: -1,
        end_column: -1,
    };

    pub const fn new(start_line: i32, start_column: i32, end_line: i32, end_column: i32) -> Self {
        Self {
            start_line,
            start_column,
            end_line,
            end_column,
        }
    }

    /// Tells whether this span looks like a real source position.
    ///
    /// Does not imply that the position is correct.
    pub fn is_plausible(&self) -> bool {
        self.start_line > 0
            && self.end_line >= self.start_line
            && self.start_column > 0
            && self.end_column > self.start_column
    }
}

impl fmt::Debug for SourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SourceSpan({}:{}..{}:{})",
            self.start_line, self.start_column, self.end_line, self.end_column
        )
    }
}

impl fmt::Display for SourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start_line, self.start_column)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: &'static str,
    pub message: String,
    pub span: Option<SourceSpan>,
}

impl Diagnostic {
    pub fn error(code: &'static str, message: impl Into<String>, span: Option<SourceSpan>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
            span,
        }
    }
}
