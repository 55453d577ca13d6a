use speck_types::{Diagnostic, SourceSpan};

/// Diagnostic code of user-facing [`SugarError::Syntax`] errors.
pub const SYNTAX_ERROR_CODE: &str = "speck.syntax";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SugarError {
    /// The user wrote something speck cannot desugar. Reported back to the user.
    #[error("{message} (at {span})")]
    Syntax { message: String, span: SourceSpan },
    /// A precondition of the sugar passes was violated by the caller. Not a user error;
    /// processing of the compilation unit should stop.
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl SugarError {
    pub(crate) fn syntax(message: impl Into<String>, span: SourceSpan) -> Self {
        SugarError::Syntax {
            message: message.into(),
            span,
        }
    }

    pub(crate) fn internal(message: impl Into<String>) -> Self {
        SugarError::Internal {
            message: message.into(),
        }
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, SugarError::Internal { .. })
    }

    /// User-facing diagnostic for this error, or `None` for internal errors.
    ///
    /// The span is only attached when it is plausible.
    pub fn to_diagnostic(&self) -> Option<Diagnostic> {
        match self {
            SugarError::Syntax { message, span } => Some(Diagnostic::error(
                SYNTAX_ERROR_CODE,
                message.clone(),
                span.is_plausible().then_some(*span),
            )),
            SugarError::Internal { .. } => None,
        }
    }
}
