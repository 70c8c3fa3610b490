//! Prompt template errors.

/// Ways a prompt template can fail to render.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum TemplateErrorKind {
    /// Placeholder name is not one the renderer knows how to fill
    #[display("Unknown placeholder '{{{}}}'", _0)]
    UnknownPlaceholder(String),

    /// An opening brace without a matching closing brace
    #[display("Unterminated placeholder starting at byte {}", _0)]
    Unterminated(usize),

    /// A closing brace without a matching opening brace
    #[display("Stray closing brace at byte {}", _0)]
    StrayClose(usize),
}

/// Template error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Template Error: {} at {}:{}", kind, file, line)]
pub struct TemplateError {
    /// The specific error kind
    pub kind: TemplateErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl TemplateError {
    /// Create a new template error.
    #[track_caller]
    pub fn new(kind: TemplateErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
