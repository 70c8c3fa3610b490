//! Live backend errors.

/// Why a live backend could not produce text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum BackendErrorKind {
    /// No client compiled into this build for the model
    #[display("No live client compiled in; cannot drive model {}", _0)]
    NoClient(String),

    /// Driver answered without any text choice
    #[display("Live generator returned no text")]
    EmptyReply,
}

/// Backend error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Backend Error: {} at {}:{}", kind, file, line)]
pub struct BackendError {
    /// The specific error kind
    pub kind: BackendErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl BackendError {
    /// Create a new backend error.
    ///
    /// ```
    /// use postsmith_error::{BackendError, BackendErrorKind};
    ///
    /// let err = BackendError::new(BackendErrorKind::NoClient("gpt-4".to_string()));
    /// assert!(err.to_string().contains("cannot drive model gpt-4"));
    /// ```
    #[track_caller]
    pub fn new(kind: BackendErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
