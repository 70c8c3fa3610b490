//! Request builder errors.

/// A request builder rejected its inputs.
///
/// Wraps the message of a `derive_builder` build failure, whether a required
/// field was never set or validation refused a value.
///
/// ```
/// use postsmith_error::BuilderError;
///
/// let err = BuilderError::from("count must be in 1..=5, got 9".to_string());
/// assert_eq!(err.reason, "count must be in 1..=5, got 9");
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Invalid request: {} at {}:{}", reason, file, line)]
pub struct BuilderError {
    /// What the builder refused
    pub reason: String,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl From<String> for BuilderError {
    #[track_caller]
    fn from(reason: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            reason,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
