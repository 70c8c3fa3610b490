//! Export errors.

/// Export-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ExportErrorKind {
    /// CSV writer failed
    #[display("CSV export failed: {}", _0)]
    Csv(String),

    /// JSON serialization failed
    #[display("JSON export failed: {}", _0)]
    Json(String),

    /// Writing the export file failed
    #[display("Failed to write {}: {}", path, message)]
    Io {
        /// Destination path
        path: String,
        /// Underlying I/O message
        message: String,
    },
}

/// Export error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Export Error: {} at {}:{}", kind, file, line)]
pub struct ExportError {
    /// The specific error kind
    pub kind: ExportErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ExportError {
    /// Create a new export error.
    #[track_caller]
    pub fn new(kind: ExportErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
