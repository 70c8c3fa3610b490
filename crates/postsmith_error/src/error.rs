//! Top-level error wrapper types.

use crate::{
    BackendError, BuilderError, ConfigError, ExportError, ModelsError, TemplateError,
};

/// Every error condition the workspace can raise.
///
/// # Examples
///
/// ```
/// use postsmith_error::{BackendError, BackendErrorKind, PostsmithError};
///
/// let backend_err = BackendError::new(BackendErrorKind::EmptyReply);
/// let err: PostsmithError = backend_err.into();
/// assert!(format!("{}", err).contains("Backend Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum PostsmithErrorKind {
    /// Live backend unavailable or misconfigured
    #[from(BackendError)]
    Backend(BackendError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// Prompt template error
    #[from(TemplateError)]
    Template(TemplateError),
    /// Export error
    #[from(ExportError)]
    Export(ExportError),
    /// Model provider error
    #[from(ModelsError)]
    Models(ModelsError),
}

/// Postsmith error with kind discrimination.
///
/// # Examples
///
/// ```
/// use postsmith_error::{PostsmithResult, ConfigError};
///
/// fn might_fail() -> PostsmithResult<()> {
///     Err(ConfigError::invalid("generation.count", "must be between 1 and 5"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Postsmith Error: {}", _0)]
pub struct PostsmithError(Box<PostsmithErrorKind>);

impl PostsmithError {
    /// Create a new error from a kind.
    pub fn new(kind: PostsmithErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PostsmithErrorKind {
        &self.0
    }

    /// The innermost failure, without wrapper prefixes or source location.
    ///
    /// ```
    /// use postsmith_error::{ModelsError, OpenAIErrorKind, PostsmithError};
    ///
    /// let err = PostsmithError::from(ModelsError::new(OpenAIErrorKind::MissingApiKey.into()));
    /// assert_eq!(err.summary(), "OPENAI_API_KEY environment variable not set");
    /// ```
    pub fn summary(&self) -> String {
        match self.kind() {
            PostsmithErrorKind::Backend(e) => e.kind.to_string(),
            PostsmithErrorKind::Config(e) => e.kind.to_string(),
            PostsmithErrorKind::Builder(e) => e.reason.clone(),
            PostsmithErrorKind::Template(e) => e.kind.to_string(),
            PostsmithErrorKind::Export(e) => e.kind.to_string(),
            PostsmithErrorKind::Models(e) => e.kind.summary(),
        }
    }
}

// Generic From implementation for any type that converts to PostsmithErrorKind
impl<T> From<T> for PostsmithError
where
    T: Into<PostsmithErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Postsmith operations.
pub type PostsmithResult<T> = std::result::Result<T, PostsmithError>;
