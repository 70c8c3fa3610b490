//! Model provider errors.

/// OpenAI-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum OpenAIErrorKind {
    /// API key not found in environment
    #[display("OPENAI_API_KEY environment variable not set")]
    MissingApiKey,

    /// Request could not be sent or the connection dropped
    #[display("Request failed: {}", _0)]
    Http(String),

    /// API answered with a non-success status
    #[display("API error {}: {}", status, message)]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// Response body could not be decoded
    #[display("Failed to parse response: {}", _0)]
    Parse(String),

    /// Response decoded but carried no text choice
    #[display("Response contained no choices")]
    EmptyResponse,
}

impl OpenAIErrorKind {
    /// Whether the server rejected the credential.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, OpenAIErrorKind::ApiError { status: 401 | 403, .. })
    }

    /// Whether the server reported quota or rate exhaustion.
    pub fn is_quota_exhausted(&self) -> bool {
        matches!(self, OpenAIErrorKind::ApiError { status: 429, .. })
    }

    /// Short description for end users.
    ///
    /// Credential and quota rejections get fixed wording; the response body
    /// of other API errors is kept.
    pub fn summary(&self) -> String {
        match self {
            OpenAIErrorKind::ApiError { status, .. } if self.is_auth_failure() => {
                format!("OpenAI rejected the API key (HTTP {})", status)
            }
            OpenAIErrorKind::ApiError { status, .. } if self.is_quota_exhausted() => {
                format!("OpenAI rate limit or quota exhausted (HTTP {})", status)
            }
            other => other.to_string(),
        }
    }
}

/// Model provider-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display, derive_more::From)]
pub enum ModelsErrorKind {
    /// OpenAI-specific error
    #[display("OpenAI: {}", _0)]
    OpenAI(OpenAIErrorKind),

    /// Builder error (derive_builder failures)
    #[display("Builder error: {}", _0)]
    #[from(ignore)]
    Builder(String),
}

impl ModelsErrorKind {
    /// Short description for end users.
    pub fn summary(&self) -> String {
        match self {
            ModelsErrorKind::OpenAI(kind) => kind.summary(),
            ModelsErrorKind::Builder(message) => message.clone(),
        }
    }
}

/// Model provider error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Models Error: {} at {}:{}", kind, file, line)]
pub struct ModelsError {
    /// The specific error kind
    pub kind: ModelsErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ModelsError {
    /// Create a new models error.
    #[track_caller]
    pub fn new(kind: ModelsErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for model operations.
pub type ModelsResult<T> = Result<T, ModelsError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(status: u16) -> OpenAIErrorKind {
        OpenAIErrorKind::ApiError {
            status,
            message: r#"{"error": {"message": "details"}}"#.to_string(),
        }
    }

    #[test]
    fn auth_and_quota_failures_get_fixed_wording() {
        assert_eq!(
            api_error(401).summary(),
            "OpenAI rejected the API key (HTTP 401)"
        );
        assert_eq!(
            api_error(403).summary(),
            "OpenAI rejected the API key (HTTP 403)"
        );
        assert_eq!(
            api_error(429).summary(),
            "OpenAI rate limit or quota exhausted (HTTP 429)"
        );
    }

    #[test]
    fn other_failures_keep_their_text() {
        assert!(api_error(500).summary().contains("details"));
        assert_eq!(
            ModelsErrorKind::from(OpenAIErrorKind::EmptyResponse).summary(),
            "Response contained no choices"
        );
    }
}
