//! Configuration errors.

/// What went wrong while loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConfigErrorKind {
    /// A source could not be read or merged
    #[display("Failed to read configuration: {}", _0)]
    Read(String),

    /// Merged sources did not match the expected shape
    #[display("Failed to parse configuration: {}", _0)]
    Parse(String),

    /// A value parsed but is out of range or unusable
    #[display("{} is invalid: {}", key, reason)]
    Invalid {
        /// Dotted key, e.g. `generation.temperature`
        key: String,
        /// Why the value was refused
        reason: String,
    },
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at {}:{}", kind, file, line)]
pub struct ConfigError {
    /// The specific error kind
    pub kind: ConfigErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new configuration error.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Shorthand for [`ConfigErrorKind::Invalid`].
    ///
    /// ```
    /// use postsmith_error::ConfigError;
    ///
    /// let err = ConfigError::invalid("openai.max_tokens", "must be greater than 0");
    /// assert!(err.to_string().contains("openai.max_tokens is invalid"));
    /// ```
    #[track_caller]
    pub fn invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ConfigErrorKind::Invalid {
            key: key.into(),
            reason: reason.into(),
        })
    }
}
