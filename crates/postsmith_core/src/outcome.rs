//! What the generation pipeline hands back to its caller.

use crate::PostRecord;
use serde::Serialize;

/// Why the live generator was not consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
pub enum OfflineReason {
    /// The caller picked the offline sentinel
    #[display("Offline mode selected (no API calls)")]
    OfflineSelected,
    /// No live client is compiled into this build
    #[display("Live client not available in this build")]
    ClientUnavailable,
    /// No API credential in the environment
    #[display("OPENAI_API_KEY not set in environment")]
    MissingCredential,
}

/// Which path produced a generation result.
///
/// ```
/// use postsmith_core::{GenerationStatus, OfflineReason};
///
/// assert!(GenerationStatus::Offline(OfflineReason::OfflineSelected).used_fallback());
/// assert!(!GenerationStatus::Live.used_fallback());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum GenerationStatus {
    /// Deterministic library used without attempting a live call
    #[display("Using offline fallback (deterministic demo): {}", _0)]
    Offline(OfflineReason),
    /// Live call succeeded and its output parsed
    #[display("Done, results ready.")]
    Live,
    /// Live call failed; deterministic library used instead
    #[display("Error: {}. Using offline fallback.", error)]
    LiveFailed {
        /// Description of the underlying failure
        error: String,
    },
    /// Live output could not be parsed; posts were split heuristically
    #[display(
        "Model output could not be parsed as strict JSON; showing raw output and using heuristic fallback."
    )]
    Unparseable,
}

impl GenerationStatus {
    /// Whether the deterministic library supplied the posts.
    pub fn used_fallback(&self) -> bool {
        matches!(
            self,
            GenerationStatus::Offline(_) | GenerationStatus::LiveFailed { .. }
        )
    }

    /// Whether the status should be presented as a problem.
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            GenerationStatus::LiveFailed { .. } | GenerationStatus::Unparseable
        )
    }
}

/// Posts produced for one request, plus how they were produced.
#[derive(Debug, Clone, PartialEq, Serialize, derive_getters::Getters)]
pub struct GenerationOutcome {
    posts: Vec<PostRecord>,
    status: GenerationStatus,
    raw_output: Option<String>,
}

impl GenerationOutcome {
    /// Posts from the deterministic library or a parsed live response.
    pub fn new(posts: Vec<PostRecord>, status: GenerationStatus) -> Self {
        Self {
            posts,
            status,
            raw_output: None,
        }
    }

    /// Posts recovered heuristically, keeping the raw text for inspection.
    pub fn heuristic(posts: Vec<PostRecord>, raw_output: impl Into<String>) -> Self {
        Self {
            posts,
            status: GenerationStatus::Unparseable,
            raw_output: Some(raw_output.into()),
        }
    }

    /// Consume the outcome, returning the posts.
    pub fn into_posts(self) -> Vec<PostRecord> {
        self.posts
    }
}
