//! The post record produced by every generation path.

use serde::{Deserialize, Serialize};

/// One social-media post draft.
///
/// Every field has a default so a record deserialized from partial model
/// output is still fully formed.
///
/// # Examples
///
/// ```
/// use postsmith_core::PostRecord;
///
/// let post: PostRecord = serde_json::from_str(r#"{"idea": "Behind the scenes"}"#).unwrap();
/// assert_eq!(post.idea, "Behind the scenes");
/// assert!(post.caption.is_empty());
/// assert!(post.hashtags.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostRecord {
    /// Short single-line summary of the post concept
    #[serde(default)]
    pub idea: String,
    /// Caption text, may span several lines
    #[serde(default)]
    pub caption: String,
    /// Hashtags, conventionally `#`-prefixed
    #[serde(default)]
    pub hashtags: Vec<String>,
}

impl PostRecord {
    /// Create a post record.
    pub fn new(
        idea: impl Into<String>,
        caption: impl Into<String>,
        hashtags: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            idea: idea.into(),
            caption: caption.into(),
            hashtags: hashtags.into_iter().map(Into::into).collect(),
        }
    }

    /// Hashtags joined by single spaces, the form used in CSV exports.
    ///
    /// ```
    /// use postsmith_core::PostRecord;
    ///
    /// let post = PostRecord::new("idea", "caption", ["#a", "#b"]);
    /// assert_eq!(post.hashtag_line(), "#a #b");
    /// ```
    pub fn hashtag_line(&self) -> String {
        self.hashtags.join(" ")
    }
}
