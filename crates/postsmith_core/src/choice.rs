//! Enumerated request parameters.

use serde::{Deserialize, Serialize};

/// Target social platform.
///
/// Parsing is case-insensitive and accepts `twitter` or `x` for Twitter/X.
///
/// ```
/// use postsmith_core::Platform;
///
/// assert_eq!("x".parse::<Platform>().unwrap(), Platform::TwitterX);
/// assert_eq!(Platform::TwitterX.to_string(), "Twitter/X");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Platform {
    /// Instagram
    #[default]
    Instagram,
    /// Twitter/X
    #[serde(rename = "Twitter/X")]
    #[strum(to_string = "Twitter/X", serialize = "twitter", serialize = "x")]
    TwitterX,
    /// LinkedIn
    LinkedIn,
    /// Facebook
    Facebook,
    /// TikTok
    TikTok,
}

/// Voice the captions should be written in.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Tone {
    /// Friendly
    #[default]
    Friendly,
    /// Professional
    Professional,
    /// Witty
    Witty,
    /// Inspirational
    Inspirational,
    /// Informative
    Informative,
}

/// Backend selection, including the `offline` sentinel.
///
/// ```
/// use postsmith_core::ModelChoice;
///
/// let choice: ModelChoice = "offline".parse().unwrap();
/// assert!(choice.is_offline());
/// assert_eq!(choice.model_id(), None);
/// assert_eq!(ModelChoice::default().model_id(), Some("gpt-3.5-turbo"));
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum ModelChoice {
    /// gpt-3.5-turbo
    #[default]
    #[serde(rename = "gpt-3.5-turbo")]
    #[strum(to_string = "gpt-3.5-turbo")]
    Gpt35Turbo,
    /// gpt-4o-mini
    #[serde(rename = "gpt-4o-mini")]
    #[strum(to_string = "gpt-4o-mini")]
    Gpt4oMini,
    /// gpt-4
    #[serde(rename = "gpt-4")]
    #[strum(to_string = "gpt-4")]
    Gpt4,
    /// No live calls; always use the deterministic library
    #[serde(rename = "offline")]
    #[strum(to_string = "offline")]
    Offline,
}

impl ModelChoice {
    /// Whether this is the offline sentinel.
    pub fn is_offline(&self) -> bool {
        matches!(self, ModelChoice::Offline)
    }

    /// Model identifier sent to the live service, `None` for offline.
    pub fn model_id(&self) -> Option<&'static str> {
        match self {
            ModelChoice::Gpt35Turbo => Some("gpt-3.5-turbo"),
            ModelChoice::Gpt4oMini => Some("gpt-4o-mini"),
            ModelChoice::Gpt4 => Some("gpt-4"),
            ModelChoice::Offline => None,
        }
    }
}
