//! Request and response types.

use crate::{Message, ModelChoice, Platform, Tone};
use serde::{Deserialize, Serialize};

/// Fewest posts a request may ask for.
pub const MIN_POST_COUNT: usize = 1;
/// Most posts a request may ask for.
pub const MAX_POST_COUNT: usize = 5;

/// Parameters for one Generate action.
///
/// Built through [`GenerationRequestBuilder`], which rejects blank topics,
/// counts outside `1..=5`, and temperatures outside `[0.0, 1.0]`.
///
/// # Examples
///
/// ```
/// use postsmith_core::{GenerationRequest, ModelChoice, Platform};
///
/// let request = GenerationRequest::builder()
///     .topic("sustainable fashion")
///     .platform(Platform::LinkedIn)
///     .count(2)
///     .model_choice(ModelChoice::Offline)
///     .build()
///     .unwrap();
///
/// assert_eq!(*request.count(), 2);
/// assert!(*request.strict_mode());
///
/// assert!(GenerationRequest::builder().topic("x").count(9).build().is_err());
/// ```
#[derive(
    Debug, Clone, PartialEq, Serialize, derive_builder::Builder, derive_getters::Getters,
)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct GenerationRequest {
    /// Topic, product, or theme to write about
    #[builder(setter(into))]
    topic: String,
    /// Target platform
    #[builder(default)]
    platform: Platform,
    /// Caption voice
    #[builder(default)]
    tone: Tone,
    /// Number of posts requested
    #[builder(default = "3")]
    count: usize,
    /// Backend selection
    #[builder(default)]
    model_choice: ModelChoice,
    /// Use the strict JSON-only prompt instead of the relaxed one
    #[builder(default = "true")]
    strict_mode: bool,
    /// Sampling temperature passed to the live generator
    #[builder(default = "0.8")]
    temperature: f32,
}

impl GenerationRequest {
    /// Creates a new request builder.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }
}

impl GenerationRequestBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.topic.as_ref().is_some_and(|t| t.trim().is_empty()) {
            return Err("topic must not be empty".to_string());
        }
        if let Some(count) = self.count {
            if !(MIN_POST_COUNT..=MAX_POST_COUNT).contains(&count) {
                return Err(format!(
                    "count must be in {}..={}, got {}",
                    MIN_POST_COUNT, MAX_POST_COUNT, count
                ));
            }
        }
        if let Some(temperature) = self.temperature {
            if !(0.0..=1.0).contains(&temperature) {
                return Err(format!(
                    "temperature must be in [0.0, 1.0], got {}",
                    temperature
                ));
            }
        }
        Ok(())
    }
}

/// A single call to the live text generator.
///
/// # Examples
///
/// ```
/// use postsmith_core::{GenerateRequest, Message, Role};
///
/// let request = GenerateRequest::builder()
///     .messages(vec![
///         Message::new(Role::System, "You are a helpful assistant."),
///         Message::new(Role::User, "Hello!"),
///     ])
///     .max_tokens(800)
///     .temperature(0.8)
///     .model("gpt-4o-mini")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.messages().len(), 2);
/// assert_eq!(*request.max_tokens(), Some(800));
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Default,
    Serialize,
    Deserialize,
    derive_builder::Builder,
    derive_getters::Getters,
)]
pub struct GenerateRequest {
    /// The messages to send, system instruction first
    messages: Vec<Message>,
    /// Maximum number of tokens to generate
    #[builder(default, setter(strip_option))]
    max_tokens: Option<u32>,
    /// Sampling temperature (0.0 to 1.0)
    #[builder(default, setter(strip_option))]
    temperature: Option<f32>,
    /// Model identifier to use
    #[builder(default, setter(into, strip_option))]
    model: Option<String>,
}

impl GenerateRequest {
    /// Creates a new request builder.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// Free text returned by the live generator.
///
/// # Examples
///
/// ```
/// use postsmith_core::GenerateResponse;
///
/// let response = GenerateResponse::new(vec!["[]".to_string()]);
/// assert_eq!(response.text(), Some("[]"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Text of each returned choice, in order
    pub choices: Vec<String>,
}

impl GenerateResponse {
    /// Wrap the returned choices.
    pub fn new(choices: Vec<String>) -> Self {
        Self { choices }
    }

    /// Text of the first choice, the only one the pipeline reads.
    pub fn text(&self) -> Option<&str> {
        self.choices.first().map(String::as_str)
    }
}
