//! Wire types for the chat-completions endpoint.

use serde::{Deserialize, Serialize};

/// One message in a chat-completions request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ChatMessage {
    role: String,
    content: String,
}

impl ChatMessage {
    /// Create a message with a wire role (`system`, `user`, `assistant`).
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }
}

/// Body posted to the chat-completions endpoint.
#[derive(
    Debug, Clone, PartialEq, Serialize, derive_builder::Builder, derive_getters::Getters,
)]
#[builder(setter(into))]
pub struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    max_tokens: Option<u32>,
}

impl ChatCompletionRequest {
    /// Creates a new request builder.
    pub fn builder() -> ChatCompletionRequestBuilder {
        ChatCompletionRequestBuilder::default()
    }
}

/// Message inside a returned choice.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, derive_getters::Getters)]
pub struct ChatResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// One returned choice.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, derive_getters::Getters)]
pub struct ChatChoice {
    message: ChatResponseMessage,
}

/// Body returned by the chat-completions endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, derive_getters::Getters)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    id: String,
    #[serde(default)]
    choices: Vec<ChatChoice>,
}
