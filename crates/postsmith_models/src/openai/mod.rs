//! OpenAI chat-completions client.

mod backend;
mod client;
mod dto;

pub use backend::{OPENAI_API_KEY_VAR, OpenAIBackend};
pub use client::{DEFAULT_MAX_TOKENS, OPENAI_CHAT_COMPLETIONS_URL, OpenAIClient};
pub use dto::{
    ChatChoice, ChatCompletionRequest, ChatCompletionRequestBuilder, ChatCompletionResponse,
    ChatMessage, ChatResponseMessage,
};
