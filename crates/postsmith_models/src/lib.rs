//! Live text-generation clients for Postsmith.
//!
//! Each provider lives behind its own feature flag. Without any provider
//! feature this crate only exposes [`live_backend`], which then reports that
//! no client is available.
//!
//! # Available Providers
//!
//! - **OpenAI** chat completions - Enable with `openai` feature
//!
//! ```no_run
//! # #[cfg(feature = "openai")]
//! # {
//! use postsmith_core::{GenerateRequest, Message, Role};
//! use postsmith_interface::PostsmithDriver;
//! use postsmith_models::OpenAIClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenAIClient::from_env("gpt-4o-mini")?;
//! let request = GenerateRequest::builder()
//!     .messages(vec![Message::new(Role::User, "Hello")])
//!     .build()?;
//! let response = client.generate(&request).await?;
//! println!("{:?}", response.text());
//! # Ok(())
//! # }
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use postsmith_interface::LiveBackend;

#[cfg(feature = "openai")]
mod openai;

#[cfg(feature = "openai")]
pub use openai::{
    ChatChoice, ChatCompletionRequest, ChatCompletionRequestBuilder, ChatCompletionResponse,
    ChatMessage, ChatResponseMessage, DEFAULT_MAX_TOKENS, OPENAI_API_KEY_VAR,
    OPENAI_CHAT_COMPLETIONS_URL, OpenAIBackend, OpenAIClient,
};

/// The live backend compiled into this build.
///
/// With the `openai` feature this is an [`OpenAIBackend`] posting to
/// `endpoint`; otherwise a backend that always reports the client missing.
#[cfg(feature = "openai")]
pub fn live_backend(endpoint: impl Into<String>) -> Box<dyn LiveBackend> {
    Box::new(OpenAIBackend::new(endpoint))
}

/// The live backend compiled into this build.
#[cfg(not(feature = "openai"))]
pub fn live_backend(_endpoint: impl Into<String>) -> Box<dyn LiveBackend> {
    Box::new(postsmith_interface::NoLiveBackend)
}
