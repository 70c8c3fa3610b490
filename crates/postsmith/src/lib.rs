//! Postsmith - social-media post drafts from a topic
//!
//! Postsmith turns a topic, platform, and tone into a short list of post
//! drafts, each with an idea line, a caption, and hashtags. Drafts come from a
//! live OpenAI model when one is configured and from a deterministic offline
//! library otherwise.
//!
//! # Quick Start
//!
//! ```no_run
//! use postsmith::{GenerationRequest, PostsmithConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PostsmithConfig::load()?;
//! let pipeline = config.pipeline();
//!
//! let request = config.request_builder().topic("product launch").build()?;
//! let outcome = pipeline.generate(&request).await;
//! println!("{}", outcome.status());
//! for post in outcome.posts() {
//!     println!("{}: {}", post.idea, post.caption);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Cargo Features
//!
//! - `openai` (default) - live OpenAI chat-completions client
//!
//! # Architecture
//!
//! - `postsmith_core` - data model (PostRecord, GenerationRequest, ...)
//! - `postsmith_interface` - PostsmithDriver and LiveBackend traits
//! - `postsmith_error` - error types
//! - `postsmith_models` - live clients
//! - `postsmith_generation` - pipeline, normalizer, offline library, export
//!
//! This crate re-exports everything for convenience and adds configuration.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
pub mod telemetry;

pub use config::{GenerationConfig, OpenAIConfig, PostsmithConfig, PromptConfig};

pub use postsmith_core::*;
pub use postsmith_error::*;
pub use postsmith_generation::*;
pub use postsmith_interface::*;
pub use postsmith_models::*;
