//! Generation pipeline for Postsmith.
//!
//! Turns a [`GenerationRequest`](postsmith_core::GenerationRequest) into post
//! drafts. The [`GenerationPipeline`] picks exactly one strategy per request:
//!
//! - **Offline**: the deterministic library in [`fallback_generate`]
//! - **Live**: a [`PostsmithDriver`](postsmith_interface::PostsmithDriver)
//!   call whose free text is coerced by [`normalize`], or split by
//!   [`heuristic_posts`] when it will not parse
//!
//! Failures on the live path never escape the pipeline; they degrade to the
//! offline library and are reported through
//! [`GenerationStatus`](postsmith_core::GenerationStatus).
//!
//! # Example
//!
//! ```
//! use postsmith_core::{GenerationRequest, GenerationStatus, ModelChoice};
//! use postsmith_generation::GenerationPipeline;
//! use postsmith_interface::NoLiveBackend;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let pipeline = GenerationPipeline::new(Box::new(NoLiveBackend));
//! let request = GenerationRequest::builder()
//!     .topic("product launch")
//!     .model_choice(ModelChoice::Offline)
//!     .build()
//!     .unwrap();
//!
//! let outcome = pipeline.generate(&request).await;
//! assert!(outcome.status().used_fallback());
//! assert_eq!(outcome.posts().len(), 1);
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod export;
mod fallback;
mod heuristic;
mod normalize;
mod pipeline;
mod prompt;

pub use export::{ExportFormat, export_file_name, to_csv, to_json, write_export};
pub use fallback::{fallback_generate, known_topics};
pub use heuristic::{IDEA_MAX_CHARS, heuristic_posts};
pub use normalize::{normalize, parse_structured, post_from_value};
pub use pipeline::{DEFAULT_SYSTEM_INSTRUCTION, GenerationPipeline};
pub use prompt::{PromptSet, PromptTemplate, PromptVars, RELAXED_TEMPLATE, STRICT_TEMPLATE};
