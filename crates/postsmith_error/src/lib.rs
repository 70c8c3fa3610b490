//! Error types for Postsmith.
//!
//! This crate provides the error types used throughout the Postsmith workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use postsmith_error::{BackendError, BackendErrorKind, PostsmithResult};
//!
//! fn fetch_data() -> PostsmithResult<String> {
//!     Err(BackendError::new(BackendErrorKind::EmptyReply))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod builder;
mod config;
mod error;
mod export;
mod models;
mod template;

pub use backend::{BackendError, BackendErrorKind};
pub use builder::BuilderError;
pub use config::{ConfigError, ConfigErrorKind};
pub use error::{PostsmithError, PostsmithErrorKind, PostsmithResult};
pub use export::{ExportError, ExportErrorKind};
pub use models::{ModelsError, ModelsErrorKind, ModelsResult, OpenAIErrorKind};
pub use template::{TemplateError, TemplateErrorKind};
