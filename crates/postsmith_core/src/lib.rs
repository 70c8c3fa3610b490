//! Core data types for Postsmith.
//!
//! This crate provides the data model shared by the generation pipeline, the
//! live model clients, and the command-line front end.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod choice;
mod message;
mod outcome;
mod post;
mod request;
mod role;

pub use choice::{ModelChoice, Platform, Tone};
pub use message::Message;
pub use outcome::{GenerationOutcome, GenerationStatus, OfflineReason};
pub use post::PostRecord;
pub use request::{
    GenerateRequest, GenerateRequestBuilder, GenerateResponse, GenerationRequest,
    GenerationRequestBuilder, GenerationRequestBuilderError, MAX_POST_COUNT, MIN_POST_COUNT,
};
pub use role::Role;
