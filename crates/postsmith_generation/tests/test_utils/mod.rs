//! Test utilities for pipeline tests.
//!
//! Provides a mock live backend whose drivers record every request.

pub mod mock_backend;

#[allow(unused_imports)]
pub use mock_backend::{MockBackend, MockBehavior};

use postsmith_core::{GenerationRequest, ModelChoice};

/// Build a live-model request for tests.
#[allow(dead_code)]
pub fn live_request(topic: &str, count: usize, strict: bool) -> GenerationRequest {
    GenerationRequest::builder()
        .topic(topic)
        .count(count)
        .model_choice(ModelChoice::Gpt4oMini)
        .strict_mode(strict)
        .temperature(0.3)
        .build()
        .expect("Failed to build test request")
}
