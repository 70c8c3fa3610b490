//! Mock live backend for testing.

use async_trait::async_trait;
use postsmith_core::{GenerateRequest, GenerateResponse};
use postsmith_error::{
    BackendError, BackendErrorKind, ModelsError, OpenAIErrorKind, PostsmithError,
    PostsmithResult,
};
use postsmith_interface::{Availability, LiveBackend, PostsmithDriver};
use std::sync::{Arc, Mutex};

/// What the mock driver does when called.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Return the given text
    Success(String),
    /// Fail with the given OpenAI error
    Error(OpenAIErrorKind),
    /// Fail to construct a driver at all
    DriverUnavailable,
}

/// Mock backend with a fixed availability and driver behavior.
///
/// Drivers it hands out share its call counter and request log.
pub struct MockBackend {
    availability: Availability,
    behavior: MockBehavior,
    calls: Arc<Mutex<Vec<GenerateRequest>>>,
}

impl MockBackend {
    /// Available backend whose driver answers with `text`.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self::new(Availability::Available, MockBehavior::Success(text.into()))
    }

    /// Available backend whose driver fails with `error`.
    pub fn new_error(error: OpenAIErrorKind) -> Self {
        Self::new(Availability::Available, MockBehavior::Error(error))
    }

    /// Backend reporting `availability`; its driver would succeed.
    pub fn new_unavailable(availability: Availability) -> Self {
        Self::new(availability, MockBehavior::Success("[]".to_string()))
    }

    /// Backend with explicit availability and behavior.
    pub fn new(availability: Availability, behavior: MockBehavior) -> Self {
        Self {
            availability,
            behavior,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Shared handle to the request log, usable after the backend is boxed.
    pub fn calls(&self) -> Arc<Mutex<Vec<GenerateRequest>>> {
        Arc::clone(&self.calls)
    }
}

impl LiveBackend for MockBackend {
    fn live_generation_available(&self) -> Availability {
        self.availability
    }

    fn driver(&self, model: &str) -> PostsmithResult<Box<dyn PostsmithDriver>> {
        if matches!(self.behavior, MockBehavior::DriverUnavailable) {
            return Err(BackendError::new(BackendErrorKind::NoClient(model.to_string())).into());
        }
        Ok(Box::new(MockDriver {
            behavior: self.behavior.clone(),
            calls: Arc::clone(&self.calls),
            model: model.to_string(),
        }))
    }
}

struct MockDriver {
    behavior: MockBehavior,
    calls: Arc<Mutex<Vec<GenerateRequest>>>,
    model: String,
}

#[async_trait]
impl PostsmithDriver for MockDriver {
    async fn generate(&self, req: &GenerateRequest) -> PostsmithResult<GenerateResponse> {
        self.calls.lock().unwrap().push(req.clone());
        match &self.behavior {
            MockBehavior::Success(text) => Ok(GenerateResponse::new(vec![text.clone()])),
            MockBehavior::Error(kind) => Err(PostsmithError::from(ModelsError::new(
                kind.clone().into(),
            ))),
            MockBehavior::DriverUnavailable => unreachable!("driver never built"),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
