use super::OpenAIClient;
use postsmith_interface::{Availability, LiveBackend, PostsmithDriver};
use postsmith_error::PostsmithResult;
use tracing::{debug, instrument};

/// Environment variable holding the OpenAI credential.
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Live backend producing [`OpenAIClient`] drivers.
///
/// The credential is read from the environment on every probe and every
/// driver construction, never cached.
#[derive(Debug, Clone)]
pub struct OpenAIBackend {
    endpoint: String,
}

impl OpenAIBackend {
    /// Backend posting to the given chat-completions URL.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl LiveBackend for OpenAIBackend {
    fn live_generation_available(&self) -> Availability {
        let configured = std::env::var(OPENAI_API_KEY_VAR)
            .map(|key| !key.trim().is_empty())
            .unwrap_or(false);
        if configured {
            Availability::Available
        } else {
            Availability::MissingCredential
        }
    }

    #[instrument(skip(self))]
    fn driver(&self, model: &str) -> PostsmithResult<Box<dyn PostsmithDriver>> {
        debug!(endpoint = %self.endpoint, "Building OpenAI driver");
        let client = OpenAIClient::from_env(model)?.with_endpoint(self.endpoint.clone());
        Ok(Box::new(client))
    }
}
