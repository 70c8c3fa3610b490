//! Strategy selection for a single generation request.

use crate::{PromptSet, PromptVars, fallback_generate, heuristic_posts, normalize};
use postsmith_core::{
    GenerateRequest, GenerationOutcome, GenerationRequest, GenerationStatus, Message,
    OfflineReason, Role,
};
use postsmith_error::{BackendError, BackendErrorKind, BuilderError, PostsmithResult};
use postsmith_interface::{Availability, LiveBackend};
use tracing::{debug, info, instrument, warn};

/// System instruction sent ahead of every prompt.
pub const DEFAULT_SYSTEM_INSTRUCTION: &str = "You are a helpful assistant.";

const DEFAULT_MAX_TOKENS: u32 = 800;

/// Chooses and runs one generation strategy per request.
///
/// The pipeline keeps no state between calls; each [`generate`] returns an
/// owned [`GenerationOutcome`] for the caller to hold.
///
/// [`generate`]: GenerationPipeline::generate
pub struct GenerationPipeline {
    backend: Box<dyn LiveBackend>,
    prompts: PromptSet,
    system_instruction: String,
    max_tokens: u32,
}

impl std::fmt::Debug for GenerationPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationPipeline")
            .field("prompts", &self.prompts)
            .field("system_instruction", &self.system_instruction)
            .field("max_tokens", &self.max_tokens)
            .finish_non_exhaustive()
    }
}

impl GenerationPipeline {
    /// Pipeline with the built-in prompts and limits.
    pub fn new(backend: Box<dyn LiveBackend>) -> Self {
        Self {
            backend,
            prompts: PromptSet::default(),
            system_instruction: DEFAULT_SYSTEM_INSTRUCTION.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Replace the strict and relaxed templates.
    pub fn with_prompts(mut self, prompts: PromptSet) -> Self {
        self.prompts = prompts;
        self
    }

    /// Replace the system instruction.
    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = instruction.into();
        self
    }

    /// Cap the live generator's output length.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Probe the live backend without generating anything.
    pub fn availability(&self) -> Availability {
        self.backend.live_generation_available()
    }

    /// Produce posts for `request`.
    ///
    /// Never fails: an offline choice, an unavailable backend, or any failure
    /// on the live path yields posts from [`fallback_generate`], and output
    /// that will not parse is split by [`heuristic_posts`]. The returned
    /// status says which of these happened.
    #[instrument(
        skip(self, request),
        fields(
            topic = %request.topic(),
            model = %request.model_choice(),
            count = *request.count(),
        )
    )]
    pub async fn generate(&self, request: &GenerationRequest) -> GenerationOutcome {
        let topic = request.topic();
        let count = *request.count();

        let Some(model) = request.model_choice().model_id() else {
            info!("Offline model selected");
            return offline(topic, count, OfflineReason::OfflineSelected);
        };

        let availability = self.backend.live_generation_available();
        if let Some(reason) = availability.offline_reason() {
            info!(%availability, "Live generation unavailable, using offline fallback");
            return offline(topic, count, reason);
        }

        let raw = match self.generate_live(request, model).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "Live generation failed, using offline fallback");
                return GenerationOutcome::new(
                    fallback_generate(topic, count),
                    GenerationStatus::LiveFailed { error: e.summary() },
                );
            }
        };

        match normalize(&raw) {
            Some(posts) => {
                info!(posts = posts.len(), "Live output parsed");
                GenerationOutcome::new(posts, GenerationStatus::Live)
            }
            None => {
                warn!(
                    raw_length = raw.len(),
                    "Live output unparseable, splitting heuristically"
                );
                let posts = heuristic_posts(&raw, count);
                GenerationOutcome::heuristic(posts, raw)
            }
        }
    }

    async fn generate_live(&self, request: &GenerationRequest, model: &str) -> PostsmithResult<String> {
        let prompt = self
            .prompts
            .for_mode(*request.strict_mode())
            .render(&PromptVars::from(request))?;
        debug!(strict = *request.strict_mode(), prompt_length = prompt.len(), "Rendered prompt");

        let generate_request = GenerateRequest::builder()
            .messages(vec![
                Message::new(Role::System, self.system_instruction.clone()),
                Message::new(Role::User, prompt),
            ])
            .model(model)
            .temperature(*request.temperature())
            .max_tokens(self.max_tokens)
            .build()
            .map_err(|e| BuilderError::from(e.to_string()))?;

        let driver = self.backend.driver(model)?;
        info!(provider = driver.provider_name(), model = driver.model_name(), "Calling live generator");
        let response = driver.generate(&generate_request).await?;

        response
            .text()
            .map(str::to_string)
            .ok_or_else(|| BackendError::new(BackendErrorKind::EmptyReply).into())
    }
}

fn offline(topic: &str, count: usize, reason: OfflineReason) -> GenerationOutcome {
    GenerationOutcome::new(fallback_generate(topic, count), GenerationStatus::Offline(reason))
}
