//! Layered configuration.
//!
//! Sources, later overriding earlier:
//! - Bundled defaults (include_str! from postsmith.toml)
//! - ~/.config/postsmith/postsmith.toml
//! - ./postsmith.toml

use config::{Config, ConfigBuilder, File, FileFormat, builder::DefaultState};
use postsmith_core::{
    GenerationRequestBuilder, MAX_POST_COUNT, MIN_POST_COUNT, ModelChoice, Platform, Tone,
};
use postsmith_error::{ConfigError, ConfigErrorKind, PostsmithError, PostsmithResult};
use postsmith_generation::{GenerationPipeline, PromptSet, PromptTemplate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../postsmith.toml");

/// Defaults applied to every generation request.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GenerationConfig {
    /// Model choice, or `offline`
    pub model: ModelChoice,
    /// Sampling temperature in [0, 1]
    pub temperature: f32,
    /// Ask for strict JSON output
    pub strict: bool,
    /// Posts per request
    pub count: usize,
    /// Target platform
    pub platform: Platform,
    /// Writing tone
    pub tone: Tone,
}

/// Live OpenAI client settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OpenAIConfig {
    /// Chat-completions URL
    pub endpoint: String,
    /// Token ceiling per request
    pub max_tokens: u32,
    /// System message sent ahead of the prompt
    pub system_instruction: String,
}

/// Optional prompt template overrides.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct PromptConfig {
    /// Replaces the strict JSON template
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict: Option<PromptTemplate>,
    /// Replaces the relaxed template
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relaxed: Option<PromptTemplate>,
}

impl PromptConfig {
    /// Built-in templates with any overrides applied.
    pub fn prompt_set(&self) -> PromptSet {
        let mut set = PromptSet::default();
        if let Some(strict) = &self.strict {
            set.strict = strict.clone();
        }
        if let Some(relaxed) = &self.relaxed {
            set.relaxed = relaxed.clone();
        }
        set
    }
}

/// Top-level configuration.
///
/// Every source is layered over the bundled defaults, so a user file only
/// lists the keys it changes:
///
/// ```toml
/// [generation]
/// model = "gpt-4o-mini"
/// temperature = 0.5
/// platform = "LinkedIn"
///
/// [prompts]
/// relaxed = "Write {count} {tone} posts about {topic} for {platform}."
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PostsmithConfig {
    /// Request defaults
    pub generation: GenerationConfig,
    /// Live client settings
    pub openai: OpenAIConfig,
    /// Template overrides
    #[serde(default)]
    pub prompts: PromptConfig,
}

impl PostsmithConfig {
    /// Load configuration from one TOML file layered over the bundled defaults.
    ///
    /// The file only needs the keys it overrides; the user config files that
    /// [`PostsmithConfig::load`] consults are ignored.
    ///
    /// # Errors
    ///
    /// Returns error if the file is missing, malformed, or fails validation.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> PostsmithResult<Self> {
        let path = path.as_ref();
        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path));
        let config = Self::build(builder)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// User config files are optional and skipped when absent.
    ///
    /// # Errors
    ///
    /// Returns error if a present file is malformed or the merged values fail validation.
    pub fn load() -> PostsmithResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/postsmith/postsmith.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("postsmith").required(false));

        let config = Self::build(builder)?;
        config.validate()?;
        Ok(config)
    }

    /// Bundled defaults only, ignoring user files.
    ///
    /// # Errors
    ///
    /// Returns error only if the bundled file is malformed.
    pub fn bundled() -> PostsmithResult<Self> {
        Self::build(
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml)),
        )
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> PostsmithResult<Self> {
        builder
            .build()
            .map_err(|e| {
                PostsmithError::from(ConfigError::new(ConfigErrorKind::Read(e.to_string())))
            })?
            .try_deserialize()
            .map_err(|e| {
                PostsmithError::from(ConfigError::new(ConfigErrorKind::Parse(e.to_string())))
            })
    }

    /// Check value ranges and that template overrides render.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first offending key.
    pub fn validate(&self) -> PostsmithResult<()> {
        let generation = &self.generation;
        if !(0.0..=1.0).contains(&generation.temperature) {
            return Err(ConfigError::invalid(
                "generation.temperature",
                format!("must be between 0 and 1, got {}", generation.temperature),
            )
            .into());
        }
        if !(MIN_POST_COUNT..=MAX_POST_COUNT).contains(&generation.count) {
            return Err(ConfigError::invalid(
                "generation.count",
                format!(
                    "must be between {} and {}, got {}",
                    MIN_POST_COUNT, MAX_POST_COUNT, generation.count
                ),
            )
            .into());
        }
        if self.openai.max_tokens == 0 {
            return Err(ConfigError::invalid("openai.max_tokens", "must be greater than 0").into());
        }
        if self.openai.endpoint.trim().is_empty() {
            return Err(ConfigError::invalid("openai.endpoint", "must not be empty").into());
        }
        for (key, template) in [
            ("prompts.strict", &self.prompts.strict),
            ("prompts.relaxed", &self.prompts.relaxed),
        ] {
            if let Some(template) = template {
                template.validate().map_err(|e| {
                    PostsmithError::from(ConfigError::invalid(key, e.kind.to_string()))
                })?;
            }
        }
        Ok(())
    }

    /// Request builder pre-filled with the configured defaults.
    pub fn request_builder(&self) -> GenerationRequestBuilder {
        let generation = &self.generation;
        let mut builder = GenerationRequestBuilder::default();
        builder
            .platform(generation.platform)
            .tone(generation.tone)
            .count(generation.count)
            .model_choice(generation.model)
            .strict_mode(generation.strict)
            .temperature(generation.temperature);
        builder
    }

    /// Pipeline wired to the configured live backend and templates.
    pub fn pipeline(&self) -> GenerationPipeline {
        GenerationPipeline::new(postsmith_models::live_backend(self.openai.endpoint.clone()))
            .with_prompts(self.prompts.prompt_set())
            .with_system_instruction(self.openai.system_instruction.clone())
            .with_max_tokens(self.openai.max_tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use postsmith_generation::{DEFAULT_SYSTEM_INSTRUCTION, STRICT_TEMPLATE};

    #[test]
    fn test_bundled_defaults() {
        let config = PostsmithConfig::bundled().unwrap();
        assert_eq!(config.generation.model, ModelChoice::Gpt35Turbo);
        assert_eq!(config.generation.count, 3);
        assert!(config.generation.strict);
        assert_eq!(config.generation.platform, Platform::Instagram);
        assert_eq!(config.generation.tone, Tone::Friendly);
        assert_eq!(config.openai.max_tokens, 800);
        assert_eq!(config.openai.system_instruction, DEFAULT_SYSTEM_INSTRUCTION);
        assert_eq!(config.prompts, PromptConfig::default());
        config.validate().unwrap();
    }

    #[test]
    fn test_validate_rejects_temperature() {
        let mut config = PostsmithConfig::bundled().unwrap();
        config.generation.temperature = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_max_tokens() {
        let mut config = PostsmithConfig::bundled().unwrap();
        config.openai.max_tokens = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_broken_template() {
        let mut config = PostsmithConfig::bundled().unwrap();
        config.prompts.relaxed = Some(PromptTemplate::new("Posts about {subject}"));
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("prompts.relaxed"));
    }

    #[test]
    fn test_prompt_set_overrides() {
        let prompts = PromptConfig {
            strict: None,
            relaxed: Some(PromptTemplate::new("{count} posts on {topic}")),
        };
        let set = prompts.prompt_set();
        assert_eq!(set.strict.text(), STRICT_TEMPLATE);
        assert_eq!(set.relaxed.text(), "{count} posts on {topic}");
    }

    #[test]
    fn test_request_builder_uses_defaults() {
        let mut config = PostsmithConfig::bundled().unwrap();
        config.generation.tone = Tone::Witty;
        config.generation.count = 2;
        let request = config.request_builder().topic("coffee").build().unwrap();
        assert_eq!(request.topic(), "coffee");
        assert_eq!(*request.tone(), Tone::Witty);
        assert_eq!(*request.count(), 2);
        assert_eq!(*request.model_choice(), ModelChoice::Gpt35Turbo);
    }
}
