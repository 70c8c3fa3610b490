//! Driver and capability-probe traits.

use async_trait::async_trait;
use postsmith_core::{GenerateRequest, GenerateResponse, OfflineReason};
use postsmith_error::{BackendError, BackendErrorKind, PostsmithResult};

/// A live text generator.
#[async_trait]
pub trait PostsmithDriver: Send + Sync {
    /// Send one request and return the generated text.
    async fn generate(&self, req: &GenerateRequest) -> PostsmithResult<GenerateResponse>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gpt-4o-mini").
    fn model_name(&self) -> &str;
}

/// Result of probing whether a live call can be attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Availability {
    /// Client present and credential configured
    #[display("API key found")]
    Available,
    /// No live client compiled into this build
    #[display("Live client missing; rebuild with the `openai` feature to use the live API")]
    ClientMissing,
    /// Client present but no credential in the environment
    #[display("OPENAI_API_KEY not set in environment")]
    MissingCredential,
}

impl Availability {
    /// Whether a live call may be attempted.
    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available)
    }

    /// The offline reason to report when live generation is unavailable.
    ///
    /// ```
    /// use postsmith_core::OfflineReason;
    /// use postsmith_interface::Availability;
    ///
    /// assert_eq!(Availability::Available.offline_reason(), None);
    /// assert_eq!(
    ///     Availability::MissingCredential.offline_reason(),
    ///     Some(OfflineReason::MissingCredential)
    /// );
    /// ```
    pub fn offline_reason(&self) -> Option<OfflineReason> {
        match self {
            Availability::Available => None,
            Availability::ClientMissing => Some(OfflineReason::ClientUnavailable),
            Availability::MissingCredential => Some(OfflineReason::MissingCredential),
        }
    }
}

/// Source of live drivers, decoupled from any concrete client.
///
/// The pipeline consults [`LiveBackend::live_generation_available`] once per
/// request and only asks for a driver when it reports
/// [`Availability::Available`].
pub trait LiveBackend: Send + Sync {
    /// Probe client presence and credential configuration.
    fn live_generation_available(&self) -> Availability;

    /// Build a driver for the given model identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be constructed, for example when
    /// the credential disappeared between probe and call.
    fn driver(&self, model: &str) -> PostsmithResult<Box<dyn PostsmithDriver>>;
}

/// Backend for builds without any live client.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLiveBackend;

impl LiveBackend for NoLiveBackend {
    fn live_generation_available(&self) -> Availability {
        Availability::ClientMissing
    }

    fn driver(&self, model: &str) -> PostsmithResult<Box<dyn PostsmithDriver>> {
        Err(BackendError::new(BackendErrorKind::NoClient(model.to_string())).into())
    }
}
