use super::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, OPENAI_API_KEY_VAR};
use async_trait::async_trait;
use postsmith_core::{GenerateRequest, GenerateResponse, Role};
use postsmith_error::{ModelsError, ModelsErrorKind, ModelsResult, OpenAIErrorKind, PostsmithResult};
use postsmith_interface::PostsmithDriver;
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Default chat-completions endpoint.
pub const OPENAI_CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Output length cap used when a request does not set one.
pub const DEFAULT_MAX_TOKENS: u32 = 800;

/// OpenAI chat-completions client.
#[derive(Debug, Clone)]
pub struct OpenAIClient {
    client: Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl OpenAIClient {
    /// Creates a new client against the default endpoint.
    ///
    /// # Arguments
    ///
    /// * `api_key` - OpenAI API key
    /// * `model` - Model identifier (e.g., "gpt-3.5-turbo")
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        debug!("Creating new OpenAI client");
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            endpoint: OPENAI_CHAT_COMPLETIONS_URL.to_string(),
        }
    }

    /// Creates a client reading the key from `OPENAI_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns [`OpenAIErrorKind::MissingApiKey`] if the variable is unset or blank.
    #[instrument]
    pub fn from_env(model: &str) -> ModelsResult<Self> {
        let api_key = std::env::var(OPENAI_API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ModelsError::new(OpenAIErrorKind::MissingApiKey.into()))?;
        Ok(Self::new(api_key, model))
    }

    /// Points the client at a different chat-completions URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Endpoint requests are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends a request to the chat-completions endpoint.
    #[instrument(skip(self, request), fields(model = %request.model()))]
    pub async fn generate_chat(
        &self,
        request: &ChatCompletionRequest,
    ) -> ModelsResult<ChatCompletionResponse> {
        debug!("Sending request to OpenAI API");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to OpenAI API");
                ModelsError::new(OpenAIErrorKind::Http(e.to_string()).into())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "OpenAI API returned error");
            return Err(ModelsError::new(
                OpenAIErrorKind::ApiError {
                    status: status.as_u16(),
                    message: body,
                }
                .into(),
            ));
        }

        let chat_response: ChatCompletionResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse OpenAI response");
            ModelsError::new(OpenAIErrorKind::Parse(e.to_string()).into())
        })?;

        debug!(response_id = %chat_response.id(), "Received response from OpenAI");
        Ok(chat_response)
    }

    /// Converts a generic request into a chat-completions body.
    ///
    /// The request's own model overrides the client's; a missing output cap
    /// becomes [`DEFAULT_MAX_TOKENS`].
    pub fn convert_request(&self, request: &GenerateRequest) -> ModelsResult<ChatCompletionRequest> {
        let messages: Vec<ChatMessage> = request
            .messages()
            .iter()
            .map(|msg| {
                let role = match msg.role {
                    Role::System => "system",
                    Role::User => "user",
                    Role::Assistant => "assistant",
                };
                ChatMessage::new(role, msg.content.clone())
            })
            .collect();

        let model = request.model().clone().unwrap_or_else(|| self.model.clone());

        ChatCompletionRequest::builder()
            .model(model)
            .messages(messages)
            .temperature(*request.temperature())
            .max_tokens(request.max_tokens().unwrap_or(DEFAULT_MAX_TOKENS))
            .build()
            .map_err(|e| ModelsError::new(ModelsErrorKind::Builder(e.to_string())))
    }

    /// Converts a chat-completions body into a generic response.
    ///
    /// # Errors
    ///
    /// Returns [`OpenAIErrorKind::EmptyResponse`] if no choice carries text.
    pub fn convert_response(response: &ChatCompletionResponse) -> ModelsResult<GenerateResponse> {
        let choices: Vec<String> = response
            .choices()
            .iter()
            .filter_map(|choice| choice.message().content().clone())
            .collect();

        if choices.is_empty() {
            return Err(ModelsError::new(OpenAIErrorKind::EmptyResponse.into()));
        }

        Ok(GenerateResponse::new(choices))
    }
}

#[async_trait]
impl PostsmithDriver for OpenAIClient {
    #[instrument(skip(self, request), fields(provider = "openai", model = %self.model))]
    async fn generate(&self, request: &GenerateRequest) -> PostsmithResult<GenerateResponse> {
        let chat_request = self.convert_request(request)?;
        let chat_response = self.generate_chat(&chat_request).await?;
        Ok(Self::convert_response(&chat_response)?)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use postsmith_core::Message;

    fn request() -> GenerateRequest {
        GenerateRequest::builder()
            .messages(vec![
                Message::new(Role::System, "You are a helpful assistant."),
                Message::new(Role::User, "Topic: coffee"),
            ])
            .temperature(0.5)
            .build()
            .unwrap()
    }

    #[test]
    fn convert_request_maps_roles_and_defaults() {
        let client = OpenAIClient::new("sk-test", "gpt-4o-mini");
        let chat = client.convert_request(&request()).unwrap();

        assert_eq!(chat.model(), "gpt-4o-mini");
        assert_eq!(chat.messages()[0].role(), "system");
        assert_eq!(chat.messages()[1].role(), "user");
        assert_eq!(*chat.temperature(), Some(0.5));
        assert_eq!(*chat.max_tokens(), Some(DEFAULT_MAX_TOKENS));
    }

    #[test]
    fn convert_request_prefers_request_model() {
        let client = OpenAIClient::new("sk-test", "gpt-4o-mini");
        let req = GenerateRequest::builder()
            .messages(vec![Message::new(Role::User, "hi")])
            .model("gpt-4")
            .max_tokens(64)
            .build()
            .unwrap();
        let chat = client.convert_request(&req).unwrap();

        assert_eq!(chat.model(), "gpt-4");
        assert_eq!(*chat.max_tokens(), Some(64));
        assert_eq!(*chat.temperature(), None);

        let body = serde_json::to_value(&chat).unwrap();
        assert!(body.get("temperature").is_none());
    }

    #[test]
    fn convert_response_takes_message_content() {
        let body = r#"{
            "id": "chatcmpl-1",
            "choices": [{"index": 0, "message": {"role": "assistant", "content": "[]"}}]
        }"#;
        let chat: ChatCompletionResponse = serde_json::from_str(body).unwrap();
        let response = OpenAIClient::convert_response(&chat).unwrap();
        assert_eq!(response.text(), Some("[]"));
    }

    #[test]
    fn convert_response_rejects_empty_choices() {
        let chat: ChatCompletionResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        let err = OpenAIClient::convert_response(&chat).unwrap_err();
        assert_eq!(
            err.kind,
            ModelsErrorKind::OpenAI(OpenAIErrorKind::EmptyResponse)
        );
    }

    #[test]
    fn with_endpoint_overrides_url() {
        let client = OpenAIClient::new("sk-test", "gpt-4").with_endpoint("http://localhost:9/v1");
        assert_eq!(client.endpoint(), "http://localhost:9/v1");
        assert_eq!(client.provider_name(), "openai");
        assert_eq!(client.model_name(), "gpt-4");
    }
}
