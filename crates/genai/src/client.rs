//! HTTP client for the generative provider (OpenAI-compatible chat API).
//!
//! Wraps the provider's `/chat/completions` endpoint using [`reqwest`]. Each
//! operation sends a single instruction message asking for a JSON object
//! matching the operation's output schema, then validates the reply with the
//! strict parsers in [`crate::schema`].

use serde::Deserialize;

use crate::schema::{self, ClarityRating, GeneratedContent};

/// Configuration for the generative provider connection.
#[derive(Debug, Clone)]
pub struct GenAiConfig {
    /// Base URL, e.g. `https://api.example.com/v1`.
    pub base_url: String,
    /// Bearer token sent with every request.
    pub api_key: String,
    /// Model identifier passed in the request body.
    pub model: String,
}

impl GenAiConfig {
    /// Load provider configuration from environment variables.
    ///
    /// | Env Var          | Required | Default                     |
    /// |------------------|----------|-----------------------------|
    /// | `GENAI_BASE_URL` | no       | `https://api.openai.com/v1` |
    /// | `GENAI_API_KEY`  | **yes**  | --                          |
    /// | `GENAI_MODEL`    | no       | `gpt-4o-mini`               |
    ///
    /// # Panics
    ///
    /// Panics if `GENAI_API_KEY` is not set.
    pub fn from_env() -> Self {
        let base_url = std::env::var("GENAI_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".into());
        let api_key =
            std::env::var("GENAI_API_KEY").expect("GENAI_API_KEY must be set in the environment");
        let model = std::env::var("GENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".into());
        Self {
            base_url,
            api_key,
            model,
        }
    }
}

/// Errors from the generative provider layer.
#[derive(Debug, thiserror::Error)]
pub enum GenAiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("Generative provider request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("Generative provider error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The provider's reply did not match the operation's output schema.
    #[error("Generative provider returned invalid output: {0}")]
    Schema(String),
}

/// Chat-completion response envelope (the subset this client reads).
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

/// Client for the generative provider. Stateless between calls.
#[derive(Clone)]
pub struct GenAiClient {
    client: reqwest::Client,
    config: GenAiConfig,
}

impl GenAiClient {
    /// Create a new provider client.
    pub fn new(config: GenAiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling).
    pub fn with_client(client: reqwest::Client, config: GenAiConfig) -> Self {
        Self { client, config }
    }

    /// Generate an expanded/improved version of a prompt's content, seeded
    /// by its title and existing content as context.
    pub async fn generate_content(
        &self,
        title: &str,
        content: &str,
    ) -> Result<GeneratedContent, GenAiError> {
        let instruction = format!(
            "You are an AI assistant that helps users create better prompts. \
             Based on the following title and content, generate a more detailed \
             and effective version of the prompt content.\n\n\
             Title: {title}\nContent: {content}\n\n\
             Respond with a single JSON object: {{\"generated_content\": string}}."
        );
        let raw = self.complete(&instruction).await?;
        schema::parse_generated_content(&raw)
    }

    /// Produce a single integer clarity/quality score for the given text.
    ///
    /// The score is range-validated (1-10 inclusive); anything else is a
    /// [`GenAiError::Schema`] and must never be persisted.
    pub async fn rate_clarity(&self, content: &str) -> Result<ClarityRating, GenAiError> {
        let instruction = format!(
            "Rate the following text from 1 to 10 based on clarity and quality.\n\n\
             Text: {content}\n\n\
             Respond with a single JSON object: {{\"rating\": integer (1-10)}}."
        );
        let raw = self.complete(&instruction).await?;
        schema::parse_clarity_rating(&raw)
    }

    /// Send one chat completion and return the reply message text.
    async fn complete(&self, instruction: &str) -> Result<String, GenAiError> {
        let body = serde_json::json!({
            "model": self.config.model,
            "messages": [{ "role": "user", "content": instruction }],
            "response_format": { "type": "json_object" },
        });

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenAiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| GenAiError::Schema(format!("malformed provider envelope: {e}")))?;

        let message = parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| GenAiError::Schema("provider returned no choices".to_string()))?;

        tracing::debug!(bytes = message.len(), "Received provider completion");
        Ok(message)
    }
}
