//! Anthropic Messages API summarizer.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;
use crate::error::{ConfigError, LlmError};

use super::prompt::Prompt;

/// Current Anthropic API version header value.
const API_VERSION: &str = "2023-06-01";

/// Turns a prompt into generated text.
///
/// This abstraction allows mocking the remote endpoint in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Send `prompt` and return the generated text.
    async fn summarize(&self, prompt: &Prompt) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<ApiMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ApiMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(rename = "type")]
    error_type: String,
    message: String,
}

/// Client for the `/v1/messages` endpoint.
pub struct AnthropicClient {
    client: Client,
    api_key: String,
    api_base: String,
    model: String,
    max_tokens: u32,
}

impl AnthropicClient {
    /// Create a client from the startup configuration.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .user_agent(concat!("git-commit-ai/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            api_base: config.api_base.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        })
    }
}

#[async_trait]
impl Summarizer for AnthropicClient {
    async fn summarize(&self, prompt: &Prompt) -> Result<String, LlmError> {
        let request = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            system: &prompt.system,
            messages: vec![ApiMessage {
                role: "user",
                content: &prompt.user,
            }],
        };

        let url = format!("{}/v1/messages", self.api_base);
        debug!(
            "POST {} model={} prompt_chars={}",
            url,
            self.model,
            prompt.user.len()
        );

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(LlmError::Request)?;

        let status = response.status();
        let body = response.text().await.map_err(LlmError::Request)?;

        if !status.is_success() {
            return Err(parse_error_body(status.as_u16(), &body));
        }

        parse_response_text(&body)
    }
}

fn parse_error_body(status: u16, body: &str) -> LlmError {
    match serde_json::from_str::<ApiErrorResponse>(body) {
        Ok(err) => LlmError::Api {
            status,
            error_type: err.error.error_type,
            message: err.error.message,
        },
        Err(_) => LlmError::Api {
            status,
            error_type: "http_error".to_string(),
            message: body.trim().to_string(),
        },
    }
}

/// Take the text of the first content block.
fn parse_response_text(body: &str) -> Result<String, LlmError> {
    let response: MessagesResponse =
        serde_json::from_str(body).map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

    response
        .content
        .into_iter()
        .next()
        .and_then(|block| block.text)
        .ok_or(LlmError::EmptyResponse)
}
