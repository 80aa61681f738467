//! Chat-completion provider abstraction.
//!
//! The recipe generator only needs "send a system+user prompt, get text
//! back", so that seam is a trait with a hosted implementation (Groq's
//! OpenAI-compatible endpoint) and a fake for tests.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::Duration;
use thiserror::Error;

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Rate limited, retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },
}

/// A hosted text-completion service.
///
/// Implementations must be stateless and thread-safe; the generator holds
/// one behind an `Arc` for the lifetime of the process.
#[async_trait]
pub trait CompletionProvider: Send + Sync + std::fmt::Debug {
    /// Send a system instruction plus user prompt, return the raw text of
    /// the first completion choice.
    async fn complete(&self, system: &str, user: &str) -> Result<String, CompletionError>;

    fn provider_name(&self) -> &'static str;
}

/// Groq chat-completion client (OpenAI-compatible wire format).
#[derive(Debug)]
pub struct GroqClient {
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl GroqClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            api_key,
            model,
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatErrorResponse {
    error: ChatApiError,
}

#[derive(Debug, Deserialize)]
struct ChatApiError {
    message: String,
}

#[async_trait]
impl CompletionProvider for GroqClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, CompletionError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user.to_string(),
                },
            ],
            temperature: 0.7,
            max_tokens: 4000,
        };

        let response = self
            .client
            .post(GROQ_API_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| CompletionError::RequestFailed(e.to_string()))?;

        let status = response.status().as_u16();

        if status == 429 {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(CompletionError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| CompletionError::RequestFailed(e.to_string()))?;

        if status != 200 {
            if let Ok(error_response) = serde_json::from_str::<ChatErrorResponse>(&body) {
                return Err(CompletionError::ApiError {
                    status,
                    message: error_response.error.message,
                });
            }
            return Err(CompletionError::ApiError {
                status,
                message: body,
            });
        }

        let response: ChatResponse =
            serde_json::from_str(&body).map_err(|e| CompletionError::ParseError(e.to_string()))?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| CompletionError::ParseError("No completion choices".to_string()))
    }

    fn provider_name(&self) -> &'static str {
        "groq"
    }
}

/// Deterministic completion provider for tests.
///
/// Responses are matched by checking whether the user prompt contains a
/// registered substring; no network access.
#[derive(Debug, Default)]
pub struct FakeCompletion {
    responses: RwLock<HashMap<String, String>>,
    default_response: Option<String>,
}

impl FakeCompletion {
    pub fn new() -> Self {
        Self::default()
    }

    /// A provider answering every prompt with `response`.
    pub fn always(response: &str) -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            default_response: Some(response.to_string()),
        }
    }

    pub fn add_response(&mut self, prompt_contains: &str, response: &str) {
        self.responses
            .write()
            .unwrap()
            .insert(prompt_contains.to_string(), response.to_string());
    }
}

#[async_trait]
impl CompletionProvider for FakeCompletion {
    async fn complete(&self, _system: &str, user: &str) -> Result<String, CompletionError> {
        let responses = self.responses.read().unwrap();
        for (pattern, response) in responses.iter() {
            if user.contains(pattern.as_str()) {
                return Ok(response.clone());
            }
        }

        match &self.default_response {
            Some(response) => Ok(response.clone()),
            None => Err(CompletionError::RequestFailed(
                "FakeCompletion: no response registered for prompt".to_string(),
            )),
        }
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fake_matches_registered_substring() {
        let mut fake = FakeCompletion::new();
        fake.add_response("tomate", "[]");
        let result = fake.complete("sistema", "recetas con tomate").await.unwrap();
        assert_eq!(result, "[]");
    }

    #[tokio::test]
    async fn fake_falls_back_to_default() {
        let fake = FakeCompletion::always("hola");
        assert_eq!(fake.complete("s", "cualquier cosa").await.unwrap(), "hola");
    }

    #[tokio::test]
    async fn fake_errors_without_registered_response() {
        let fake = FakeCompletion::new();
        assert!(fake.complete("s", "sin respuesta").await.is_err());
    }
}
