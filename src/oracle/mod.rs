//! Scoring oracle client: the single point of entry for all LLM calls in
//! this crate. No other module talks to the provider directly.
//!
//! The oracle is treated as an opaque text-completion service: a structured
//! prompt goes in, one untrusted text reply comes out. Generation is bounded
//! (`MAX_COMPLETION_TOKENS`) and sampled at low temperature: consistency of
//! the reply format matters more than creativity here.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::Config;

pub mod prompts;

/// Output-size ceiling for one scoring reply. The expected reply is a single
/// formatted line; 300 tokens leaves headroom without letting the oracle ramble.
pub const MAX_COMPLETION_TOKENS: u32 = 300;

/// Low sampling temperature, chosen for reply-format consistency.
pub const TEMPERATURE: f32 = 0.2;

/// Model used when `OPENAI_MODEL` is not configured.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

#[derive(Debug, Error)]
pub enum OracleError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("oracle returned no content")]
    EmptyContent,
}

/// One role-tagged message in the oracle prompt.
#[derive(Debug, Clone, Serialize)]
pub struct OracleMessage {
    pub role: &'static str,
    pub content: String,
}

/// A fully composed scoring prompt: system instruction plus ordered user
/// messages. Built by [`prompts::build_scoring_request`].
#[derive(Debug, Clone)]
pub struct ScoringRequest {
    pub system: &'static str,
    pub messages: Vec<OracleMessage>,
}

/// The oracle seam. The pipeline holds this as `Arc<dyn ScoringOracle>`, so
/// tests swap in deterministic stubs without touching orchestration code.
#[async_trait]
pub trait ScoringOracle: Send + Sync {
    /// Submits one scoring request and returns the raw text reply.
    ///
    /// Single attempt, no retry: a transient failure surfaces to the caller
    /// as a retryable condition rather than being masked here.
    async fn score(&self, request: &ScoringRequest) -> Result<String, OracleError>;
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Production oracle client for an OpenAI-compatible chat-completions API.
#[derive(Clone)]
pub struct OracleClient {
    client: Client,
    api_base: String,
    api_key: String,
    model: String,
}

impl OracleClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            api_base: config.openai_api_base.clone(),
            api_key: config.openai_api_key.clone(),
            model: config.openai_model.clone(),
        }
    }

    fn wire_messages<'a>(&self, request: &'a ScoringRequest) -> Vec<WireMessage<'a>> {
        let mut messages = vec![WireMessage {
            role: "system",
            content: request.system,
        }];
        messages.extend(request.messages.iter().map(|m| WireMessage {
            role: m.role,
            content: &m.content,
        }));
        messages
    }
}

#[async_trait]
impl ScoringOracle for OracleClient {
    async fn score(&self, request: &ScoringRequest) -> Result<String, OracleError> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: self.wire_messages(request),
            max_tokens: MAX_COMPLETION_TOKENS,
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiError>(&text)
                .map(|e| e.error.message)
                .unwrap_or(text);
            return Err(OracleError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;
        let reply = completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .ok_or(OracleError::EmptyContent)?;

        debug!(chars = reply.len(), "oracle reply received");
        Ok(reply)
    }
}
