/// L2 SPI implementation: direct HTTP client for OpenAI-compatible providers.
///
/// This is the ONLY file in shellmind that makes HTTP calls. All other
/// modules use the `AiClient` trait.
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::api::error::{AiInteractionError, AiResult};
use crate::api::types::{AiMessage, AiResponse, AiRole, CompletionOptions};
use crate::spi::AiClient;

/// Direct HTTP client for an OpenAI-compatible chat-completions endpoint.
///
/// Bound to one API key and base URL at construction; reused for every
/// sequential call. Safe for concurrent read-only use.
pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OpenAiClient {
    /// Create a new client bound to the given credentials and endpoint.
    ///
    /// Fails only if the underlying HTTP client cannot be built; a bad or
    /// empty API key is not detected here — the provider rejects it at
    /// request time.
    pub fn new(api_key: String, base_url: String) -> AiResult<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AiInteractionError::Other(format!("HTTP client build failed: {}", e)))?;

        tracing::info!(base_url = %base_url, "AI client initialized");

        Ok(Self {
            http,
            api_key,
            base_url,
        })
    }
}

// ── OpenAI-compatible request/response types ──

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<WireMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Serialize)]
struct WireMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<WireChoice>,
    #[serde(default)]
    model: String,
}

#[derive(Deserialize)]
struct WireChoice {
    message: WireMessageContent,
}

#[derive(Deserialize)]
struct WireMessageContent {
    content: Option<String>,
}

fn role_str(role: AiRole) -> &'static str {
    match role {
        AiRole::System => "system",
        AiRole::User => "user",
        AiRole::Assistant => "assistant",
    }
}

#[async_trait]
impl AiClient for OpenAiClient {
    async fn complete(
        &self,
        messages: Vec<AiMessage>,
        options: CompletionOptions,
    ) -> AiResult<AiResponse> {
        let wire_messages: Vec<WireMessage> = messages
            .into_iter()
            .map(|m| WireMessage {
                role: role_str(m.role).to_string(),
                content: m.content,
            })
            .collect();

        let body = ChatCompletionRequest {
            model: options.model,
            messages: wire_messages,
            temperature: options.temperature,
            max_tokens: options.max_tokens,
        };

        let resp = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| AiInteractionError::Connection(e.to_string()))?;

        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            let text = resp.text().await.unwrap_or_default();
            return Err(AiInteractionError::Auth(format!("{}: {}", status, text)));
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let text = resp.text().await.unwrap_or_default();
            return Err(AiInteractionError::RateLimited(format!(
                "{}: {}",
                status, text
            )));
        }
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(AiInteractionError::Other(format!(
                "API error ({}): {}",
                status, text
            )));
        }

        let completion: ChatCompletionResponse = resp
            .json()
            .await
            .map_err(|e| AiInteractionError::Other(format!("failed to parse response: {}", e)))?;

        let content = completion
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .unwrap_or_default();

        Ok(AiResponse {
            content,
            model: completion.model,
        })
    }

    fn description(&self) -> String {
        format!("openai-compatible:{}", self.base_url)
    }
}
