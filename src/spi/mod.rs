/// L2 SPI: Provider plugin point.
///
/// The `AiClient` trait abstracts over the underlying LLM provider.
///
/// Implementation:
/// - `openai_client.rs`: direct reqwest client for OpenAI-compatible endpoints
///
/// `os_probe.rs` is the second collaborator seam: host OS identity for the
/// system prompt.
pub mod openai_client;
pub mod os_probe;

pub use openai_client::OpenAiClient;

use async_trait::async_trait;

use crate::api::error::AiResult;
use crate::api::types::{AiMessage, AiResponse, CompletionOptions};

/// L2 SPI trait: plugin point for LLM backends.
///
/// This is the isolation boundary. All core logic programs against this
/// trait. Swapping the LLM backend requires changing only the client module.
#[async_trait]
pub trait AiClient: Send + Sync {
    /// Send one completion request to the LLM.
    async fn complete(
        &self,
        messages: Vec<AiMessage>,
        options: CompletionOptions,
    ) -> AiResult<AiResponse>;

    /// Human-readable description of the provider endpoint.
    fn description(&self) -> String;
}
