/// L1 Common: Error types for command translation.
use thiserror::Error;

/// Classified failures raised while obtaining a command from the AI.
///
/// The `Connection`, `Auth` and `RateLimited` variants carry the provider's
/// diagnostic text; their Display output embeds the stable marker phrases
/// hosts grep for (`AI API Connection Error`, `AI API Authentication Error`,
/// `AI API Rate Limit Exceeded`).
#[derive(Debug, Error)]
pub enum AiInteractionError {
    /// Network or transport failure reaching the provider.
    #[error("AI API Connection Error: {0}. Check your network and the API base URL if you set a custom one.")]
    Connection(String),
    /// The provider rejected the credentials.
    #[error("AI API Authentication Error: {0}. Check your API key.")]
    Auth(String),
    /// The provider throttled the request (HTTP 429).
    #[error("AI API Rate Limit Exceeded: {0}. Please wait and try again later, or check your plan.")]
    RateLimited(String),
    /// A generation parameter is missing from configuration or failed to parse.
    #[error("AI configuration error: {0}")]
    Config(String),
    /// Any other failure during the request or response handling.
    #[error("Failed to get command from AI: {0}")]
    Other(String),
}

/// Result type alias for translation operations.
pub type AiResult<T> = Result<T, AiInteractionError>;
