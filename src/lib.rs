/// L5 Facade: shellmind crate entry point.
///
/// Re-exports the public API and provides the `create_translator()` factory.
///
/// # Architecture (SEA Pattern)
///
/// ```text
/// L5 Facade   - lib.rs (this file): re-exports, factory
/// L4 Core     - core/: DefaultTranslator, translate logic, prompts
/// L3 API      - api/: CommandTranslator trait (consumer interface)
/// L2 SPI      - spi/: AiClient trait + OpenAiClient (reqwest), OS probe
/// L1 Common   - api/types.rs, api/error.rs: shared types
/// ```

pub mod api;
pub mod config;
pub mod core;
pub mod spi;

// ── Public re-exports (L3 API surface) ──

pub use crate::api::error::{AiInteractionError, AiResult};
pub use crate::api::types::{AiMessage, AiResponse, AiRole, CompletionOptions};
pub use crate::api::CommandTranslator;
pub use crate::config::{ConfigStore, EnvConfigStore, StaticConfigStore};
pub use crate::core::translate::{CLIENT_NOT_INITIALIZED, INVALID_COMMAND};
pub use crate::core::DefaultTranslator;
pub use crate::spi::os_probe::{HostOsProbe, OsDetails, OsProbe};

/// Fallback chat-completions endpoint used when `base_url` is not configured.
pub const DEFAULT_BASE_URL: &str = "https://platform.openai.com/v1";

/// Factory: create the translator from a configuration store.
///
/// Reads `api_key` and `base_url` once; a missing API key logs a warning but
/// does not abort — the client is still built and the provider rejects the
/// request at call time. A client construction failure propagates as `Err`.
///
/// The host should call this at startup and keep the translator for the
/// lifetime of the session:
/// ```ignore
/// let translator = shellmind::create_translator(Box::new(EnvConfigStore))?;
/// let command = translator.get_command("list hidden files").await?;
/// ```
pub fn create_translator(config: Box<dyn ConfigStore>) -> AiResult<DefaultTranslator> {
    let api_key = config.get("api_key");
    if api_key.is_none() {
        tracing::warn!("API key not set in configuration");
    }

    let base_url = config
        .get("base_url")
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let client = spi::openai_client::OpenAiClient::new(api_key.unwrap_or_default(), base_url)?;

    Ok(DefaultTranslator::new(
        Some(Box::new(client)),
        config,
        Box::new(HostOsProbe),
    ))
}
