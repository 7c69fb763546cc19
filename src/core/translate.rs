/// NL -> shell command translation flow.
use std::fmt;
use std::str::FromStr;

use crate::api::error::{AiInteractionError, AiResult};
use crate::api::types::{AiMessage, CompletionOptions};
use crate::config::ConfigStore;
use crate::core::prompt;
use crate::spi::os_probe::OsProbe;
use crate::spi::AiClient;

/// Soft sentinel: no client handle was built at construction time.
pub const CLIENT_NOT_INITIALIZED: &str =
    "Error: AI client not initialized. Check API key and base URL configuration.";

/// Soft sentinel: the model's reply was empty or self-reported an error.
pub const INVALID_COMMAND: &str = "Error: AI failed to generate a valid command.";

/// Translate a natural language query into a single shell command.
///
/// Generation parameters are re-read from the configuration store on every
/// call so a changed model or temperature takes effect immediately. The
/// request always carries exactly two messages: system, then the user query
/// verbatim.
pub async fn get_command(
    client: Option<&dyn AiClient>,
    config: &dyn ConfigStore,
    os_probe: &dyn OsProbe,
    query: &str,
) -> AiResult<String> {
    let Some(client) = client else {
        return Ok(CLIENT_NOT_INITIALIZED.to_string());
    };

    let os = os_probe.details();
    let messages = vec![
        AiMessage::system(prompt::translate_system_prompt(&os.name)),
        AiMessage::user(query),
    ];

    let model = require(config, "ai_model")?;
    let temperature: f32 = parse_field(config, "temperature")?;
    let max_tokens: u32 = parse_field(config, "max_tokens")?;

    let options = CompletionOptions {
        model,
        temperature: Some(temperature),
        max_tokens: Some(max_tokens),
    };

    let response = match client.complete(messages, options).await {
        Ok(response) => response,
        Err(err) => {
            // Provider-error categories are surfaced in the log as well as
            // returned; configuration errors only propagate.
            if matches!(
                err,
                AiInteractionError::Connection(_)
                    | AiInteractionError::Auth(_)
                    | AiInteractionError::RateLimited(_)
            ) {
                tracing::error!("{}", err);
            }
            return Err(err);
        }
    };

    let command = response.content.trim();
    if command.is_empty() || command.starts_with("Error:") {
        return Ok(INVALID_COMMAND.to_string());
    }

    Ok(command.to_string())
}

fn require(config: &dyn ConfigStore, key: &str) -> AiResult<String> {
    config
        .get(key)
        .ok_or_else(|| AiInteractionError::Config(format!("'{}' is not set", key)))
}

fn parse_field<T>(config: &dyn ConfigStore, key: &str) -> AiResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = require(config, key)?;
    raw.parse().map_err(|e| {
        AiInteractionError::Config(format!("'{}' value '{}' is invalid: {}", key, raw, e))
    })
}
