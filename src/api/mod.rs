/// L3 API: Consumer interface for command translation.
pub mod error;
pub mod types;

use async_trait::async_trait;

pub use error::{AiInteractionError, AiResult};
pub use types::*;

/// L3 API trait: the interface consumed by the host.
///
/// The host never interacts with the LLM provider directly.
#[async_trait]
pub trait CommandTranslator: Send + Sync {
    /// Translate a natural language query into a single shell command.
    ///
    /// Returns the command string on success. Two failure modes exist:
    /// soft failures (uninitialized client, unusable model reply) come back
    /// as `Ok` with one of the sentinel strings from [`crate::core::translate`],
    /// while transport/provider/configuration failures come back as `Err`.
    async fn get_command(&self, query: &str) -> AiResult<String>;
}
