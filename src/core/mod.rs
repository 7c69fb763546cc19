/// L4 Core: DefaultTranslator orchestration.
///
/// Wires the SPI client to the API trait, delegating to `translate` for the
/// request flow. The client handle is optional: a host that could not build
/// one still gets a translator, and `get_command` answers with the
/// uninitialized-client sentinel instead of failing.
pub mod prompt;
pub mod translate;

use async_trait::async_trait;

use crate::api::error::AiResult;
use crate::api::CommandTranslator;
use crate::config::ConfigStore;
use crate::spi::os_probe::OsProbe;
use crate::spi::AiClient;

/// The default implementation of `CommandTranslator`.
pub struct DefaultTranslator {
    client: Option<Box<dyn AiClient>>,
    config: Box<dyn ConfigStore>,
    os_probe: Box<dyn OsProbe>,
}

impl DefaultTranslator {
    /// Create a translator with the given client, config store, and OS probe.
    ///
    /// Pass `None` for the client to model a failed or skipped client setup;
    /// every `get_command` call then returns the soft sentinel.
    pub fn new(
        client: Option<Box<dyn AiClient>>,
        config: Box<dyn ConfigStore>,
        os_probe: Box<dyn OsProbe>,
    ) -> Self {
        Self {
            client,
            config,
            os_probe,
        }
    }
}

#[async_trait]
impl CommandTranslator for DefaultTranslator {
    async fn get_command(&self, query: &str) -> AiResult<String> {
        translate::get_command(
            self.client.as_deref(),
            self.config.as_ref(),
            self.os_probe.as_ref(),
            query,
        )
        .await
    }
}
