/// Configuration store abstraction.
///
/// The translator reads connection fields (`api_key`, `base_url`) once at
/// construction and generation fields (`ai_model`, `temperature`,
/// `max_tokens`) on every call, so a live-reloading store takes effect
/// without rebuilding the translator.
use std::collections::HashMap;

/// Key/value configuration source. All values are strings; numeric fields
/// are parsed by the translator at call time.
pub trait ConfigStore: Send + Sync {
    /// Look up a configuration value, `None` when absent.
    fn get(&self, key: &str) -> Option<String>;
}

/// Store backed by environment variables.
///
/// | Key | Variable | Purpose |
/// |-----|----------|---------|
/// | `api_key` | `SHELLMIND_API_KEY` | Provider credential |
/// | `base_url` | `SHELLMIND_BASE_URL` | Endpoint override |
/// | `ai_model` | `SHELLMIND_AI_MODEL` | Model name |
/// | `temperature` | `SHELLMIND_TEMPERATURE` | Sampling temperature |
/// | `max_tokens` | `SHELLMIND_MAX_TOKENS` | Completion token limit |
pub struct EnvConfigStore;

impl ConfigStore for EnvConfigStore {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(format!("SHELLMIND_{}", key.to_uppercase())).ok()
    }
}

/// In-memory store for hosts with their own persistence, and for tests.
#[derive(Debug, Default, Clone)]
pub struct StaticConfigStore {
    values: HashMap<String, String>,
}

impl StaticConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl ConfigStore for StaticConfigStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}
