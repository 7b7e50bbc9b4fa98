use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::infrastructure::llm::{
    GROQ_BASE_URL, GROQ_DEFAULT_MODEL, OPENAI_BASE_URL, OPENAI_DEFAULT_MODEL,
};

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub providers: ProvidersSettings,
    pub generation: GenerationSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Upstream providers, attempted in the order Groq then OpenAI.
#[derive(Debug, Clone, Deserialize)]
pub struct ProvidersSettings {
    pub groq: ProviderSettings,
    pub openai: ProviderSettings,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderSettings {
    #[serde(default)]
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationSettings {
    pub timeout_secs: u64,
    /// When set, the session calls a remote `/api/ai` endpoint instead of the
    /// in-process orchestrator.
    #[serde(default)]
    pub remote_api_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub json_format: bool,
}

impl Settings {
    /// Layers defaults, `config/base`, `config/<environment>`, `APP__*`
    /// variables, then the conventional `GROQ_API_KEY` / `OPENAI_API_KEY`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("providers.groq.base_url", GROQ_BASE_URL)?
            .set_default("providers.groq.model", GROQ_DEFAULT_MODEL)?
            .set_default("providers.openai.base_url", OPENAI_BASE_URL)?
            .set_default("providers.openai.model", OPENAI_DEFAULT_MODEL)?
            .set_default("providers.request_timeout_secs", 15)?
            .set_default("generation.timeout_secs", 30)?
            .set_default("logging.level", "info")?
            .set_default("logging.json_format", environment == Environment::Prod)?
            .add_source(File::with_name("config/base").required(false))
            .add_source(File::with_name(&format!("config/{}", environment.as_str())).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("providers.groq.api_key", non_empty_env("GROQ_API_KEY"))?
            .set_override_option("providers.openai.api_key", non_empty_env("OPENAI_API_KEY"))?
            .build()?
            .try_deserialize()
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
