use std::sync::Arc;
use std::time::Duration;

use crate::application::services::ProviderDescriptor;
use crate::presentation::config::{ProviderSettings, ProvidersSettings};

use super::OpenAiCompatibleClient;

pub const GROQ_PROVIDER: &str = "groq";
pub const OPENAI_PROVIDER: &str = "openai";

const CHAIN_LENGTH: u32 = 2;

pub struct ProviderFactory;

impl ProviderFactory {
    /// Provider chain in fixed priority order: Groq first, then OpenAI.
    /// `deadline` is the caller's budget for the whole chain.
    pub fn create(settings: &ProvidersSettings, deadline: Duration) -> Vec<ProviderDescriptor> {
        let timeout = Self::attempt_timeout(settings, deadline);
        vec![
            Self::descriptor(GROQ_PROVIDER, &settings.groq, timeout),
            Self::descriptor(OPENAI_PROVIDER, &settings.openai, timeout),
        ]
    }

    /// The configured per-request timeout, capped so that every provider in
    /// the chain fits inside `deadline`.
    pub fn attempt_timeout(settings: &ProvidersSettings, deadline: Duration) -> Duration {
        Duration::from_secs(settings.request_timeout_secs).min(deadline / CHAIN_LENGTH)
    }

    fn descriptor(name: &str, settings: &ProviderSettings, timeout: Duration) -> ProviderDescriptor {
        let client = OpenAiCompatibleClient::new(&settings.base_url, &settings.model, timeout);
        let provider = ProviderDescriptor::new(name, settings.api_key.clone(), Arc::new(client));

        tracing::info!(
            provider = %provider.name,
            model = %settings.model,
            timeout = ?timeout,
            configured = provider.is_configured(),
            "Provider registered"
        );

        provider
    }
}
