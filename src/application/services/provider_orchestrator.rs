use std::sync::Arc;

use crate::application::ports::{
    ApiReply, ChatMessage, GenerationReplyBody, LlmClient, LlmClientError, SamplingParams,
};
use crate::domain::{ComponentType, Message};

use super::code_extraction::extract_code;
use super::prompt::build_generation_prompt;

/// One upstream provider in the fallback chain.
pub struct ProviderDescriptor {
    pub name: String,
    pub api_key: Option<String>,
    pub client: Arc<dyn LlmClient>,
}

impl ProviderDescriptor {
    pub fn new(
        name: impl Into<String>,
        api_key: Option<String>,
        client: Arc<dyn LlmClient>,
    ) -> Self {
        Self {
            name: name.into(),
            api_key,
            client,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.credential().is_some()
    }

    fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCode {
    pub code: String,
    pub provider: String,
}

impl GeneratedCode {
    pub fn into_reply(self) -> ApiReply {
        ApiReply {
            status: 200,
            body: GenerationReplyBody::success(self.code, self.provider),
        }
    }
}

/// Tries each configured provider in list order, one at a time, and returns the
/// first usable markup.
pub struct ProviderOrchestrator {
    providers: Vec<ProviderDescriptor>,
}

impl ProviderOrchestrator {
    pub fn new(providers: Vec<ProviderDescriptor>) -> Self {
        Self { providers }
    }

    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn configured_providers(&self) -> Vec<&str> {
        self.providers
            .iter()
            .filter(|p| p.is_configured())
            .map(|p| p.name.as_str())
            .collect()
    }

    #[tracing::instrument(
        skip_all,
        fields(component_type = ?component_type, message_count = messages.len())
    )]
    pub async fn generate(
        &self,
        messages: &[Message],
        component_type: Option<ComponentType>,
    ) -> Result<GeneratedCode, OrchestrationError> {
        if messages.is_empty() {
            return Err(OrchestrationError::InvalidInput(
                "messages must be a non-empty list".to_string(),
            ));
        }
        let component_type = component_type.ok_or_else(|| {
            OrchestrationError::InvalidInput("component type is required".to_string())
        })?;

        let prompt = build_generation_prompt(component_type, messages);
        let mut outcome = OrchestrationError::NoCredentials;

        for provider in &self.providers {
            let Some(api_key) = provider.credential() else {
                tracing::debug!(provider = %provider.name, "Provider not configured, skipping");
                continue;
            };

            tracing::info!(provider = %provider.name, "Sending generation request");
            match attempt(provider, api_key, &prompt).await {
                Ok(code) => {
                    tracing::info!(provider = %provider.name, code_len = code.len(), "Generation succeeded");
                    return Ok(GeneratedCode {
                        code,
                        provider: provider.name.clone(),
                    });
                }
                Err(error) => {
                    tracing::warn!(provider = %provider.name, error = %error, "Provider failed");
                    outcome = if error.is_quota_exhausted() {
                        OrchestrationError::QuotaExceeded {
                            provider: provider.name.clone(),
                            source: error,
                        }
                    } else {
                        OrchestrationError::AllProvidersFailed(error)
                    };
                }
            }
        }

        tracing::error!(error = %outcome, "No provider produced a component");
        Err(outcome)
    }
}

async fn attempt(
    provider: &ProviderDescriptor,
    api_key: &str,
    prompt: &[ChatMessage],
) -> Result<String, LlmClientError> {
    let content = provider
        .client
        .complete(api_key, prompt, SamplingParams::COMPONENT_GENERATION)
        .await?;

    if content.trim().is_empty() {
        return Err(LlmClientError::InvalidResponse(
            "completion has no content".to_string(),
        ));
    }

    let code = extract_code(&content);
    if code.trim().is_empty() {
        return Err(LlmClientError::InvalidResponse(
            "completion contains an empty code block".to_string(),
        ));
    }

    Ok(code)
}

#[derive(Debug, thiserror::Error)]
pub enum OrchestrationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("no provider credentials configured")]
    NoCredentials,
    #[error("{provider} quota exceeded: {source}")]
    QuotaExceeded {
        provider: String,
        source: LlmClientError,
    },
    #[error("all providers failed: {0}")]
    AllProvidersFailed(LlmClientError),
}

const CONFIGURE_KEY_DETAILS: &str = "Please configure at least one valid API key.";

impl OrchestrationError {
    pub fn status_code(&self) -> u16 {
        match self {
            OrchestrationError::InvalidInput(_) => 400,
            OrchestrationError::QuotaExceeded { .. } => 429,
            OrchestrationError::NoCredentials | OrchestrationError::AllProvidersFailed(_) => 500,
        }
    }

    /// Caller-facing payload. Only short messages cross this boundary.
    pub fn reply_body(&self) -> GenerationReplyBody {
        match self {
            OrchestrationError::InvalidInput(reason) => GenerationReplyBody::failure(
                "Missing messages or component type",
                Some(reason.clone()),
                false,
            ),
            OrchestrationError::NoCredentials => GenerationReplyBody::failure(
                "No API key configured for any provider",
                Some(CONFIGURE_KEY_DETAILS.to_string()),
                true,
            ),
            OrchestrationError::QuotaExceeded { provider, .. } => GenerationReplyBody::failure(
                format!("API quota exceeded ({provider})"),
                Some(format!(
                    "You have exceeded your usage quota for the {provider} API."
                )),
                true,
            ),
            OrchestrationError::AllProvidersFailed(_) => GenerationReplyBody::failure(
                "All providers failed",
                Some(CONFIGURE_KEY_DETAILS.to_string()),
                true,
            ),
        }
    }

    pub fn to_reply(&self) -> ApiReply {
        ApiReply {
            status: self.status_code(),
            body: self.reply_body(),
        }
    }
}
