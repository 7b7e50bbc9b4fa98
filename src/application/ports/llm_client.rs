use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::Message;

/// Role-tagged turn as sent upstream. Carries no ids or timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }
}

impl From<&Message> for ChatMessage {
    fn from(message: &Message) -> Self {
        Self {
            role: message.role.as_str().to_string(),
            content: message.content.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl SamplingParams {
    /// Fixed parameters for component generation.
    pub const COMPONENT_GENERATION: SamplingParams = SamplingParams {
        temperature: 0.7,
        max_tokens: 2000,
    };
}

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Returns the content of the first completion choice, possibly empty.
    async fn complete(
        &self,
        api_key: &str,
        messages: &[ChatMessage],
        params: SamplingParams,
    ) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited (HTTP 429): {0}")]
    RateLimited(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl LlmClientError {
    /// True for HTTP 429 and for bodies reporting an exhausted usage quota.
    pub fn is_quota_exhausted(&self) -> bool {
        match self {
            LlmClientError::RateLimited(_) => true,
            LlmClientError::ApiRequestFailed(message) => {
                message.contains("429") || message.contains("exceeded your current quota")
            }
            LlmClientError::InvalidResponse(_) => false,
        }
    }
}
