use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{ComponentType, Message};

/// Request body of the generation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateComponentBody {
    pub messages: Vec<Message>,
    pub component_type: ComponentType,
}

/// Response body of the generation endpoint. Success replies fill `code` and
/// `provider`; failure replies fill `error`, `details` and `use_demo`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationReplyBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub use_demo: bool,
}

impl GenerationReplyBody {
    pub fn success(code: impl Into<String>, provider: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            provider: Some(provider.into()),
            ..Self::default()
        }
    }

    pub fn failure(error: impl Into<String>, details: Option<String>, use_demo: bool) -> Self {
        Self {
            error: Some(error.into()),
            details,
            use_demo,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiReply {
    pub status: u16,
    pub body: GenerationReplyBody,
}

impl ApiReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport to the generation endpoint, remote or in-process.
#[async_trait]
pub trait GenerationApi: Send + Sync {
    async fn submit(&self, body: &GenerateComponentBody) -> Result<ApiReply, GenerationApiError>;
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationApiError {
    #[error("network error: failed to fetch generation endpoint: {0}")]
    Network(String),
    #[error("request timeout: {0}")]
    Timeout(String),
    #[error("invalid response from generation endpoint: {0}")]
    InvalidResponse(String),
}
