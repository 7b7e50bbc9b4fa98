use async_trait::async_trait;
use reqwest::Client;

use crate::application::ports::{
    ApiReply, GenerateComponentBody, GenerationApi, GenerationApiError, GenerationReplyBody,
};

/// Calls a remote `/api/ai` endpoint. The caller owns the deadline.
pub struct HttpGenerationApi {
    client: Client,
    endpoint: String,
}

impl HttpGenerationApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: format!("{}/api/ai", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl GenerationApi for HttpGenerationApi {
    async fn submit(&self, body: &GenerateComponentBody) -> Result<ApiReply, GenerationApiError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                // Failure text is classified by substring; the URL must not leak into it.
                let e = e.without_url();
                if e.is_timeout() {
                    GenerationApiError::Timeout(e.to_string())
                } else {
                    GenerationApiError::Network(e.to_string())
                }
            })?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| GenerationApiError::Network(e.without_url().to_string()))?;

        let body: GenerationReplyBody = serde_json::from_str(&text).map_err(|e| {
            GenerationApiError::InvalidResponse(format!("HTTP {}: {}", status, e))
        })?;

        Ok(ApiReply { status, body })
    }
}
