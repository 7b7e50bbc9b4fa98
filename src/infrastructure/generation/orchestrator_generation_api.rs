use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{ApiReply, GenerateComponentBody, GenerationApi, GenerationApiError};
use crate::application::services::ProviderOrchestrator;

/// In-process transport: same status and payload contract as `POST /api/ai`
/// without the HTTP hop.
pub struct OrchestratorGenerationApi {
    orchestrator: Arc<ProviderOrchestrator>,
}

impl OrchestratorGenerationApi {
    pub fn new(orchestrator: Arc<ProviderOrchestrator>) -> Self {
        Self { orchestrator }
    }
}

#[async_trait]
impl GenerationApi for OrchestratorGenerationApi {
    async fn submit(&self, body: &GenerateComponentBody) -> Result<ApiReply, GenerationApiError> {
        let reply = match self
            .orchestrator
            .generate(&body.messages, Some(body.component_type))
            .await
        {
            Ok(generated) => generated.into_reply(),
            Err(error) => error.to_reply(),
        };
        Ok(reply)
    }
}
