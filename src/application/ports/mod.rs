mod generation_api;
mod llm_client;
mod repository_error;
mod website_repository;

pub use generation_api::{
    ApiReply, GenerateComponentBody, GenerationApi, GenerationApiError, GenerationReplyBody,
};
pub use llm_client::{ChatMessage, LlmClient, LlmClientError, SamplingParams};
pub use repository_error::RepositoryError;
pub use website_repository::WebsiteRepository;
