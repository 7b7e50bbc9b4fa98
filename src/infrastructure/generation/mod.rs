mod http_generation_api;
mod orchestrator_generation_api;

pub use http_generation_api::HttpGenerationApi;
pub use orchestrator_generation_api::OrchestratorGenerationApi;
