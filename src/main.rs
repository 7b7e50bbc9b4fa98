use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use pagecraft::application::ports::GenerationApi;
use pagecraft::application::services::{ProviderOrchestrator, ResilientGenerator, WebsiteSession};
use pagecraft::infrastructure::generation::{HttpGenerationApi, OrchestratorGenerationApi};
use pagecraft::infrastructure::llm::ProviderFactory;
use pagecraft::infrastructure::observability::{TracingConfig, init_tracing};
use pagecraft::infrastructure::persistence::InMemoryWebsiteRepository;
use pagecraft::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment)?;

    init_tracing(&TracingConfig::from_settings(&settings.logging, environment));

    let deadline = Duration::from_secs(settings.generation.timeout_secs);
    let orchestrator = Arc::new(ProviderOrchestrator::new(ProviderFactory::create(
        &settings.providers,
        deadline,
    )));

    let generation_api: Arc<dyn GenerationApi> = match &settings.generation.remote_api_url {
        Some(url) => {
            let api = HttpGenerationApi::new(url);
            tracing::info!(endpoint = %api.endpoint(), "Using remote generation endpoint");
            Arc::new(api)
        }
        None => Arc::new(OrchestratorGenerationApi::new(Arc::clone(&orchestrator))),
    };

    let generator = Arc::new(ResilientGenerator::with_timeout(generation_api, deadline));
    let repository = Arc::new(InMemoryWebsiteRepository::new());
    let session = Arc::new(WebsiteSession::new(generator, repository));

    let state = AppState {
        orchestrator,
        session,
    };
    let app = create_router(state);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        environment = %environment,
        "Server listening"
    );

    axum::serve(listener, app).await?;

    Ok(())
}
