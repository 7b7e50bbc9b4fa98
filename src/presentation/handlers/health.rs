use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::WebsiteRepository;
use crate::presentation::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub providers: Vec<String>,
    pub configured_providers: Vec<String>,
}

pub async fn health_handler<R>(State(state): State<AppState<R>>) -> impl IntoResponse
where
    R: WebsiteRepository + ?Sized + 'static,
{
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            providers: owned(state.orchestrator.provider_names()),
            configured_providers: owned(state.orchestrator.configured_providers()),
        }),
    )
}

fn owned(names: Vec<&str>) -> Vec<String> {
    names.into_iter().map(String::from).collect()
}
