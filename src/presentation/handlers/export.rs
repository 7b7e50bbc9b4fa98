use axum::Json;
use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::application::services::render_document;
use crate::domain::Website;

#[derive(Deserialize)]
struct ExportRequest {
    website: Website,
}

#[derive(Serialize)]
pub struct ExportResponse {
    pub success: bool,
    pub html: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ExportErrorResponse {
    pub error: String,
}

/// `POST /api/save`: renders a posted website to a standalone document.
#[tracing::instrument(skip(body), fields(body_len = body.len()))]
pub async fn export_handler(body: Bytes) -> Response {
    match serde_json::from_slice::<ExportRequest>(&body) {
        Ok(request) => {
            let html = render_document(&request.website);
            tracing::info!(
                components = request.website.components.len(),
                html_len = html.len(),
                "Website exported"
            );
            (
                StatusCode::OK,
                Json(ExportResponse {
                    success: true,
                    html,
                    message: "Website exported successfully".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Website export failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ExportErrorResponse {
                    error: "Error while exporting the website".to_string(),
                }),
            )
                .into_response()
        }
    }
}
