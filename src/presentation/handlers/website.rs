use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::ports::{RepositoryError, WebsiteRepository};
use crate::application::services::SessionError;
use crate::domain::{
    ComponentId, ComponentType, Conversation, ConversationId, GenerationResult, Message,
    WebsiteComponent,
};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitComponentRequest {
    #[serde(default)]
    pub conversation_id: Option<Uuid>,
    pub prompt: String,
    /// Unknown labels become `custom`; a missing label means `section`.
    #[serde(default)]
    pub component_type: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitComponentResponse {
    pub conversation_id: ConversationId,
    pub component_id: ComponentId,
    pub edited: bool,
    pub result: GenerationResult,
    pub assistant_message: Message,
}

#[derive(Deserialize)]
pub struct EditComponentRequest {
    pub content: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderRequest {
    pub component_ids: Vec<Uuid>,
}

#[derive(Deserialize)]
pub struct RenameRequest {
    pub title: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_response(error: SessionError) -> Response {
    let status = match &error {
        SessionError::EmptyPrompt => StatusCode::BAD_REQUEST,
        SessionError::Repository(RepositoryError::NotFound(_)) => StatusCode::NOT_FOUND,
        SessionError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() {
        tracing::error!(error = %error, "Session operation failed");
    } else {
        tracing::warn!(error = %error, "Session request rejected");
    }
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
        .into_response()
}

pub async fn get_website_handler<R>(State(state): State<AppState<R>>) -> Response
where
    R: WebsiteRepository + ?Sized + 'static,
{
    match state.session.website().await {
        Ok(website) => (StatusCode::OK, Json(website)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn rename_website_handler<R>(
    State(state): State<AppState<R>>,
    Json(request): Json<RenameRequest>,
) -> Response
where
    R: WebsiteRepository + ?Sized + 'static,
{
    match state.session.rename(&request.title).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}

#[tracing::instrument(skip(state, request))]
pub async fn submit_component_handler<R>(
    State(state): State<AppState<R>>,
    Json(request): Json<SubmitComponentRequest>,
) -> Response
where
    R: WebsiteRepository + ?Sized + 'static,
{
    tracing::debug!(prompt = %sanitize_prompt(&request.prompt), "Submitting component prompt");

    let component_type = request
        .component_type
        .as_deref()
        .map(ComponentType::from_label_or_custom)
        .unwrap_or(ComponentType::Section);
    let conversation_id = request.conversation_id.map(ConversationId::from_uuid);

    match state
        .session
        .submit(conversation_id, &request.prompt, component_type)
        .await
    {
        Ok(submission) => (
            StatusCode::OK,
            Json(SubmitComponentResponse {
                conversation_id: submission.conversation_id,
                component_id: submission.component_id,
                edited: submission.edited,
                result: submission.result,
                assistant_message: submission.assistant_message,
            }),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

/// Chat transcript of one conversation, including the component it edits.
pub async fn get_conversation_handler<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<Uuid>,
) -> Response
where
    R: WebsiteRepository + ?Sized + 'static,
{
    match state
        .session
        .conversation(ConversationId::from_uuid(id))
        .await
    {
        Ok(Some(conversation)) => {
            (StatusCode::OK, Json::<Conversation>(conversation)).into_response()
        }
        Ok(None) => error_response(SessionError::Repository(RepositoryError::NotFound(
            format!("conversation {id}"),
        ))),
        Err(e) => error_response(e),
    }
}

pub async fn edit_component_handler<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<Uuid>,
    Json(request): Json<EditComponentRequest>,
) -> Response
where
    R: WebsiteRepository + ?Sized + 'static,
{
    match state
        .session
        .edit_component(ComponentId::from_uuid(id), &request.content)
        .await
    {
        Ok(component) => (StatusCode::OK, Json::<WebsiteComponent>(component)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn remove_component_handler<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<Uuid>,
) -> Response
where
    R: WebsiteRepository + ?Sized + 'static,
{
    match state
        .session
        .remove_component(ComponentId::from_uuid(id))
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn reorder_components_handler<R>(
    State(state): State<AppState<R>>,
    Json(request): Json<ReorderRequest>,
) -> Response
where
    R: WebsiteRepository + ?Sized + 'static,
{
    let ids: Vec<ComponentId> = request
        .component_ids
        .into_iter()
        .map(ComponentId::from_uuid)
        .collect();

    match state.session.reorder(&ids).await {
        Ok(website) => (StatusCode::OK, Json(website)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn export_website_handler<R>(State(state): State<AppState<R>>) -> Response
where
    R: WebsiteRepository + ?Sized + 'static,
{
    match state.session.export_html().await {
        Ok(html) => Html(html).into_response(),
        Err(e) => error_response(e),
    }
}
