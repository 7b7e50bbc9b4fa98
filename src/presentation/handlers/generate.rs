use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::Value;

use crate::application::ports::{ApiReply, GenerationReplyBody, WebsiteRepository};
use crate::domain::{ComponentType, Message, MessageRole};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

/// `POST /api/ai`: runs the provider chain for `{messages, componentType}`.
#[tracing::instrument(skip(state, body), fields(body_len = body.len()))]
pub async fn generate_component_handler<R>(
    State(state): State<AppState<R>>,
    body: Bytes,
) -> Response
where
    R: WebsiteRepository + ?Sized + 'static,
{
    let (messages, component_type) = match parse_body(&body) {
        Ok(parsed) => parsed,
        Err(reason) => {
            tracing::warn!(reason = %reason, "Rejected generation request");
            return reply_response(ApiReply {
                status: 400,
                body: GenerationReplyBody::failure(reason, None, false),
            });
        }
    };

    if let Some(prompt) = messages.iter().rev().find(|m| m.role == MessageRole::User) {
        tracing::debug!(prompt = %sanitize_prompt(&prompt.content), "Processing generation request");
    }

    let reply = match state.orchestrator.generate(&messages, component_type).await {
        Ok(generated) => generated.into_reply(),
        Err(error) => error.to_reply(),
    };

    reply_response(reply)
}

/// Checks the JSON shape only; emptiness and presence rules belong to the
/// orchestrator.
fn parse_body(body: &[u8]) -> Result<(Vec<Message>, Option<ComponentType>), String> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|_| "Invalid request: unable to parse JSON".to_string())?;

    let messages = value
        .get("messages")
        .filter(|m| m.is_array())
        .cloned()
        .ok_or_else(|| "Missing messages or component type".to_string())?;
    let messages: Vec<Message> =
        serde_json::from_value(messages).map_err(|e| format!("Invalid messages: {}", e))?;

    let component_type = match value.get("componentType") {
        None | Some(Value::Null) => None,
        Some(Value::String(label)) if label.trim().is_empty() => None,
        Some(Value::String(label)) => Some(label.parse::<ComponentType>()?),
        Some(_) => return Err("componentType must be a string".to_string()),
    };

    Ok((messages, component_type))
}

fn reply_response(reply: ApiReply) -> Response {
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(reply.body)).into_response()
}
