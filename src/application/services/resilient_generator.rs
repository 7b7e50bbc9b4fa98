use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{ApiReply, GenerateComponentBody, GenerationApi, GenerationApiError};
use crate::application::templates::{DEMO_SEPARATOR, demo_component, error_banner, quota_banner};
use crate::domain::{ComponentType, GenerationRequest, GenerationResult};

use super::failure_category::FailureCategory;

pub const DEFAULT_GENERATION_TIMEOUT: Duration = Duration::from_secs(30);

/// Calls the generation endpoint under a deadline and turns every outcome into
/// renderable markup. Expected failures never escape as errors: they become
/// [`GenerationResult::Degraded`] with a banner followed by a demo component.
pub struct ResilientGenerator {
    api: Arc<dyn GenerationApi>,
    timeout: Duration,
}

impl ResilientGenerator {
    pub fn new(api: Arc<dyn GenerationApi>) -> Self {
        Self::with_timeout(api, DEFAULT_GENERATION_TIMEOUT)
    }

    pub fn with_timeout(api: Arc<dyn GenerationApi>, timeout: Duration) -> Self {
        Self { api, timeout }
    }

    #[tracing::instrument(
        skip_all,
        fields(
            component_type = ?request.component_type,
            message_count = request.messages.len(),
            replacing = request.replace_component.is_some()
        )
    )]
    pub async fn generate(&self, request: &GenerationRequest) -> GenerationResult {
        if request.messages.is_empty() {
            tracing::warn!("No messages to send, using demo component");
            return GenerationResult::Degraded {
                code: demo_component(request.component_type.unwrap_or(ComponentType::Section)),
                reason: "No messages to send".to_string(),
            };
        }
        let Some(component_type) = request.component_type else {
            tracing::warn!("Component type not specified, using demo component");
            return GenerationResult::Degraded {
                code: demo_component(ComponentType::Section),
                reason: "Component type not specified".to_string(),
            };
        };

        let body = GenerateComponentBody {
            messages: request.messages.clone(),
            component_type,
        };

        let failure = match tokio::time::timeout(self.timeout, self.api.submit(&body)).await {
            Err(_) => {
                tracing::warn!(timeout = ?self.timeout, "Generation request cancelled");
                GenerationApiError::Timeout("request aborted, deadline elapsed".to_string())
                    .to_string()
            }
            Ok(Err(error)) => error.to_string(),
            Ok(Ok(reply)) => {
                tracing::debug!(status = reply.status, "Generation endpoint replied");
                match interpret(reply, component_type) {
                    Ok(result) => return result,
                    Err(message) => message,
                }
            }
        };

        tracing::error!(error = %failure, "Generation failed, using demo component");
        degrade(component_type, &failure)
    }
}

/// `Err` carries a failure message that still needs classification.
fn interpret(reply: ApiReply, component_type: ComponentType) -> Result<GenerationResult, String> {
    let success = reply.is_success();
    let ApiReply { status, body } = reply;

    if !success {
        if body.use_demo || status == 429 {
            let message = body.error.as_deref().unwrap_or("API error");
            return Ok(quota_fallback(component_type, message, body.details.as_deref()));
        }
        return Err(body.error.unwrap_or_else(|| format!("HTTP error: {status}")));
    }

    if let Some(error) = body.error {
        if body.use_demo {
            return Ok(quota_fallback(component_type, &error, body.details.as_deref()));
        }
        return Err(error);
    }

    match body.code.filter(|code| !code.trim().is_empty()) {
        Some(code) => Ok(GenerationResult::Success {
            code,
            provider: body.provider,
        }),
        None => Err("The API response does not contain any code".to_string()),
    }
}

fn quota_fallback(
    component_type: ComponentType,
    message: &str,
    details: Option<&str>,
) -> GenerationResult {
    GenerationResult::Degraded {
        code: format!(
            "{}{}{}",
            quota_banner(message, details),
            DEMO_SEPARATOR,
            demo_component(component_type)
        ),
        reason: message.to_string(),
    }
}

fn degrade(component_type: ComponentType, message: &str) -> GenerationResult {
    let category = FailureCategory::classify(message);
    let headline = category.headline();
    let details = category.technical_details(message);

    let banner = match category {
        FailureCategory::QuotaExceeded => quota_banner(headline, Some(&details)),
        _ => error_banner(headline, &details),
    };

    GenerationResult::Degraded {
        code: format!("{}{}{}", banner, DEMO_SEPARATOR, demo_component(component_type)),
        reason: headline.to_string(),
    }
}
