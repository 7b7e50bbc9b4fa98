use serde::Serialize;

use super::{ComponentId, ComponentType, Message};

/// One user submission to the generation pipeline.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub messages: Vec<Message>,
    pub component_type: Option<ComponentType>,
    /// Set in edit mode: the generated markup replaces this component.
    pub replace_component: Option<ComponentId>,
}

impl GenerationRequest {
    pub fn new(messages: Vec<Message>, component_type: ComponentType) -> Self {
        Self {
            messages,
            component_type: Some(component_type),
            replace_component: None,
        }
    }

    pub fn replacing(mut self, component_id: ComponentId) -> Self {
        self.replace_component = Some(component_id);
        self
    }
}

/// Outcome of a generation. Both variants always carry renderable markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum GenerationResult {
    Success {
        code: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        provider: Option<String>,
    },
    Degraded {
        code: String,
        reason: String,
    },
}

impl GenerationResult {
    pub fn code(&self) -> &str {
        match self {
            GenerationResult::Success { code, .. } | GenerationResult::Degraded { code, .. } => {
                code
            }
        }
    }

    pub fn provider(&self) -> Option<&str> {
        match self {
            GenerationResult::Success { provider, .. } => provider.as_deref(),
            GenerationResult::Degraded { .. } => None,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, GenerationResult::Degraded { .. })
    }
}
