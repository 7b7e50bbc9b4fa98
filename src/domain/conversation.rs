use serde::{Deserialize, Serialize};

use super::{ComponentId, ConversationId, Message};

/// Chat transcript that produced (or is editing) a website component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: ConversationId,
    pub messages: Vec<Message>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_id: Option<ComponentId>,
}

impl Conversation {
    pub fn new() -> Self {
        Self {
            id: ConversationId::new(),
            messages: Vec::new(),
            component_id: None,
        }
    }

    /// A conversation bound to a component edits it instead of creating a new one.
    pub fn is_editing(&self) -> bool {
        self.component_id.is_some()
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}
