use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ComponentId, ComponentType};

pub const DEFAULT_WEBSITE_TITLE: &str = "My new website";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteComponent {
    pub id: ComponentId,
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    pub content: String,
    pub order: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WebsiteComponent {
    pub fn new(component_type: ComponentType, content: String, order: usize) -> Self {
        let now = Utc::now();
        Self {
            id: ComponentId::new(),
            component_type,
            content,
            order,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Website {
    pub id: String,
    pub title: String,
    pub components: Vec<WebsiteComponent>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Website {
    pub fn new(title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            title: title.into(),
            components: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn component(&self, id: ComponentId) -> Option<&WebsiteComponent> {
        self.components.iter().find(|c| c.id == id)
    }

    /// Order value that places a new component after every existing one.
    pub fn next_order(&self) -> usize {
        self.components
            .iter()
            .map(|c| c.order + 1)
            .max()
            .unwrap_or(0)
    }

    pub fn add_component(&mut self, component: WebsiteComponent) {
        self.components.push(component);
        self.touch();
    }

    /// Returns `false` when no component has the given id.
    pub fn update_component(&mut self, id: ComponentId, content: String) -> bool {
        let Some(component) = self.components.iter_mut().find(|c| c.id == id) else {
            return false;
        };
        component.content = content;
        component.updated_at = Utc::now();
        self.touch();
        true
    }

    /// Returns `false` when no component has the given id.
    pub fn remove_component(&mut self, id: ComponentId) -> bool {
        let before = self.components.len();
        self.components.retain(|c| c.id != id);
        let removed = self.components.len() != before;
        if removed {
            self.touch();
        }
        removed
    }

    /// Listed ids take their position as `order`. Components missing from the
    /// list keep their relative order after the listed ones.
    pub fn reorder_components(&mut self, component_ids: &[ComponentId]) {
        let listed = component_ids.len();
        let mut unlisted = 0;

        let mut current: Vec<&mut WebsiteComponent> = self.components.iter_mut().collect();
        current.sort_by_key(|c| c.order);
        for component in current {
            component.order = match component_ids.iter().position(|id| *id == component.id) {
                Some(index) => index,
                None => {
                    unlisted += 1;
                    listed + unlisted - 1
                }
            };
        }

        self.components.sort_by_key(|c| c.order);
        self.touch();
    }

    pub fn rename(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.touch();
    }

    pub fn sorted_components(&self) -> Vec<&WebsiteComponent> {
        let mut components: Vec<&WebsiteComponent> = self.components.iter().collect();
        components.sort_by_key(|c| c.order);
        components
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for Website {
    fn default() -> Self {
        Self::new(DEFAULT_WEBSITE_TITLE)
    }
}
