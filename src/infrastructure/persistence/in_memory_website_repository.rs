use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{RepositoryError, WebsiteRepository};
use crate::domain::{
    ComponentId, ComponentType, Conversation, ConversationId, Website, WebsiteComponent,
};

#[derive(Default)]
struct SessionState {
    website: Website,
    conversations: HashMap<ConversationId, Conversation>,
}

/// Session storage living for the lifetime of the process.
#[derive(Default)]
pub struct InMemoryWebsiteRepository {
    state: RwLock<SessionState>,
}

impl InMemoryWebsiteRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn component_not_found(id: ComponentId) -> RepositoryError {
    RepositoryError::NotFound(format!("component {}", id))
}

#[async_trait]
impl WebsiteRepository for InMemoryWebsiteRepository {
    async fn website(&self) -> Result<Website, RepositoryError> {
        Ok(self.state.read().await.website.clone())
    }

    async fn set_title(&self, title: &str) -> Result<(), RepositoryError> {
        self.state.write().await.website.rename(title);
        Ok(())
    }

    async fn add_component(
        &self,
        component_type: ComponentType,
        content: String,
    ) -> Result<WebsiteComponent, RepositoryError> {
        let mut state = self.state.write().await;
        let order = state.website.next_order();
        let component = WebsiteComponent::new(component_type, content, order);
        state.website.add_component(component.clone());
        Ok(component)
    }

    async fn update_component(
        &self,
        id: ComponentId,
        content: &str,
    ) -> Result<WebsiteComponent, RepositoryError> {
        let mut state = self.state.write().await;
        if !state.website.update_component(id, content.to_string()) {
            return Err(component_not_found(id));
        }
        state
            .website
            .component(id)
            .cloned()
            .ok_or_else(|| component_not_found(id))
    }

    async fn remove_component(&self, id: ComponentId) -> Result<(), RepositoryError> {
        let mut state = self.state.write().await;
        if !state.website.remove_component(id) {
            return Err(component_not_found(id));
        }
        for conversation in state.conversations.values_mut() {
            if conversation.component_id == Some(id) {
                conversation.component_id = None;
            }
        }
        Ok(())
    }

    async fn reorder_components(&self, ids: &[ComponentId]) -> Result<Website, RepositoryError> {
        let mut state = self.state.write().await;
        state.website.reorder_components(ids);
        Ok(state.website.clone())
    }


    async fn save_conversation(&self, conversation: &Conversation) -> Result<(), RepositoryError> {
        self.state
            .write()
            .await
            .conversations
            .insert(conversation.id, conversation.clone());
        Ok(())
    }

    async fn get_conversation(
        &self,
        id: ConversationId,
    ) -> Result<Option<Conversation>, RepositoryError> {
        Ok(self.state.read().await.conversations.get(&id).cloned())
    }
}
