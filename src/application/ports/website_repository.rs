use async_trait::async_trait;

use crate::domain::{
    ComponentId, ComponentType, Conversation, ConversationId, Website, WebsiteComponent,
};

use super::RepositoryError;

/// Owner of the session's website and conversations.
#[async_trait]
pub trait WebsiteRepository: Send + Sync {
    async fn website(&self) -> Result<Website, RepositoryError>;

    async fn set_title(&self, title: &str) -> Result<(), RepositoryError>;

    /// Appends a component after every existing one. The order is assigned
    /// under the same write as the insertion.
    async fn add_component(
        &self,
        component_type: ComponentType,
        content: String,
    ) -> Result<WebsiteComponent, RepositoryError>;

    async fn update_component(
        &self,
        id: ComponentId,
        content: &str,
    ) -> Result<WebsiteComponent, RepositoryError>;

    async fn remove_component(&self, id: ComponentId) -> Result<(), RepositoryError>;

    async fn reorder_components(&self, ids: &[ComponentId]) -> Result<Website, RepositoryError>;

    async fn save_conversation(&self, conversation: &Conversation) -> Result<(), RepositoryError>;

    async fn get_conversation(
        &self,
        id: ConversationId,
    ) -> Result<Option<Conversation>, RepositoryError>;
}
