use std::sync::Arc;

use crate::application::ports::{RepositoryError, WebsiteRepository};
use crate::domain::{
    ComponentId, ComponentType, Conversation, ConversationId, GenerationRequest,
    GenerationResult, Message, Website, WebsiteComponent,
};

use super::resilient_generator::ResilientGenerator;
use super::site_exporter::render_document;

/// Applies generation results to the session website: a conversation that
/// already owns a component edits it, any other submission creates one.
pub struct WebsiteSession<R: WebsiteRepository + ?Sized> {
    generator: Arc<ResilientGenerator>,
    repository: Arc<R>,
}

#[derive(Debug, Clone)]
pub struct Submission {
    pub conversation_id: ConversationId,
    pub component_id: ComponentId,
    pub edited: bool,
    pub result: GenerationResult,
    pub assistant_message: Message,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("prompt is empty")]
    EmptyPrompt,
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
}

impl<R: WebsiteRepository + ?Sized> WebsiteSession<R> {
    pub fn new(generator: Arc<ResilientGenerator>, repository: Arc<R>) -> Self {
        Self {
            generator,
            repository,
        }
    }

    #[tracing::instrument(skip(self, prompt))]
    pub async fn submit(
        &self,
        conversation_id: Option<ConversationId>,
        prompt: &str,
        component_type: ComponentType,
    ) -> Result<Submission, SessionError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(SessionError::EmptyPrompt);
        }

        let existing = match conversation_id {
            Some(id) => self.repository.get_conversation(id).await?,
            None => None,
        };
        let mut conversation = match existing {
            Some(conversation) if conversation.is_editing() => conversation,
            _ => Conversation::new(),
        };

        // An edit keeps the stored component's type, whatever the caller asked for.
        let target = match conversation.component_id {
            Some(id) => self.repository.website().await?.component(id).cloned(),
            None => None,
        };
        let component_type = target
            .as_ref()
            .map_or(component_type, |component| component.component_type);

        conversation.messages.push(Message::user(prompt));

        let mut request = GenerationRequest::new(conversation.messages.clone(), component_type);
        if let Some(component) = &target {
            request = request.replacing(component.id);
        }

        let result = self.generator.generate(&request).await;
        let assistant_message = Message::assistant(assistant_reply(&result));
        conversation.messages.push(assistant_message.clone());

        let code = result.code().to_string();
        let component_id = match request.replace_component {
            Some(id) => match self.repository.update_component(id, &code).await {
                Ok(component) => component.id,
                Err(RepositoryError::NotFound(_)) => {
                    tracing::warn!(component_id = %id, "Edited component no longer exists, adding a new one");
                    self.repository.add_component(component_type, code).await?.id
                }
                Err(e) => return Err(e.into()),
            },
            None => self.repository.add_component(component_type, code).await?.id,
        };
        let edited = request.replace_component == Some(component_id);

        conversation.component_id = Some(component_id);
        self.repository.save_conversation(&conversation).await?;

        tracing::info!(
            component_id = %component_id,
            edited,
            degraded = result.is_degraded(),
            "Submission applied"
        );

        Ok(Submission {
            conversation_id: conversation.id,
            component_id,
            edited,
            result,
            assistant_message,
        })
    }

    pub async fn website(&self) -> Result<Website, SessionError> {
        Ok(self.repository.website().await?)
    }

    pub async fn conversation(
        &self,
        id: ConversationId,
    ) -> Result<Option<Conversation>, SessionError> {
        Ok(self.repository.get_conversation(id).await?)
    }

    pub async fn rename(&self, title: &str) -> Result<(), SessionError> {
        Ok(self.repository.set_title(title.trim()).await?)
    }

    pub async fn edit_component(
        &self,
        id: ComponentId,
        content: &str,
    ) -> Result<WebsiteComponent, SessionError> {
        Ok(self.repository.update_component(id, content).await?)
    }

    pub async fn remove_component(&self, id: ComponentId) -> Result<(), SessionError> {
        Ok(self.repository.remove_component(id).await?)
    }

    pub async fn reorder(&self, ids: &[ComponentId]) -> Result<Website, SessionError> {
        Ok(self.repository.reorder_components(ids).await?)
    }

    pub async fn export_html(&self) -> Result<String, SessionError> {
        let website = self.repository.website().await?;
        Ok(render_document(&website))
    }
}

fn assistant_reply(result: &GenerationResult) -> String {
    match result {
        GenerationResult::Degraded { .. } => "I ran into a problem with the API, so I generated a \
             demo component. You can edit it as needed."
            .to_string(),
        GenerationResult::Success {
            provider: Some(provider),
            ..
        } => format!(
            "I generated the requested component using {provider}. You can preview it below."
        ),
        GenerationResult::Success { provider: None, .. } => {
            "I generated the requested component. You can preview it below.".to_string()
        }
    }
}
