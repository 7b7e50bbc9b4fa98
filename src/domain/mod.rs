mod component_id;
mod component_type;
mod conversation;
mod conversation_id;
mod generation;
mod message;
mod message_id;
mod message_role;
mod website;

pub use component_id::ComponentId;
pub use component_type::ComponentType;
pub use conversation::Conversation;
pub use conversation_id::ConversationId;
pub use generation::{GenerationRequest, GenerationResult};
pub use message::Message;
pub use message_id::MessageId;
pub use message_role::MessageRole;
pub use website::{DEFAULT_WEBSITE_TITLE, Website, WebsiteComponent};
