use crate::application::ports::ChatMessage;
use crate::domain::{ComponentType, Message};

/// System instruction placed ahead of every conversation sent upstream.
pub fn system_instruction(component_type: ComponentType) -> String {
    format!(
        "You are an expert web developer specialised in building website components with Tailwind CSS.\n\
         The user is asking you to generate a component of type \"{component_type}\" for their website.\n\
         \n\
         Generate only the HTML markup with Tailwind CSS classes for this component.\n\
         Do not include React, JavaScript or script tags.\n\
         \n\
         The code must be clean, responsive and modern.\n\
         \n\
         Reply only with the HTML and Tailwind CSS code, without any explanation."
    )
}

/// The system instruction followed by the conversation in its original order.
pub fn build_generation_prompt(
    component_type: ComponentType,
    messages: &[Message],
) -> Vec<ChatMessage> {
    std::iter::once(ChatMessage::system(system_instruction(component_type)))
        .chain(messages.iter().map(ChatMessage::from))
        .collect()
}
