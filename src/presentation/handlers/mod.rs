mod export;
mod generate;
mod health;
mod website;

pub use export::export_handler;
pub use generate::generate_component_handler;
pub use health::health_handler;
pub use website::{
    edit_component_handler, export_website_handler, get_conversation_handler, get_website_handler,
    remove_component_handler, rename_website_handler, reorder_components_handler,
    submit_component_handler,
};
