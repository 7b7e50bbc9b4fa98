mod code_extraction;
mod failure_category;
mod prompt;
mod provider_orchestrator;
mod resilient_generator;
mod site_exporter;
mod website_session;

pub use code_extraction::extract_code;
pub use failure_category::{FailureCategory, TIMEOUT_DETAILS};
pub use prompt::{build_generation_prompt, system_instruction};
pub use provider_orchestrator::{
    GeneratedCode, OrchestrationError, ProviderDescriptor, ProviderOrchestrator,
};
pub use resilient_generator::{DEFAULT_GENERATION_TIMEOUT, ResilientGenerator};
pub use site_exporter::{TAILWIND_RUNTIME_URL, render_document};
pub use website_session::{SessionError, Submission, WebsiteSession};
