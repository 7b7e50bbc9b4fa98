mod openai_compatible_client;
mod provider_factory;

pub use openai_compatible_client::{
    GROQ_BASE_URL, GROQ_DEFAULT_MODEL, OPENAI_BASE_URL, OPENAI_DEFAULT_MODEL,
    OpenAiCompatibleClient,
};
pub use provider_factory::{GROQ_PROVIDER, OPENAI_PROVIDER, ProviderFactory};
