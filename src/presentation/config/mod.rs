mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    GenerationSettings, LoggingSettings, ProviderSettings, ProvidersSettings, ServerSettings,
    Settings,
};
