use std::sync::Arc;

use crate::application::ports::WebsiteRepository;
use crate::application::services::{ProviderOrchestrator, WebsiteSession};

pub struct AppState<R>
where
    R: WebsiteRepository + ?Sized,
{
    pub orchestrator: Arc<ProviderOrchestrator>,
    pub session: Arc<WebsiteSession<R>>,
}

impl<R> Clone for AppState<R>
where
    R: WebsiteRepository + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            orchestrator: Arc::clone(&self.orchestrator),
            session: Arc::clone(&self.session),
        }
    }
}
