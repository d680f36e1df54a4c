use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        completion_service::{ChatBackend, CompletionService, OpenAiChatBackend},
        pipeline_service::PipelineService,
    },
};

/// Shared, read-only state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub pipeline_service: Arc<PipelineService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let backend = Arc::new(OpenAiChatBackend::new(&config));
        Self::with_backend(config, backend)
    }

    pub fn with_backend(config: Config, backend: Arc<dyn ChatBackend>) -> Self {
        let completion_service =
            Arc::new(CompletionService::new(backend).with_timeout(config.llm_timeout()));
        let pipeline_service = Arc::new(PipelineService::new(completion_service));

        Self {
            pipeline_service,
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_is_shareable_across_workers() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AppState>();
    }

    #[test]
    fn test_new_keeps_config() {
        let state = AppState::new(Config::test_config());
        assert_eq!(state.config.llm_model, "test-model");
    }
}
