#[cfg(test)]
pub mod fixtures {
    use std::{collections::VecDeque, sync::Mutex};

    use async_trait::async_trait;

    use crate::{errors::CompletionError, services::completion_service::ChatBackend};

    /// Backend that replays scripted replies in order and records every
    /// prompt it receives. Once the script runs out it answers with an
    /// empty choice list.
    pub struct ScriptedBackend {
        replies: Mutex<VecDeque<Result<String, CompletionError>>>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedBackend {
        pub fn new(replies: Vec<Result<String, CompletionError>>) -> Self {
            Self {
                replies: Mutex::new(replies.into()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ChatBackend for ScriptedBackend {
        async fn chat(&self, prompt: &str) -> Result<String, CompletionError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(CompletionError::NoChoices))
        }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents a client error (4xx)
    pub fn assert_client_error_status(status: StatusCode) {
        assert!(
            status.is_client_error(),
            "Expected client error status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::{errors::CompletionError, services::completion_service::ChatBackend};

    #[actix_web::test]
    async fn test_scripted_backend_replays_in_order() {
        let backend = ScriptedBackend::new(vec![Ok("first".to_string())]);

        assert_eq!(backend.chat("a").await.unwrap(), "first");
        assert!(matches!(
            backend.chat("b").await,
            Err(CompletionError::NoChoices)
        ));
        assert_eq!(backend.prompts(), vec!["a", "b"]);
    }
}
