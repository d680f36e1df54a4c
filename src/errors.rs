use std::time::Duration;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use async_openai::error::OpenAIError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::ConfigError(_) => "CONFIG_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        log::warn!("Request failed [{}]: {}", self.error_code(), self);
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
        })
    }
}

impl From<actix_web::error::JsonPayloadError> for AppError {
    fn from(err: actix_web::error::JsonPayloadError) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Faults raised by a chat backend. These never reach HTTP callers; the
/// completion service turns them into a failed completion.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("LLM API error: {0}")]
    Api(#[from] OpenAIError),

    #[error("LLM response contained no choices")]
    NoChoices,

    #[error("LLM response choice had no text content")]
    MissingContent,

    #[error("LLM call timed out after {0:?}")]
    TimedOut(Duration),
}
