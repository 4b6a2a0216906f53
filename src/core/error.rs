use crate::services::AiError;
use actix_web::http::StatusCode;
use thiserror::Error;

/// Errors that can escape the food search pipeline
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("AI service error: {0}")]
    AiService(#[from] AiError),

    #[error("Result failed schema validation: {0}")]
    SchemaViolation(String),
}

impl SearchError {
    /// Short machine-readable code used in error payloads
    pub fn code(&self) -> &'static str {
        match self {
            SearchError::InvalidRequest(_) => "invalid_request",
            SearchError::AiService(_) => "ai_service_unavailable",
            SearchError::SchemaViolation(_) => "schema_violation",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            SearchError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            // Retryable: the model backend failed, not the request
            SearchError::AiService(_) => StatusCode::SERVICE_UNAVAILABLE,
            SearchError::SchemaViolation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, SearchError::AiService(_))
    }
}
