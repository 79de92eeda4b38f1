//! Error types for the translation service
//!
//! Provides unified error handling using thiserror. The cache itself never
//! fails; these errors come from lookups, option validation and loading.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Translation Error Enum ==
/// Unified error type for translation lookups and service setup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslationError {
    /// No string exists at the requested key
    #[error("Translation not found for key: {0}")]
    NotFound(String),

    /// Translation options failed validation
    #[error("Invalid translation options: {0}")]
    InvalidOptions(String),

    /// Language code outside the supported set
    #[error("Unsupported language: {0}")]
    UnknownLanguage(String),

    /// Translation rows could not be read or parsed
    #[error("Translation source error: {0}")]
    Source(String),

    /// Invalid service configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for TranslationError {
    fn into_response(self) -> Response {
        let status = match &self {
            TranslationError::NotFound(_) => StatusCode::NOT_FOUND,
            TranslationError::InvalidOptions(_) => StatusCode::BAD_REQUEST,
            TranslationError::UnknownLanguage(_) => StatusCode::BAD_REQUEST,
            TranslationError::Source(_) => StatusCode::INTERNAL_SERVER_ERROR,
            TranslationError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the translation service.
pub type Result<T> = std::result::Result<T, TranslationError>;
