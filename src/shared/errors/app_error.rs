use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    /// Transport failure, timeout or non-success status from the catalog provider
    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// A record was fetched but failed the classification check for the requested kind
    #[error("Classification mismatch: {0}")]
    ClassificationMismatch(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    /// Whether callers should read this error as "nothing there" rather than a fault
    pub fn is_absence(&self) -> bool {
        matches!(
            self,
            AppError::NotFound(_)
                | AppError::ClassificationMismatch(_)
                | AppError::ProviderUnavailable(_)
        )
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::ProviderUnavailable("Request timeout".to_string())
        } else if err.is_connect() {
            AppError::ProviderUnavailable("Failed to connect to catalog provider".to_string())
        } else if err.is_decode() {
            AppError::SerializationError(err.to_string())
        } else if let Some(status) = err.status() {
            match status.as_u16() {
                404 => AppError::NotFound("Catalog resource not found".to_string()),
                _ => AppError::ProviderUnavailable(format!("HTTP {}: {}", status, err)),
            }
        } else {
            AppError::ProviderUnavailable(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::InvalidInput(format!("Invalid number: {}", err))
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
