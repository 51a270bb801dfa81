// errors.rs
use crate::attom::ApiError;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, bad input) or downstream layers (records API, export).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Upstream Error: {0}")]
    Upstream(String),

    #[error("Spreadsheet Error: {0}")]
    XlsxError(String),

    #[error("Internal Server Error")]
    InternalError,
}

impl From<ApiError> for ServerError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::MissingApiKey => ServerError::Config(err.to_string()),
            other => ServerError::Upstream(other.to_string()),
        }
    }
}
