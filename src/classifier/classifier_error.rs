use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("Model request failed: {0}")]
    Request(String),

    #[error("Unexpected model response: {0}")]
    Response(String),

    #[error("Model unavailable: {0}")]
    Unavailable(String),
}
