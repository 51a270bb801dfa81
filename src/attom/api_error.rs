use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("API Key is not configured. Set ATTOM_API_KEY.")]
    MissingApiKey,

    #[error("API Error: {status}. {body}")]
    Http { status: u16, body: String },

    #[error("A network error occurred: {0}")]
    Network(String),

    #[error("Could not decode API response: {0}")]
    Decode(String),
}
