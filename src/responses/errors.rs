use crate::errors::ServerError;
use crate::templates::pages::error_page;
use astra::{Body, Response, ResponseBuilder};

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

pub fn status_for(err: &ServerError) -> u16 {
    match err {
        ServerError::NotFound => 404,
        ServerError::BadRequest(_) => 400,
        ServerError::Upstream(_) => 502,
        ServerError::Config(_) | ServerError::XlsxError(_) | ServerError::InternalError => 500,
    }
}

/// Convert a ServerError into a proper HTML error page
pub fn html_error_response(err: ServerError) -> Response {
    let status = status_for(&err);
    if status >= 500 {
        tracing::warn!(status, error = %err, "request failed");
    }

    let body = error_page(status, &err.to_string()).into_string();

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
