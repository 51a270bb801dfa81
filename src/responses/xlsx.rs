// responses/xlsx.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

const XLSX_CONTENT_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Keeps the download name to characters that are safe in a header value.
fn safe_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Serve an in-memory workbook as a file download
pub fn xlsx_response(buffer: Vec<u8>, filename: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", XLSX_CONTENT_TYPE)
        .header(
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", safe_filename(filename)),
        )
        .body(Body::from(buffer))
        .map_err(|_| ServerError::InternalError)
}
