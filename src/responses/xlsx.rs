use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Serves workbook bytes as a download named `filename`. `X-Export-Rows`
/// carries the number of data rows in the sheet.
pub fn xlsx_response(buffer: Vec<u8>, filename: &str, rows: usize) -> ResultResp {
    tracing::debug!(filename, rows, bytes = buffer.len(), "sending export");
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", XLSX_MIME)
        .header("Content-Length", buffer.len())
        .header("X-Export-Rows", rows)
        .header(
            "Content-Disposition",
            format!("attachment; filename=\"{filename}\""),
        )
        .body(Body::from(buffer))
        .map_err(|e| ServerError::XlsxError(format!("building download response: {e}")))
}
