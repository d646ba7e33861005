//! Resume text extraction from uploaded PDFs.
//!
//! `pdf-extract` does the work; text comes back page by page in document order.
//! The library is synchronous and may panic on hostile input, so extraction runs
//! on the blocking pool and a panic becomes `ExtractionError::Aborted`.

use bytes::Bytes;
use thiserror::Error;
use tracing::info;

#[cfg(test)]
pub(crate) mod fixtures;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Could not read PDF: {0}")]
    Pdf(String),

    #[error("Extraction task aborted: {0}")]
    Aborted(String),
}

/// True when an upload looks like a PDF by file name or declared content type.
pub fn is_pdf_upload(file_name: Option<&str>, content_type: Option<&str>) -> bool {
    let by_name = file_name
        .map(|name| name.to_ascii_lowercase().ends_with(".pdf"))
        .unwrap_or(false);
    let by_type = content_type
        .map(|ct| ct.eq_ignore_ascii_case("application/pdf"))
        .unwrap_or(false);
    by_name || by_type
}

/// Extracts the concatenated page text of a PDF held in memory.
pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractionError::Pdf(e.to_string()))
}

/// Runs [`extract_text`] off the async runtime.
pub async fn extract_resume_text(bytes: Bytes) -> Result<String, ExtractionError> {
    let size = bytes.len();
    let text = tokio::task::spawn_blocking(move || extract_text(&bytes))
        .await
        .map_err(|e| ExtractionError::Aborted(e.to_string()))??;

    info!(bytes = size, chars = text.len(), "Extracted resume text");
    Ok(text)
}
