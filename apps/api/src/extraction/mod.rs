//! Document text extraction: turns an uploaded PDF or DOCX into plain text.
//!
//! Parsing is CPU-bound and the PDF library may panic on malformed input, so
//! request handlers go through `extract_text_blocking`, which runs the parse on
//! tokio's blocking pool.

pub mod docx;
pub mod pdf;

use bytes::Bytes;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

pub use docx::extract_docx_text;
pub use pdf::extract_pdf_text;

const PDF_MIME: &str = "application/pdf";
const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("unsupported document type: {0}")]
    UnsupportedType(String),

    #[error("could not read PDF: {0}")]
    Pdf(String),

    #[error("could not read DOCX: {0}")]
    Docx(String),

    #[error("extraction task failed: {0}")]
    Worker(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Resolves the document kind from the upload's declared MIME type,
    /// falling back to the file extension when the MIME type is missing or generic.
    pub fn detect(
        content_type: Option<&str>,
        file_name: Option<&str>,
    ) -> Result<Self, ExtractionError> {
        let mime = content_type
            .map(|c| c.split(';').next().unwrap_or(c).trim().to_ascii_lowercase());

        match mime.as_deref() {
            Some(PDF_MIME) => return Ok(DocumentKind::Pdf),
            Some(DOCX_MIME) => return Ok(DocumentKind::Docx),
            _ => {}
        }

        let extension = file_name
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("pdf") => Ok(DocumentKind::Pdf),
            Some("docx") => Ok(DocumentKind::Docx),
            _ => Err(ExtractionError::UnsupportedType(
                mime.or(extension)
                    .unwrap_or_else(|| "unknown".to_string()),
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::Docx => "docx",
        }
    }
}

/// Extracts plain text from a document of the given kind.
pub fn extract_text(kind: DocumentKind, bytes: &[u8]) -> Result<String, ExtractionError> {
    let text = match kind {
        DocumentKind::Pdf => extract_pdf_text(bytes)?,
        DocumentKind::Docx => extract_docx_text(bytes)?,
    };
    debug!(
        kind = kind.as_str(),
        input_bytes = bytes.len(),
        text_chars = text.chars().count(),
        "Document text extracted"
    );
    Ok(text)
}

/// Async wrapper around `extract_text` that keeps parsing off the runtime threads.
pub async fn extract_text_blocking(
    kind: DocumentKind,
    bytes: Bytes,
) -> Result<String, ExtractionError> {
    tokio::task::spawn_blocking(move || extract_text(kind, &bytes))
        .await
        .map_err(|e| ExtractionError::Worker(e.to_string()))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_by_mime_type() {
        assert_eq!(
            DocumentKind::detect(Some("application/pdf"), None).unwrap(),
            DocumentKind::Pdf
        );
        assert_eq!(
            DocumentKind::detect(Some(DOCX_MIME), Some("resume.bin")).unwrap(),
            DocumentKind::Docx
        );
    }

    #[test]
    fn test_mime_parameters_are_ignored() {
        assert_eq!(
            DocumentKind::detect(Some("Application/PDF; charset=binary"), None).unwrap(),
            DocumentKind::Pdf
        );
    }

    #[test]
    fn test_generic_mime_falls_back_to_extension() {
        assert_eq!(
            DocumentKind::detect(Some("application/octet-stream"), Some("CV.DOCX")).unwrap(),
            DocumentKind::Docx
        );
        assert_eq!(
            DocumentKind::detect(None, Some("jane.doe.resume.pdf")).unwrap(),
            DocumentKind::Pdf
        );
    }

    #[test]
    fn test_unsupported_types_are_rejected() {
        let err = DocumentKind::detect(Some("text/plain"), Some("resume.txt")).unwrap_err();
        assert!(matches!(err, ExtractionError::UnsupportedType(ref t) if t == "text/plain"));

        let err = DocumentKind::detect(None, Some("resume.doc")).unwrap_err();
        assert!(matches!(err, ExtractionError::UnsupportedType(ref t) if t == "doc"));

        assert!(DocumentKind::detect(None, None).is_err());
    }

    #[tokio::test]
    async fn test_blocking_extraction_reports_corrupt_pdf() {
        let result =
            extract_text_blocking(DocumentKind::Pdf, Bytes::from_static(b"not a pdf")).await;
        assert!(matches!(result, Err(ExtractionError::Pdf(_))));
    }
}
