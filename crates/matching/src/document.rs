//! Uploaded documents and their conversion to text.

use thiserror::Error;

/// A document as received from the transport: declared name plus raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    name: String,
    bytes: Vec<u8>,
}

impl Document {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn is_pdf(&self) -> bool {
        self.name.to_ascii_lowercase().ends_with(".pdf")
    }
}

#[derive(Debug, Error)]
pub enum DocumentReadError {
    #[error("document is not valid UTF-8 text: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("failed to extract PDF text: {0}")]
    Pdf(String),

    #[error("unsupported document format: {0}")]
    Unsupported(String),
}

/// Converts a document into plain text for requirement extraction.
pub trait TextExtractor: Send + Sync {
    fn extract_text(&self, document: &Document) -> Result<String, DocumentReadError>;
}

/// Decodes by declared extension: `.pdf` through the PDF backend (when the
/// `pdf` feature is enabled), everything else as strict UTF-8.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTextExtractor;

impl TextExtractor for DefaultTextExtractor {
    fn extract_text(&self, document: &Document) -> Result<String, DocumentReadError> {
        if document.is_pdf() {
            return extract_pdf(document.bytes());
        }
        Ok(String::from_utf8(document.bytes().to_vec())?)
    }
}

#[cfg(feature = "pdf")]
fn extract_pdf(bytes: &[u8]) -> Result<String, DocumentReadError> {
    contain_panic(|| pdf_extract::extract_text_from_mem(bytes))
}

/// Runs a PDF backend call, turning both its errors and its panics into
/// `DocumentReadError::Pdf`. The backend panics on some malformed inputs.
#[cfg(feature = "pdf")]
fn contain_panic<F, E>(f: F) -> Result<String, DocumentReadError>
where
    F: FnOnce() -> Result<String, E> + std::panic::UnwindSafe,
    E: std::fmt::Display,
{
    match std::panic::catch_unwind(f) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(DocumentReadError::Pdf(e.to_string())),
        Err(panic) => {
            let detail = panic
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| panic.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "malformed document".to_string());
            tracing::warn!(detail = %detail, "PDF backend panicked");
            Err(DocumentReadError::Pdf(format!("parser aborted: {detail}")))
        }
    }
}

#[cfg(not(feature = "pdf"))]
fn extract_pdf(_bytes: &[u8]) -> Result<String, DocumentReadError> {
    Err(DocumentReadError::Unsupported(
        "PDF support is not enabled in this build".to_string(),
    ))
}
