use async_trait::async_trait;

use crate::domain::Upload;

#[async_trait]
pub trait FileLoader: Send + Sync {
    async fn extract_text(&self, upload: &Upload) -> Result<String, FileLoaderError>;
}

/// Every variant renders as text that can stand in for the attachment content.
#[derive(Debug, thiserror::Error)]
pub enum FileLoaderError {
    #[error("Error extracting PDF text: {0}")]
    PdfExtraction(String),
    #[error("[DOCX file processing is not supported yet]")]
    DocxNotImplemented,
    #[error("[Image text extraction (OCR) is not supported yet]")]
    OcrNotImplemented,
    #[error("[File type {0} is not supported]")]
    UnsupportedFileType(String),
}
