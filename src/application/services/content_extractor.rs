use std::sync::Arc;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{FileKind, Upload};

/// Turns an upload into prompt text. Never fails: unsupported formats and
/// extraction errors come back as descriptive text in place of the content.
pub struct ContentExtractor {
    pdf_loader: Arc<dyn FileLoader>,
    text_loader: Arc<dyn FileLoader>,
}

impl ContentExtractor {
    pub fn new(pdf_loader: Arc<dyn FileLoader>, text_loader: Arc<dyn FileLoader>) -> Self {
        Self {
            pdf_loader,
            text_loader,
        }
    }

    #[tracing::instrument(
        skip(self, upload),
        fields(filename = %upload.filename, size_bytes = upload.size_bytes())
    )]
    pub async fn extract(&self, upload: &Upload) -> String {
        let outcome = match upload.kind() {
            FileKind::Pdf => self.pdf_loader.extract_text(upload).await,
            FileKind::Text => self.text_loader.extract_text(upload).await,
            FileKind::Docx => Err(FileLoaderError::DocxNotImplemented),
            FileKind::Image => Err(FileLoaderError::OcrNotImplemented),
            FileKind::Other(extension) => Err(FileLoaderError::UnsupportedFileType(extension)),
        };

        match outcome {
            Ok(text) => {
                tracing::debug!(chars = text.chars().count(), "Attachment text extracted");
                text
            }
            Err(e) => {
                tracing::warn!(error = %e, "Attachment replaced with placeholder text");
                e.to_string()
            }
        }
    }
}
