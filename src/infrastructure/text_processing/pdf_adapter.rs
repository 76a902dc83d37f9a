use std::io::Write;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{FileKind, Upload};

pub struct PdfAdapter {
    timeout: Duration,
}

impl Default for PdfAdapter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TIMEOUT)
    }
}

impl PdfAdapter {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Concatenates the text of every page in document order.
    fn extract_pages(path: &Path) -> Result<(usize, String), FileLoaderError> {
        let mut doc = PdfDocument::open(path)
            .map_err(|e| FileLoaderError::PdfExtraction(format!("failed to parse PDF: {e}")))?;

        let page_count = doc.page_count().map_err(|e| {
            FileLoaderError::PdfExtraction(format!("failed to read page count: {e}"))
        })?;

        let mut text = String::new();
        for page_index in 0..page_count {
            let page_text = doc.extract_text(page_index).map_err(|e| {
                FileLoaderError::PdfExtraction(format!("page {}: {e}", page_index + 1))
            })?;
            text.push_str(&page_text);
        }

        Ok((page_count, text))
    }
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(skip(self, upload), fields(filename = %upload.filename))]
    async fn extract_text(&self, upload: &Upload) -> Result<String, FileLoaderError> {
        if upload.kind() != FileKind::Pdf {
            return Err(FileLoaderError::UnsupportedFileType(upload.extension()));
        }

        let mut temp_file = tempfile::NamedTempFile::new().map_err(|e| {
            FileLoaderError::PdfExtraction(format!("failed to create temp file: {e}"))
        })?;

        temp_file.write_all(&upload.data).map_err(|e| {
            FileLoaderError::PdfExtraction(format!("failed to write temp file: {e}"))
        })?;

        let temp_path = temp_file.path().to_path_buf();

        let (page_count, text) = tokio::time::timeout(
            self.timeout,
            tokio::task::spawn_blocking(move || Self::extract_pages(&temp_path)),
        )
        .await
        .map_err(|_| FileLoaderError::PdfExtraction("extraction timed out".to_string()))?
        .map_err(|e| FileLoaderError::PdfExtraction(format!("task join error: {e}")))??;

        tracing::info!(page_count, chars = text.len(), "PDF text extraction complete");

        if text.trim().is_empty() {
            tracing::warn!("PDF contains no extractable text");
        }

        Ok(text)
    }
}
