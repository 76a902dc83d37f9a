use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{FileKind, Upload};

/// Decodes UTF-8, replacing invalid sequences instead of failing.
pub struct PlainTextAdapter;

#[async_trait]
impl FileLoader for PlainTextAdapter {
    async fn extract_text(&self, upload: &Upload) -> Result<String, FileLoaderError> {
        if upload.kind() != FileKind::Text {
            return Err(FileLoaderError::UnsupportedFileType(upload.extension()));
        }

        Ok(String::from_utf8_lossy(&upload.data).into_owned())
    }
}
