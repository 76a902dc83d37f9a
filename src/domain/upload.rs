use super::file_kind::{FileKind, extension_of};

/// A single file submitted alongside a chat message. Lives for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct Upload {
    pub filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl Upload {
    pub fn new(filename: String, content_type: String, data: Vec<u8>) -> Self {
        Self {
            filename,
            content_type,
            data,
        }
    }

    pub fn extension(&self) -> String {
        extension_of(&self.filename)
    }

    pub fn kind(&self) -> FileKind {
        FileKind::from_filename(&self.filename)
    }

    pub fn size_bytes(&self) -> u64 {
        self.data.len() as u64
    }
}
