use std::path::Path;

/// Returns the lowercased extension of `filename` including the leading dot,
/// or an empty string when there is none.
pub fn extension_of(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FileKind {
    Pdf,
    Docx,
    Text,
    Image,
    Other(String),
}

impl FileKind {
    pub fn from_extension(extension: &str) -> Self {
        match extension {
            ".pdf" => Self::Pdf,
            ".docx" => Self::Docx,
            ".txt" => Self::Text,
            ".jpg" | ".jpeg" | ".png" => Self::Image,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn from_filename(filename: &str) -> Self {
        Self::from_extension(&extension_of(filename))
    }
}
