mod pdf_adapter;
mod plain_text_adapter;

pub use pdf_adapter::PdfAdapter;
pub use plain_text_adapter::PlainTextAdapter;
