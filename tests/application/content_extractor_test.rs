use std::sync::Arc;

use lingochat::application::services::ContentExtractor;
use lingochat::domain::Upload;
use lingochat::infrastructure::text_processing::{PdfAdapter, PlainTextAdapter};

fn extractor() -> ContentExtractor {
    ContentExtractor::new(Arc::new(PdfAdapter::default()), Arc::new(PlainTextAdapter))
}

fn upload(filename: &str, data: &[u8]) -> Upload {
    Upload::new(
        filename.to_string(),
        "application/octet-stream".to_string(),
        data.to_vec(),
    )
}

#[tokio::test]
async fn given_text_file_when_extracting_then_returns_decoded_content() {
    let text = extractor().extract(&upload("notes.txt", b"Buy milk")).await;

    assert_eq!(text, "Buy milk");
}

#[tokio::test]
async fn given_text_file_with_invalid_utf8_when_extracting_then_does_not_fail() {
    let text = extractor()
        .extract(&upload("broken.TXT", &[b'o', b'k', 0xFF, 0xFE, b'!']))
        .await;

    assert!(text.starts_with("ok"));
    assert!(text.ends_with('!'));
}

#[tokio::test]
async fn given_corrupt_pdf_when_extracting_then_returns_diagnostic_text() {
    let text = extractor()
        .extract(&upload("corrupt.pdf", b"not a pdf at all"))
        .await;

    assert!(text.starts_with("Error extracting PDF text:"));
}

#[tokio::test]
async fn given_valid_pdf_when_extracting_then_returns_page_text() {
    let pdf_bytes = include_bytes!("../fixtures/sample.pdf");

    let text = extractor().extract(&upload("sample.pdf", pdf_bytes)).await;

    assert!(text.contains("Hello"));
}

#[tokio::test]
async fn given_docx_when_extracting_then_returns_placeholder_regardless_of_bytes() {
    let extractor = extractor();

    for data in [&b""[..], &b"PK\x03\x04"[..], &[0xFF; 16][..]] {
        assert_eq!(
            extractor.extract(&upload("report.docx", data)).await,
            "[DOCX file processing is not supported yet]"
        );
    }
}

#[tokio::test]
async fn given_images_when_extracting_then_returns_ocr_placeholder() {
    let extractor = extractor();

    for filename in ["photo.jpg", "photo.JPEG", "scan.png"] {
        assert_eq!(
            extractor.extract(&upload(filename, b"\x89PNG")).await,
            "[Image text extraction (OCR) is not supported yet]"
        );
    }
}

#[tokio::test]
async fn given_unlisted_extension_when_extracting_then_names_the_tag() {
    let text = extractor().extract(&upload("setup.exe", b"MZ")).await;

    assert_eq!(text, "[File type .exe is not supported]");
}

#[tokio::test]
async fn given_file_without_extension_when_extracting_then_reports_empty_tag() {
    let text = extractor().extract(&upload("README", b"read me")).await;

    assert_eq!(text, "[File type  is not supported]");
}
