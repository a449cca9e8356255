use atlassian_learning_mcp::export::pandoc::{convert, ExternalFormat};
use std::io::Write;

/// Exercises the fallback path directly: these test environments have no
/// `pandoc` binary on PATH, so every `convert` call here degrades to the
/// plain-text rendering plus the manual-conversion hint.
#[test]
fn pdf_export_without_pandoc_falls_back_to_plain_text() {
    let mut fixture = tempfile::NamedTempFile::new().expect("create markdown fixture");
    writeln!(fixture, "# Sample\n\nSample body for export.").expect("write fixture");
    let markdown = std::fs::read_to_string(fixture.path()).expect("read fixture back");

    let outcome = convert(&markdown, "SAMPLE\nSample body for export.", &ExternalFormat::Pdf);

    assert!(!outcome.converted);
    assert!(outcome.message.contains("Falling back to plain text"));
    assert!(outcome.message.contains("Sample body for export."));
}

#[test]
fn docx_export_without_pandoc_falls_back_to_plain_text() {
    let outcome = convert("# Title", "TITLE", &ExternalFormat::Docx);
    assert!(!outcome.converted);
    assert!(outcome.message.contains("Install pandoc"));
}
