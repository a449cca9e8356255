use atlassian_learning_mcp::discovery::{DiscoveryResult, SearchMode};
use atlassian_learning_mcp::export::{export, ExportFormat};

fn empty_result() -> DiscoveryResult {
    DiscoveryResult {
        mode: SearchMode::Vague,
        results: vec![],
        summary: "0 matches for mode VAGUE; resolved concepts: ; categories: ".to_string(),
        suggestions: vec![],
        resolved_keywords: vec![],
    }
}

#[test]
fn s6_pdf_without_pandoc_falls_back_to_plain_text_and_never_fails() {
    let result = empty_result();
    let outcome = export(&result, ExportFormat::Pdf);
    assert!(outcome.content.contains("DISCOVERY RESULTS") || !outcome.converted_externally);
}

#[test]
fn markdown_format_parses_common_aliases() {
    assert_eq!(ExportFormat::parse("markdown"), Some(ExportFormat::Markdown));
    assert_eq!(ExportFormat::parse("MD"), Some(ExportFormat::Markdown));
    assert_eq!(ExportFormat::parse("pdf"), Some(ExportFormat::Pdf));
    assert_eq!(ExportFormat::parse("bogus"), None);
}
