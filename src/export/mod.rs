//! Cross-format exporter: serializes a [`DiscoveryResult`] to
//! Markdown or plain text, with optional PDF/DOCX conversion via an
//! external `pandoc` process, falling back to plain text when the
//! converter is absent.

pub mod markdown;
pub mod pandoc;
pub mod plain;

use crate::discovery::DiscoveryResult;
use pandoc::ExternalFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Markdown,
    Plain,
    Pdf,
    Docx,
}

impl ExportFormat {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "markdown" | "md" => Some(Self::Markdown),
            "text" | "plain" | "txt" => Some(Self::Plain),
            "pdf" => Some(Self::Pdf),
            "docx" | "word" => Some(Self::Docx),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExportOutcome {
    pub content: String,
    pub converted_externally: bool,
}

/// Renders `result` in `format`. PDF/DOCX never fail outward:
/// a missing/failing pandoc degrades to the plain-text rendering plus a
/// manual-conversion hint, always returning a usable [`ExportOutcome`].
#[must_use]
pub fn export(result: &DiscoveryResult, format: ExportFormat) -> ExportOutcome {
    match format {
        ExportFormat::Markdown => ExportOutcome {
            content: markdown::render(result),
            converted_externally: false,
        },
        ExportFormat::Plain => ExportOutcome {
            content: plain::render(result),
            converted_externally: false,
        },
        ExportFormat::Pdf | ExportFormat::Docx => {
            let md = markdown::render(result);
            let plain_text = plain::render(result);
            let external_format = if format == ExportFormat::Pdf {
                ExternalFormat::Pdf
            } else {
                ExternalFormat::Docx
            };
            let outcome = pandoc::convert(&md, &plain_text, &external_format);
            ExportOutcome {
                content: outcome.message,
                converted_externally: outcome.converted,
            }
        }
    }
}
