//! PDF/DOCX export via an external `pandoc` process: write
//! Markdown to a temp file, invoke `pandoc <in> -o <out> --from=markdown
//! --standalone`, and report success or gracefully fall back to plain
//! text. This path never raises — every failure mode degrades to a
//! successful [`PandocOutcome`] carrying the fallback text.

use std::path::PathBuf;
use std::process::Command;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExternalFormat {
    Pdf,
    Docx,
}

impl ExternalFormat {
    fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PandocOutcome {
    pub message: String,
    pub converted: bool,
}

/// A fresh temp directory under the OS temp root, named
/// `learning-export-*`. Removed by [`TempExportDir::cleanup`],
/// best-effort and never raising.
struct TempExportDir {
    path: PathBuf,
}

impl TempExportDir {
    fn create() -> std::io::Result<Self> {
        let path = std::env::temp_dir().join(format!("learning-export-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&path)?;
        Ok(Self { path })
    }

    fn cleanup(&self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

/// Converts `markdown` to `format` via pandoc, returning a success message
/// with output path and byte count on exit code 0, or the plain-text
/// rendering plus a manual-conversion hint on any failure (missing
/// converter, nonzero exit, missing output).
pub fn convert(markdown: &str, plain_text_fallback: &str, format: &ExternalFormat) -> PandocOutcome {
    let dir = match TempExportDir::create() {
        Ok(dir) => dir,
        Err(e) => {
            return fallback(plain_text_fallback, &format!("could not create temp dir: {e}"));
        }
    };

    let input_path = dir.path.join("discovery-export.md");
    let output_path = dir.path.join(format!("discovery-export.{}", format.extension()));

    if let Err(e) = std::fs::write(&input_path, markdown) {
        dir.cleanup();
        return fallback(plain_text_fallback, &format!("could not write export file: {e}"));
    }

    let result = Command::new("pandoc")
        .arg(&input_path)
        .arg("-o")
        .arg(&output_path)
        .arg("--from=markdown")
        .arg("--standalone")
        .output();

    let outcome = match result {
        Ok(output) if output.status.success() && output_path.exists() => {
            let byte_count = std::fs::metadata(&output_path).map(|m| m.len()).unwrap_or(0);
            PandocOutcome {
                message: format!(
                    "Converted to {} at {} ({byte_count} bytes).",
                    format.extension().to_ascii_uppercase(),
                    output_path.display(),
                ),
                converted: true,
            }
        }
        Ok(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            fallback(plain_text_fallback, &format!("pandoc exited with failure: {stderr}"))
        }
        Err(_) => fallback(
            plain_text_fallback,
            "Pandoc is not installed or not on PATH",
        ),
    };

    dir.cleanup();
    outcome
}

fn fallback(plain_text: &str, reason: &str) -> PandocOutcome {
    PandocOutcome {
        message: format!(
            "{reason}. Falling back to plain text. Install pandoc to enable PDF/DOCX export.\n\n{plain_text}"
        ),
        converted: false,
    }
}
