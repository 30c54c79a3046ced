use crate::error::QuizError;
use crate::extraction::{PageContent, PdfExtractor};
use std::io::Write;
use std::process::Command;

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// Runs in reading-order mode (no `-layout`) so each text line of the page
/// comes out as one line of output.
pub struct PdftotextExtractor;

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for PdftotextExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, QuizError> {
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| QuizError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| QuizError::Extraction(e.to_string()))?;

        let output = Command::new("pdftotext")
            .arg("-enc")
            .arg("UTF-8")
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    QuizError::PdftotextNotFound
                } else {
                    QuizError::Extraction(format!("pdftotext failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(QuizError::PdftotextFailed { code, stderr });
        }

        let text = String::from_utf8_lossy(&output.stdout);
        let pages = split_pages(&text);
        tracing::debug!(pages = pages.len(), "pdftotext extracted pages");
        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

/// Split pdftotext output into pages (form feed \x0c separates pages).
///
/// pdftotext terminates the last page with a form feed too, so a trailing
/// empty chunk is not a page.
fn split_pages(text: &str) -> Vec<PageContent> {
    let mut chunks: Vec<&str> = text.split('\x0c').collect();
    if chunks.len() > 1 && chunks.last().is_some_and(|c| c.trim().is_empty()) {
        chunks.pop();
    }

    chunks
        .into_iter()
        .enumerate()
        .map(|(i, page_text)| PageContent {
            page_number: i + 1,
            lines: page_text.lines().map(|l| l.to_string()).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_pages_on_form_feed() {
        let pages = split_pages("Q1\nA. one\n\x0cB. two\n答案: A\n\x0c");
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].page_number, 1);
        assert_eq!(pages[0].lines, vec!["Q1", "A. one"]);
        assert_eq!(pages[1].page_number, 2);
        assert_eq!(pages[1].lines, vec!["B. two", "答案: A"]);
    }

    #[test]
    fn test_split_pages_without_form_feed() {
        let pages = split_pages("only line");
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].lines, vec!["only line"]);
    }

    #[test]
    fn test_split_pages_blank_page_kept_in_order() {
        let pages = split_pages("Q1\n\x0c\x0cQ2\n\x0c");
        assert_eq!(pages.len(), 3);
        assert!(pages[1].lines.is_empty());
        assert_eq!(pages[2].lines, vec!["Q2"]);
    }
}
