pub mod docx;
pub mod pdftotext;
pub mod xlsx;

use crate::error::QuizError;

/// Content extracted from a single page of a PDF.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub page_number: usize,
    pub lines: Vec<String>,
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one PageContent per page.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, QuizError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Trim every line and drop the ones left blank.
pub fn prepare_lines<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .map(|line| line.as_ref().trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

/// Flatten pages in page order into one prepared line sequence.
pub fn flatten_pages(pages: &[PageContent]) -> Vec<String> {
    prepare_lines(pages.iter().flat_map(|p| p.lines.iter()))
}
