use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    #[error("unsupported file format: {0}. Supported formats are .xlsx, .docx and .pdf")]
    UnsupportedFormat(String),

    #[error("failed to read spreadsheet: {0}")]
    Spreadsheet(String),

    #[error("workbook contains no sheets")]
    EmptyWorkbook,

    #[error("failed to read document: {0}")]
    Document(String),

    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("failed to write {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl QuizError {
    /// True when the error happened while producing the output file rather
    /// than while reading or parsing the source.
    pub fn is_save_failure(&self) -> bool {
        matches!(self, QuizError::Save { .. } | QuizError::Json(_))
    }
}
