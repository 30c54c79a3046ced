use std::fmt;
use std::path::Path;

use quizconv_core::error::QuizError;
use quizconv_core::Conversion;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Info,
    Warning,
    Error,
}

/// A user-facing message box, rendered as text by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub kind: DialogKind,
    pub title: &'static str,
    pub message: String,
}

impl Dialog {
    fn new(kind: DialogKind, title: &'static str, message: impl Into<String>) -> Self {
        Dialog {
            kind,
            title,
            message: message.into(),
        }
    }

    pub fn missing_file() -> Self {
        Dialog::new(DialogKind::Warning, "Warning", "Select a file first!")
    }

    pub fn file_not_found(path: &Path) -> Self {
        Dialog::new(
            DialogKind::Warning,
            "Warning",
            format!("File not found:\n{}", path.display()),
        )
    }

    pub fn unsupported_format() -> Self {
        Dialog::new(DialogKind::Error, "Error", "Unsupported file format!")
    }

    pub fn parse_failed(err: &QuizError) -> Self {
        Dialog::new(DialogKind::Error, "Error", format!("Failed to parse file:\n{err}"))
    }

    pub fn save_failed(err: &QuizError) -> Self {
        Dialog::new(DialogKind::Error, "Error", format!("Failed to save JSON:\n{err}"))
    }

    pub fn success(conversion: &Conversion) -> Self {
        Dialog::new(
            DialogKind::Info,
            "Success",
            format!("JSON file generated:\n{}", conversion.output_path.display()),
        )
    }

    pub fn error(message: impl Into<String>) -> Self {
        Dialog::new(DialogKind::Error, "Error", message)
    }

    /// Classify a failure into unsupported format, save failure or parse
    /// failure.
    pub fn from_error(err: &QuizError) -> Self {
        match err {
            QuizError::UnsupportedFormat(_) => Dialog::unsupported_format(),
            e if e.is_save_failure() => Dialog::save_failed(e),
            e => Dialog::parse_failed(e),
        }
    }

    /// Map a conversion outcome onto the dialog the user sees.
    pub fn from_outcome(outcome: &Result<Conversion, QuizError>) -> Self {
        match outcome {
            Ok(conversion) => Dialog::success(conversion),
            Err(e) => Dialog::from_error(e),
        }
    }
}

impl fmt::Display for Dialog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.kind {
            DialogKind::Info => "info",
            DialogKind::Warning => "warning",
            DialogKind::Error => "error",
        };
        writeln!(f, "[{tag}] {}", self.title)?;
        for line in self.message.lines() {
            writeln!(f, "  {line}")?;
        }
        Ok(())
    }
}
