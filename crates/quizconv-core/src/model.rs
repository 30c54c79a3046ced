use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use crate::error::QuizError;

/// Label of one answer choice. Ordering follows the letters, so a
/// `BTreeMap` keyed by label iterates A→D.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OptionLabel {
    A,
    B,
    C,
    D,
}

impl OptionLabel {
    pub const ALL: [OptionLabel; 4] = [OptionLabel::A, OptionLabel::B, OptionLabel::C, OptionLabel::D];

    pub fn as_str(&self) -> &'static str {
        match self {
            OptionLabel::A => "A",
            OptionLabel::B => "B",
            OptionLabel::C => "C",
            OptionLabel::D => "D",
        }
    }
}

impl fmt::Display for OptionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type Options = BTreeMap<OptionLabel, String>;

/// One parsed quiz item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub question: String,
    pub options: Options,
    pub answer: String,
}

impl QuestionRecord {
    /// Build a record, clearing the answer when no options were found.
    ///
    /// A question without options is treated as non-multiple-choice and
    /// never carries an answer, even if the source had one.
    pub fn new(question: String, options: Options, answer: String) -> Self {
        let answer = if options.is_empty() {
            String::new()
        } else {
            answer
        };
        QuestionRecord {
            question,
            options,
            answer,
        }
    }

    pub fn is_multiple_choice(&self) -> bool {
        !self.options.is_empty()
    }
}

/// Input document kinds, chosen purely by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Xlsx,
    Docx,
    Pdf,
}

impl SourceFormat {
    pub fn from_extension(ext: &str) -> Option<SourceFormat> {
        match ext.to_lowercase().as_str() {
            "xlsx" => Some(SourceFormat::Xlsx),
            "docx" => Some(SourceFormat::Docx),
            "pdf" => Some(SourceFormat::Pdf),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Result<SourceFormat, QuizError> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(SourceFormat::from_extension)
            .ok_or_else(|| {
                let shown = path
                    .extension()
                    .map(|ext| format!(".{}", ext.to_string_lossy()))
                    .unwrap_or_else(|| path.display().to_string());
                QuizError::UnsupportedFormat(shown)
            })
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::Xlsx => write!(f, "xlsx"),
            SourceFormat::Docx => write!(f, "docx"),
            SourceFormat::Pdf => write!(f, "pdf"),
        }
    }
}
