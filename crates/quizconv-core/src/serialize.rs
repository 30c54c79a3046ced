use std::path::{Path, PathBuf};

use crate::error::QuizError;
use crate::model::QuestionRecord;

/// Output location for a source file: same directory, `.json` extension.
pub fn output_path(input: &Path) -> PathBuf {
    input.with_extension("json")
}

/// Render records as a pretty-printed JSON array (2-space indent, non-ASCII
/// kept as-is).
pub fn to_json(records: &[QuestionRecord]) -> Result<String, QuizError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Parse a JSON document previously written by [`write_json`].
pub fn from_json(json: &str) -> Result<Vec<QuestionRecord>, QuizError> {
    Ok(serde_json::from_str(json)?)
}

/// Write records to `path` as UTF-8 JSON, replacing any existing file.
pub fn write_json(records: &[QuestionRecord], path: &Path) -> Result<(), QuizError> {
    let json = to_json(records)?;
    std::fs::write(path, json).map_err(|source| QuizError::Save {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), records = records.len(), "wrote json");
    Ok(())
}
