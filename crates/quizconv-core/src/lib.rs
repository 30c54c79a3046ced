pub mod error;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod serialize;

use std::path::{Path, PathBuf};

use error::QuizError;
use extraction::{docx, flatten_pages, prepare_lines, xlsx, PdfExtractor};
use model::{QuestionRecord, SourceFormat};

/// Outcome of a successful conversion.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub format: SourceFormat,
    pub output_path: PathBuf,
    pub record_count: usize,
}

/// Parse a quiz document into question records.
///
/// The parser is chosen by the file extension alone. Unsupported extensions
/// are rejected before the file is opened.
pub fn parse_file(
    path: &Path,
    pdf_extractor: &dyn PdfExtractor,
) -> Result<Vec<QuestionRecord>, QuizError> {
    let format = SourceFormat::from_path(path)?;
    let bytes = std::fs::read(path)?;
    parse_bytes(format, &bytes, pdf_extractor)
}

/// Parse already loaded document bytes of a known format.
pub fn parse_bytes(
    format: SourceFormat,
    bytes: &[u8],
    pdf_extractor: &dyn PdfExtractor,
) -> Result<Vec<QuestionRecord>, QuizError> {
    let records = match format {
        SourceFormat::Xlsx => {
            let rows = xlsx::read_first_sheet(bytes)?;
            parsing::parse_rows(&rows)
        }
        SourceFormat::Docx => {
            let lines = prepare_lines(docx::extract_paragraphs(bytes)?);
            parsing::parse_lines(&lines)
        }
        SourceFormat::Pdf => {
            tracing::debug!(backend = pdf_extractor.backend_name(), "extracting pdf text");
            let pages = pdf_extractor.extract_pages(bytes)?;
            parsing::parse_lines(&flatten_pages(&pages))
        }
    };

    tracing::debug!(%format, records = records.len(), "parsed document");
    Ok(records)
}

/// Parse `path` and write the records next to it as `<stem>.json`.
///
/// Nothing is written unless parsing succeeds.
pub fn convert(path: &Path, pdf_extractor: &dyn PdfExtractor) -> Result<Conversion, QuizError> {
    let format = SourceFormat::from_path(path)?;
    let records = parse_file(path, pdf_extractor)?;

    let output_path = serialize::output_path(path);
    serialize::write_json(&records, &output_path)?;

    tracing::info!(
        input = %path.display(),
        output = %output_path.display(),
        records = records.len(),
        "converted quiz document"
    );

    Ok(Conversion {
        format,
        output_path,
        record_count: records.len(),
    })
}
