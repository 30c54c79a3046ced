use quizconv_core::extraction::pdftotext::PdftotextExtractor;
use std::path::Path;

use crate::dialog::Dialog;
use crate::output;

pub fn run(input_file: &Path, output_format: &str) -> Result<(), Dialog> {
    let extractor = PdftotextExtractor::new();
    let records =
        quizconv_core::parse_file(input_file, &extractor).map_err(|e| Dialog::from_error(&e))?;

    match output_format {
        "json" => output::json::print(&records).map_err(|e| Dialog::from_error(&e))?,
        _ => output::table::print(&records),
    }

    Ok(())
}
