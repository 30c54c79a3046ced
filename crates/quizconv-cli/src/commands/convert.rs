use quizconv_core::extraction::pdftotext::PdftotextExtractor;
use std::path::Path;

use crate::dialog::Dialog;

pub fn run(input_file: &Path) -> Result<(), Dialog> {
    let extractor = PdftotextExtractor::new();
    let outcome = quizconv_core::convert(input_file, &extractor);
    let dialog = Dialog::from_outcome(&outcome);

    match outcome {
        Ok(conversion) => {
            print!("{dialog}");
            eprintln!("  {} question(s) written", conversion.record_count);
            Ok(())
        }
        Err(_) => Err(dialog),
    }
}
