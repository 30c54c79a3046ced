use crate::extraction::xlsx::Cell;
use crate::model::{OptionLabel, Options, QuestionRecord};

const QUESTION_COL: usize = 0;
const FIRST_OPTION_COL: usize = 1;
const ANSWER_COL: usize = 5;

/// Turn spreadsheet rows into question records.
///
/// Row 0 is the header and is skipped; every other row yields exactly one
/// record. Columns are positional: question, A, B, C, D, answer. Columns
/// beyond the sheet's width count as empty cells, so a narrow sheet still
/// parses.
pub fn parse_rows(rows: &[Vec<Cell>]) -> Vec<QuestionRecord> {
    rows.iter().skip(1).map(|row| parse_row(row)).collect()
}

fn parse_row(row: &[Cell]) -> QuestionRecord {
    let question = row
        .get(QUESTION_COL)
        .filter(|c| c.is_truthy())
        .map(Cell::to_text)
        .unwrap_or_default();

    let mut options = Options::new();
    for (offset, label) in OptionLabel::ALL.into_iter().enumerate() {
        if let Some(cell) = row.get(FIRST_OPTION_COL + offset).filter(|c| c.is_present()) {
            options.insert(label, cell.to_text());
        }
    }

    let answer = row
        .get(ANSWER_COL)
        .filter(|c| c.is_truthy())
        .map(Cell::to_text)
        .unwrap_or_default();

    QuestionRecord::new(question, options, answer)
}
