use std::fmt;
use std::io::Cursor;

use calamine::{Data, ExcelDateTime, Reader, Xlsx};

use crate::error::QuizError;

/// A spreadsheet cell value, detached from the workbook reader.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Dates, durations and error values, already rendered as text.
    /// Dates use `YYYY-MM-DD HH:MM:SS`.
    Other(String),
}

impl Cell {
    /// Any cell holding a value, even an empty string or zero.
    pub fn is_present(&self) -> bool {
        !matches!(self, Cell::Empty)
    }

    /// Present and not an empty string, zero or `false`.
    pub fn is_truthy(&self) -> bool {
        match self {
            Cell::Empty => false,
            Cell::Text(s) => !s.is_empty(),
            Cell::Int(i) => *i != 0,
            Cell::Float(f) => *f != 0.0,
            Cell::Bool(b) => *b,
            Cell::Other(_) => true,
        }
    }

    /// Trimmed text of the cell.
    pub fn to_text(&self) -> String {
        self.to_string().trim().to_string()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(s) | Cell::Other(s) => f.write_str(s),
            Cell::Int(i) => write!(f, "{i}"),
            // Whole numbers come back from the workbook as floats; print them
            // the way they were typed.
            Cell::Float(v) if v.fract() == 0.0 && v.abs() < 1e15 => write!(f, "{}", *v as i64),
            Cell::Float(v) => write!(f, "{v}"),
            Cell::Bool(true) => f.write_str("True"),
            Cell::Bool(false) => f.write_str("False"),
        }
    }
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => Cell::Empty,
            Data::String(s) => Cell::Text(s.clone()),
            Data::Int(i) => Cell::Int(*i),
            Data::Float(v) => Cell::Float(*v),
            Data::Bool(b) => Cell::Bool(*b),
            Data::DateTime(dt) => Cell::Other(format_datetime(dt)),
            Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Other(s.clone()),
            other => Cell::Other(format!("{other}")),
        }
    }
}

/// Render a date cell as `YYYY-MM-DD HH:MM:SS`, or `HH:MM:SS` for time-only
/// values. Falls back to the serial number when the value is no valid date.
fn format_datetime(dt: &ExcelDateTime) -> String {
    if dt.is_datetime() {
        if let Some(datetime) = dt.as_datetime() {
            let pattern = if dt.as_f64() < 1.0 {
                "%H:%M:%S"
            } else {
                "%Y-%m-%d %H:%M:%S"
            };
            return datetime.format(pattern).to_string();
        }
    }
    dt.to_string()
}

/// Read the first sheet of an xlsx workbook as rows of cells.
///
/// Rows and columns are addressed from the top-left corner of the sheet
/// (A1), not from the first used cell, so row 0 is always the header row.
/// Every row has the same width: the sheet's last used column + 1.
pub fn read_first_sheet(bytes: &[u8]) -> Result<Vec<Vec<Cell>>, QuizError> {
    let cursor = Cursor::new(bytes);
    let mut workbook: Xlsx<_> = calamine::open_workbook_from_rs(cursor)
        .map_err(|e| QuizError::Spreadsheet(format!("failed to open xlsx: {e}")))?;

    let first = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(QuizError::EmptyWorkbook)?;

    let sheet = workbook
        .worksheet_range(&first)
        .map_err(|e| QuizError::Spreadsheet(format!("failed to read sheet '{first}': {e}")))?;

    let Some((last_row, last_col)) = sheet.end() else {
        tracing::debug!(sheet = %first, "sheet is empty");
        return Ok(Vec::new());
    };

    let rows: Vec<Vec<Cell>> = (0..=last_row)
        .map(|row| {
            (0..=last_col)
                .map(|col| sheet.get_value((row, col)).map(Cell::from).unwrap_or(Cell::Empty))
                .collect()
        })
        .collect();

    tracing::debug!(sheet = %first, rows = rows.len(), "read xlsx sheet");
    Ok(rows)
}
