use quizconv_core::model::QuestionRecord;
use std::fmt;

pub fn print(records: &[QuestionRecord]) {
    print!("{}", format_records(records));
}

pub fn format_records(records: &[QuestionRecord]) -> String {
    RecordTable(records).to_string()
}

/// Numbered question list with the answer option starred.
struct RecordTable<'a>(&'a [QuestionRecord]);

impl fmt::Display for RecordTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let records = self.0;
        if records.is_empty() {
            return writeln!(f, "No questions found.");
        }

        for (i, record) in records.iter().enumerate() {
            let question = if record.question.is_empty() {
                "(empty)"
            } else {
                record.question.as_str()
            };
            writeln!(f, "{:>3}. {}", i + 1, question)?;

            for (label, text) in &record.options {
                let marker = if record.answer == label.as_str() { "*" } else { " " };
                writeln!(f, "     {marker} {label}. {text}")?;
            }
            if !record.answer.is_empty() {
                writeln!(f, "       Answer: {}", record.answer)?;
            }
        }

        let choice_count = records.iter().filter(|r| r.is_multiple_choice()).count();
        writeln!(
            f,
            "\n{} question(s), {} multiple choice",
            records.len(),
            choice_count
        )
    }
}
