pub mod answer;
pub mod sheet;

use crate::model::{OptionLabel, Options, QuestionRecord};
use answer::{is_answer_line, parse_answer_line};

pub use sheet::parse_rows;

/// Group a flat sequence of prepared lines into question records.
///
/// Each record is one question line, then the lettered option lines that
/// follow in A→D order, then an optional answer line. Option scanning stops
/// at the first line that does not carry the next expected label; a record
/// cut short by the end of input is still emitted.
pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> Vec<QuestionRecord> {
    let mut records = Vec::new();
    let mut cursor = 0;

    while cursor < lines.len() {
        let question = lines[cursor].as_ref().to_string();
        cursor += 1;

        let mut options = Options::new();
        for label in OptionLabel::ALL {
            match lines.get(cursor).and_then(|l| strip_label(l.as_ref(), label)) {
                Some(text) => {
                    options.insert(label, text);
                    cursor += 1;
                }
                None => break,
            }
        }

        let mut answer = String::new();
        if let Some(line) = lines.get(cursor).map(|l| l.as_ref()) {
            if is_answer_line(line) {
                answer = parse_answer_line(line).unwrap_or_default();
                cursor += 1;
            }
        }

        records.push(QuestionRecord::new(question, options, answer));
    }

    records
}

/// Option text of `line` when it starts with `label`.
///
/// The label and any `.`/space characters right after it are removed. Any
/// line starting with the letter qualifies, including ordinary words.
fn strip_label(line: &str, label: OptionLabel) -> Option<String> {
    let rest = line.strip_prefix(label.as_str())?;
    Some(rest.trim_start_matches(['.', ' ']).trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(pairs: &[(OptionLabel, &str)]) -> Options {
        pairs.iter().map(|(l, t)| (*l, t.to_string())).collect()
    }

    #[test]
    fn test_full_record() {
        let records = parse_lines(&["Q1", "A. opt1", "B. opt2", "答案: A"]);
        assert_eq!(
            records,
            vec![QuestionRecord {
                question: "Q1".into(),
                options: opts(&[(OptionLabel::A, "opt1"), (OptionLabel::B, "opt2")]),
                answer: "A".into(),
            }]
        );
    }

    #[test]
    fn test_broken_label_sequence_stops_scanning() {
        let records = parse_lines(&["Q1", "C. opt1"]);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].question, "Q1");
        assert!(records[0].options.is_empty());
        assert_eq!(records[0].answer, "");
        // The skipped line starts the next record.
        assert_eq!(records[1].question, "C. opt1");
    }

    #[test]
    fn test_missing_label_ends_options() {
        let records = parse_lines(&["Q1", "A. a", "C. c", "答案: A"]);
        assert_eq!(records[0].options, opts(&[(OptionLabel::A, "a")]));
        // "C. c" was not consumed, so no answer line followed the options.
        assert_eq!(records[0].answer, "");
        assert_eq!(records[1].question, "C. c");
        assert!(records[1].options.is_empty());
        assert_eq!(records[1].answer, "");
    }

    #[test]
    fn test_multiple_records() {
        let records = parse_lines(&[
            "1. Capital of France?",
            "A. Paris",
            "B. Rome",
            "C. Oslo",
            "D. Bern",
            "答案: A",
            "2. Explain photosynthesis.",
            "3. 2+2=?",
            "A 3",
            "B 4",
            "答案 B",
        ]);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].options.len(), 4);
        assert_eq!(records[0].options[&OptionLabel::D], "Bern");
        assert_eq!(records[0].answer, "A");
        assert_eq!(records[1].question, "2. Explain photosynthesis.");
        assert!(records[1].options.is_empty());
        assert_eq!(records[2].options[&OptionLabel::B], "4");
        assert_eq!(records[2].answer, "B");
    }

    #[test]
    fn test_answer_line_without_options_is_consumed_and_dropped() {
        let records = parse_lines(&["Fill in: ___ is the capital", "答案: Paris", "Next"]);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].answer, "");
        assert_eq!(records[1].question, "Next");
    }

    #[test]
    fn test_answer_marker_without_value_still_advances() {
        let records = parse_lines(&["Q", "A. x", "答案", "Q2"]);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].answer, "");
        assert_eq!(records[1].question, "Q2");
    }

    #[test]
    fn test_record_cut_short_at_end() {
        let records = parse_lines(&["Q1", "A. only"]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].options, opts(&[(OptionLabel::A, "only")]));
        assert_eq!(records[0].answer, "");
    }

    #[test]
    fn test_ordinary_word_consumed_as_option() {
        let records = parse_lines(&["Q1", "Apples are red"]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].options[&OptionLabel::A], "pples are red");
    }

    #[test]
    fn test_strip_label_variants() {
        assert_eq!(strip_label("A. text", OptionLabel::A).unwrap(), "text");
        assert_eq!(strip_label("B.. . text ", OptionLabel::B).unwrap(), "text");
        assert_eq!(strip_label("C", OptionLabel::C).unwrap(), "");
        assert_eq!(strip_label("D、选项", OptionLabel::D).unwrap(), "、选项");
        assert!(strip_label("a. lower", OptionLabel::A).is_none());
        assert!(strip_label("B. text", OptionLabel::A).is_none());
    }

    #[test]
    fn test_empty_input() {
        let lines: Vec<String> = Vec::new();
        assert!(parse_lines(&lines).is_empty());
    }
}
