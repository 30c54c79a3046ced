use quizconv_core::error::QuizError;
use quizconv_core::model::QuestionRecord;

pub fn print(records: &[QuestionRecord]) -> Result<(), QuizError> {
    let json = serde_json::to_string_pretty(records)?;
    println!("{json}");
    Ok(())
}
