/// Marker that opens an answer line ("answer" in Chinese).
pub const ANSWER_MARKER: &str = "答案";

/// True when the line, lowercased, starts with the answer marker.
pub fn is_answer_line(line: &str) -> bool {
    line.to_lowercase().starts_with(ANSWER_MARKER)
}

/// Value carried by an answer line, e.g. `答案: A` or `答案 A`.
///
/// With an ASCII colon present the line is split on colons, otherwise on
/// whitespace; the value is the second segment, trimmed. Returns `None` when
/// there is no second segment.
pub fn parse_answer_line(line: &str) -> Option<String> {
    let value = if line.contains(':') {
        line.split(':').nth(1)
    } else {
        line.split_whitespace().nth(1)
    };
    value.map(|v| v.trim().to_string())
}
