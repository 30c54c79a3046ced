use std::io::{Cursor, Read};

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use zip::ZipArchive;

use crate::error::QuizError;

const DOCUMENT_PART: &str = "word/document.xml";

/// Extract the text of every top-level body paragraph of a `.docx` file,
/// in document order.
///
/// Paragraphs nested in tables, content controls or text boxes are not part
/// of the flat paragraph sequence and are skipped. Returned text is raw:
/// callers trim and filter blanks.
pub fn extract_paragraphs(bytes: &[u8]) -> Result<Vec<String>, QuizError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| QuizError::Document(format!("not a docx archive: {e}")))?;

    let mut part = archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| QuizError::Document(format!("{DOCUMENT_PART} not found: {e}")))?;

    let mut xml = Vec::new();
    part.read_to_end(&mut xml)?;

    let paragraphs = parse_document_xml(&xml)?;
    tracing::debug!(paragraphs = paragraphs.len(), "read docx body");
    Ok(paragraphs)
}

/// Walk `word/document.xml` and collect body paragraph text.
///
/// Only runs that are direct children of the paragraph, or of a hyperlink
/// directly inside it, contribute text. Runs wrapped in revision marks
/// (`w:ins`), smart tags or field containers are left out.
fn parse_document_xml(xml: &[u8]) -> Result<Vec<String>, QuizError> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();

    // Local names of the currently open elements.
    let mut stack: Vec<Vec<u8>> = Vec::new();
    let mut paragraphs = Vec::new();
    // Text of the open body paragraph and its index in `stack`.
    let mut current: Option<(String, usize)> = None;

    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|e| xml_error(&reader, e))?;

        match event {
            Event::Start(e) => {
                let name = e.local_name().as_ref().to_vec();
                if name == b"p" && current.is_none() && parent_is_body(&stack) {
                    current = Some((String::new(), stack.len()));
                }
                stack.push(name);
            }
            Event::Empty(e) => {
                let name = e.local_name();
                let text = match name.as_ref() {
                    b"p" if current.is_none() && parent_is_body(&stack) => {
                        paragraphs.push(String::new());
                        None
                    }
                    b"tab" => Some("\t"),
                    b"cr" => Some("\n"),
                    b"br" if is_line_break(&e) => Some("\n"),
                    _ => None,
                };
                if let Some(text) = text {
                    push_run_text(&mut current, &stack, text);
                }
            }
            Event::Text(e) => {
                if let Some(run_path) = text_run_path(&stack) {
                    let text = e.unescape().map_err(|e| xml_error(&reader, e))?;
                    push_run_text(&mut current, run_path, &text);
                }
            }
            Event::CData(e) => {
                if let Some(run_path) = text_run_path(&stack) {
                    let text = String::from_utf8_lossy(&e);
                    push_run_text(&mut current, run_path, &text);
                }
            }
            Event::End(_) => {
                stack.pop();
                if current.as_ref().is_some_and(|(_, index)| *index == stack.len()) {
                    if let Some((text, _)) = current.take() {
                        paragraphs.push(text);
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(paragraphs)
}

fn parent_is_body(stack: &[Vec<u8>]) -> bool {
    stack.last().is_some_and(|n| n.as_slice() == b"body")
}

/// Stack up to the enclosing run when the innermost element is `w:t`.
fn text_run_path(stack: &[Vec<u8>]) -> Option<&[Vec<u8>]> {
    match stack.split_last() {
        Some((last, rest)) if last.as_slice() == b"t" => Some(rest),
        _ => None,
    }
}

/// `w:br` without a type, or with `textWrapping`, is a line break; page and
/// column breaks carry no text.
fn is_line_break(br: &BytesStart<'_>) -> bool {
    br.attributes()
        .flatten()
        .find(|a| a.key.local_name().as_ref() == b"type")
        .map_or(true, |a| a.value.as_ref() == b"textWrapping")
}

/// Append `text` when `run_path` ends in a run that belongs directly to the
/// open body paragraph.
fn push_run_text(current: &mut Option<(String, usize)>, run_path: &[Vec<u8>], text: &str) {
    let Some((paragraph, index)) = current.as_mut() else {
        return;
    };
    let inside: Vec<&[u8]> = run_path
        .iter()
        .skip(*index + 1)
        .map(|n| n.as_slice())
        .collect();
    if matches!(inside.as_slice(), [b"r"] | [b"hyperlink", b"r"]) {
        paragraph.push_str(text);
    }
}

fn xml_error<R>(reader: &Reader<R>, e: impl std::fmt::Display) -> QuizError {
    QuizError::Document(format!(
        "malformed {DOCUMENT_PART} at byte {}: {e}",
        reader.buffer_position()
    ))
}
