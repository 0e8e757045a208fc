use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use crate::error::ExtractError;

const DOCUMENT_PART: &str = "word/document.xml";

/// One line per body-level paragraph of a `.docx` file.
pub fn paragraph_lines(path: &Path) -> Result<Vec<String>, ExtractError> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(file).map_err(|e| {
        ExtractError::FileFormat(format!("{} is not a DOCX package: {e}", path.display()))
    })?;
    let part = archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| ExtractError::FileFormat(format!("missing {DOCUMENT_PART}: {e}")))?;

    let paragraphs = body_paragraphs(BufReader::new(part))?;
    Ok(paragraphs
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect())
}

/// Raw text of each `w:p` that is a direct child of `w:body`.
///
/// Table cells and text boxes hold their own paragraphs; those are skipped.
/// Inside a paragraph only run content counts: `w:t` text, `w:tab` as a tab,
/// `w:br`/`w:cr` as a newline.
fn body_paragraphs<R: BufRead>(input: R) -> Result<Vec<String>, ExtractError> {
    let mut reader = Reader::from_reader(input);
    let mut buf = Vec::new();
    let mut stack: Vec<Vec<u8>> = Vec::new();
    let mut current: Option<String> = None;
    let mut paragraphs = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = e.name().as_ref().to_vec();
                if name == b"w:p" && parent_is(&stack, b"w:body") {
                    current = Some(String::new());
                }
                stack.push(name);
            }
            Ok(Event::Empty(e)) => {
                if let Some(text) = current.as_mut() {
                    if in_own_run(&stack) {
                        match e.name().as_ref() {
                            b"w:tab" => text.push('\t'),
                            b"w:br" | b"w:cr" => text.push('\n'),
                            _ => {}
                        }
                    }
                }
            }
            Ok(Event::Text(t)) => {
                if let Some(text) = current.as_mut() {
                    if parent_is(&stack, b"w:t") && paragraph_depth(&stack) == 1 {
                        let unescaped = t.unescape().map_err(|e| xml_error(&e))?;
                        text.push_str(&unescaped);
                    }
                }
            }
            Ok(Event::End(_)) => {
                let closed = stack.pop();
                if closed.as_deref() == Some(b"w:p".as_slice()) && parent_is(&stack, b"w:body") {
                    if let Some(text) = current.take() {
                        paragraphs.push(text);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(xml_error(&e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(paragraphs)
}

fn parent_is(stack: &[Vec<u8>], name: &[u8]) -> bool {
    stack.last().is_some_and(|n| n.as_slice() == name)
}

fn paragraph_depth(stack: &[Vec<u8>]) -> usize {
    stack.iter().filter(|n| n.as_slice() == b"w:p").count()
}

fn in_own_run(stack: &[Vec<u8>]) -> bool {
    parent_is(stack, b"w:r") && paragraph_depth(stack) == 1
}

fn xml_error(e: &dyn std::fmt::Display) -> ExtractError {
    ExtractError::FileFormat(format!("malformed {DOCUMENT_PART}: {e}"))
}
