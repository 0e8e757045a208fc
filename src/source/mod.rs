pub mod docx;
#[cfg(feature = "pdf")]
pub mod pdf;

use std::path::Path;

use tracing::debug;

use crate::error::ExtractError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Docx,
    Pdf,
}

impl DocumentKind {
    /// Case-insensitive check of the file name's ending.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_string_lossy().to_lowercase();
        if name.ends_with(".docx") {
            Some(DocumentKind::Docx)
        } else if name.ends_with(".pdf") {
            Some(DocumentKind::Pdf)
        } else {
            None
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DocumentKind::Docx => "DOCX",
            DocumentKind::Pdf => "PDF",
        }
    }
}

/// Resolve what kind of document `path` is, without parsing it.
pub fn detect(path: &Path) -> Result<DocumentKind, ExtractError> {
    if !path.is_file() {
        return Err(ExtractError::FileNotFound(path.to_path_buf()));
    }
    DocumentKind::from_path(path).ok_or_else(|| ExtractError::UnsupportedFileType(path.to_path_buf()))
}

/// Non-empty, trimmed lines of the document in reading order.
pub fn read_lines(path: &Path, kind: DocumentKind) -> Result<Vec<String>, ExtractError> {
    let lines = match kind {
        DocumentKind::Docx => docx::paragraph_lines(path)?,
        DocumentKind::Pdf => read_pdf(path)?,
    };

    debug!(kind = kind.label(), lines = lines.len(), path = %path.display(), "read document");
    Ok(lines)
}

#[cfg(feature = "pdf")]
fn read_pdf(path: &Path) -> Result<Vec<String>, ExtractError> {
    pdf::page_lines(path)
}

#[cfg(not(feature = "pdf"))]
fn read_pdf(_path: &Path) -> Result<Vec<String>, ExtractError> {
    Err(ExtractError::MissingDependency {
        format: DocumentKind::Pdf.label(),
        hint: "rebuild with `--features pdf`",
    })
}

pub fn lines_from_document(path: &Path) -> Result<Vec<String>, ExtractError> {
    let kind = detect(path)?;
    read_lines(path, kind)
}

#[cfg_attr(not(feature = "pdf"), allow(dead_code))]
pub(crate) fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}
