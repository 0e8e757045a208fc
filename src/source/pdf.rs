use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use crate::error::ExtractError;

/// Text lines of every page, in page order.
pub fn page_lines(path: &Path) -> Result<Vec<String>, ExtractError> {
    let bytes = std::fs::read(path)?;

    // pdf-extract panics on some malformed font tables instead of returning an error.
    // The hook is muted for the call so the panic report never reaches the user.
    let previous_hook = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(&bytes)));
    panic::set_hook(previous_hook);

    let text = outcome
        .map_err(|_| {
            ExtractError::FileFormat(format!("PDF parser crashed on {}", path.display()))
        })?
        .map_err(|e| {
            ExtractError::FileFormat(format!("failed to extract text from {}: {e}", path.display()))
        })?;

    Ok(super::split_lines(&text))
}
