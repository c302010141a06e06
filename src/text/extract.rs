//! Document readers: plain text and PDF sources flattened to one string.

use crate::error::{LectorError, Result};
use std::fs;
use std::path::Path;

/// Reads a document into a single string.
///
/// Files with a `.pdf` extension go through PDF text extraction; anything
/// else is read as UTF-8 plain text. PDF structure and pagination are not
/// preserved; downstream segmentation sees one flat word stream.
pub fn extract_text(path: &Path) -> Result<String> {
    if is_pdf(path) {
        pdf_extract::extract_text(path).map_err(|e| LectorError::InputRead {
            path: path.display().to_string(),
            message: format!("PDF extraction failed: {}", e),
        })
    } else {
        fs::read_to_string(path).map_err(|e| LectorError::InputRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}
