//! Contract document loading.

use std::path::Path;

use log::debug;

use crate::error::AiError;

/// Load the contract document the clause service reads.
///
/// `.pdf` files go through text extraction; `.txt` files are read as
/// UTF-8. An empty extraction result is an error so the server refuses
/// to start with an unreadable contract instead of answering from a
/// blank document.
pub fn load_contract_text(path: &Path) -> Result<String, AiError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    let text = match extension.as_str() {
        "pdf" => pdf_extract::extract_text(path).map_err(|e| {
            AiError::Document(format!(
                "Failed to extract text from {}: {}",
                path.display(),
                e
            ))
        })?,
        "txt" => std::fs::read_to_string(path)
            .map_err(|e| AiError::Document(format!("Failed to read {}: {}", path.display(), e)))?,
        other => {
            return Err(AiError::Document(format!(
                "Unsupported contract format '{}' (expected .pdf or .txt)",
                other
            )))
        }
    };

    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(AiError::Document(format!(
            "No text could be extracted from {}",
            path.display()
        )));
    }

    debug!("Loaded contract document: {} characters", text.len());
    Ok(text)
}
