//! Plan document reading
//!
//! DOCX files are reduced to plain text with `docx-lite`; plain text
//! exports are read as-is. Either way the text is handed to the parser.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

use crate::domain::{parse_plan, Sprint};

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Unsupported document format '{0}' (expected .docx, .txt or .md)")]
    UnsupportedFormat(String),

    #[error("Document not found: {0}")]
    NotFound(String),
}

/// Supported document formats, by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Docx,
    PlainText,
}

impl DocumentFormat {
    /// Detects the format from the file extension
    pub fn from_path(path: &Path) -> Result<Self, DocumentError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "docx" => Ok(Self::Docx),
            "txt" | "text" | "md" => Ok(Self::PlainText),
            _ => Err(DocumentError::UnsupportedFormat(ext)),
        }
    }
}

/// Extracts the raw text of a plan document
pub fn read_document_text(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(DocumentError::NotFound(path.display().to_string()))
            .context("Failed to read document");
    }

    match DocumentFormat::from_path(path)? {
        DocumentFormat::Docx => docx_lite::extract_text(path)
            .with_context(|| format!("Failed to read document: {}", path.display())),
        DocumentFormat::PlainText => fs::read_to_string(path)
            .with_context(|| format!("Failed to read document: {}", path.display())),
    }
}

/// Reads a plan document and parses it into sprints
pub fn load_plan(path: &Path) -> Result<Vec<Sprint>> {
    let text = read_document_text(path)?;
    Ok(parse_plan(&text))
}
