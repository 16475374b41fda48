//! Document ingestion: media-kind validation and text decoding.
//!
//! No format parsing happens here: PDF and DOCX bytes are decoded as UTF-8
//! text (invalid sequences replaced) exactly like the plain-text kinds.

use std::path::Path;

use anyhow::{Context, Result};
use uuid::Uuid;

use crate::errors::WorkflowError;

pub const MIME_PDF: &str = "application/pdf";
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const MIME_TEXT: &str = "text/plain";
pub const MIME_TEX: &str = "application/x-tex";
pub const MIME_TEX_ALT: &str = "text/x-tex";
/// Declared type for anything the host cannot classify.
pub const MIME_UNKNOWN: &str = "application/octet-stream";

const LATEX_SUFFIX: &str = ".tex";

/// Dropped once from the start of decoded text, as browsers do.
const UTF8_BOM: char = '\u{FEFF}';

/// Accepted resume formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Pdf,
    Docx,
    PlainText,
    Latex,
}

impl MediaKind {
    /// Classifies by declared MIME type first, then by the `.tex` suffix.
    pub fn detect(declared_type: &str, name: &str) -> Option<Self> {
        match declared_type {
            MIME_PDF => Some(MediaKind::Pdf),
            MIME_DOCX => Some(MediaKind::Docx),
            MIME_TEXT => Some(MediaKind::PlainText),
            MIME_TEX | MIME_TEX_ALT => Some(MediaKind::Latex),
            _ if name.ends_with(LATEX_SUFFIX) => Some(MediaKind::Latex),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MediaKind::Pdf => "PDF",
            MediaKind::Docx => "DOCX",
            MediaKind::PlainText => "TXT",
            MediaKind::Latex => "LaTeX",
        }
    }
}

/// A file handed over by the host (file picker, drag-and-drop, CLI argument).
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub name: String,
    pub declared_type: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
            bytes,
        }
    }

    /// Reads a file from disk. The declared type comes from `declared_type`
    /// when given, otherwise from the file extension.
    pub async fn read(path: &Path, declared_type: Option<&str>) -> Result<Self> {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let declared_type = declared_type
            .map(str::to_string)
            .unwrap_or_else(|| declared_type_for(path).to_string());

        Ok(Self::new(name, declared_type, bytes))
    }

    pub fn size_bytes(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Extension-based MIME inference, mirroring what a browser reports for the
/// picker's accepted extensions.
pub fn declared_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("pdf") => MIME_PDF,
        Some("docx") => MIME_DOCX,
        Some("txt") => MIME_TEXT,
        Some("tex") => MIME_TEX,
        _ => MIME_UNKNOWN,
    }
}

/// The resume as held by the workflow: metadata plus decoded text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Identifies one load; a reload of the same file gets a new id.
    pub id: Uuid,
    pub name: String,
    pub size_bytes: u64,
    pub media_kind: MediaKind,
    pub raw_text: String,
}

impl Document {
    /// Validates the declared type and decodes the bytes. Rejected files never
    /// produce a `Document`.
    pub fn from_selected(selected: SelectedFile) -> Result<Self, WorkflowError> {
        let media_kind = MediaKind::detect(&selected.declared_type, &selected.name).ok_or_else(
            || WorkflowError::InvalidFileType {
                name: selected.name.clone(),
                declared_type: selected.declared_type.clone(),
            },
        )?;
        let size_bytes = selected.size_bytes();
        let mut raw_text = match String::from_utf8(selected.bytes) {
            Ok(text) => text,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        };
        if raw_text.starts_with(UTF8_BOM) {
            raw_text.remove(0);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name: selected.name,
            size_bytes,
            media_kind,
            raw_text,
        })
    }

    /// `"<name> (<size> KB)"`, size in KiB with two decimals.
    pub fn label(&self) -> String {
        format!("{} ({:.2} KB)", self.name, self.size_bytes as f64 / 1024.0)
    }
}
