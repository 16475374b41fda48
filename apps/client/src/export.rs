//! Export of the optimized resume and the download boundary.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bytes::Bytes;

pub const EXPORT_CONTENT_TYPE: &str = "text/plain";
const EXPORT_PREFIX: &str = "optimized-";
const FALLBACK_NAME: &str = "resume.txt";

/// A ready-to-save artifact: bytes plus the suggested file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Bytes,
}

impl Export {
    pub fn text(original_name: &str, text: &str) -> Self {
        Self {
            file_name: export_file_name(original_name),
            content_type: EXPORT_CONTENT_TYPE,
            bytes: Bytes::copy_from_slice(text.as_bytes()),
        }
    }
}

/// `optimized-<name>`, or `optimized-resume.txt` when there is no name.
pub fn export_file_name(original_name: &str) -> String {
    let base = if original_name.is_empty() {
        FALLBACK_NAME
    } else {
        original_name
    };
    format!("{EXPORT_PREFIX}{base}")
}

/// Writes the export into `dir` and returns the saved path.
pub async fn save_export(dir: &Path, export: &Export) -> Result<PathBuf> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let path = dir.join(&export.file_name);
    tokio::fs::write(&path, &export.bytes)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}
