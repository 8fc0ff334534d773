//! File attachments for multipart requests

use reqwest::multipart::Part;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::common::ApiError;

const FALLBACK_MIME: &str = "application/octet-stream";

/// A local file to send under a form field name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub field: String,
    pub path: PathBuf,
}

impl FileUpload {
    pub fn new(field: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            field: field.into(),
            path: path.into(),
        }
    }

    /// Read the file and build its form part. The MIME type is sniffed from
    /// the file contents, falling back to the extension.
    pub async fn into_part(self) -> Result<(String, Part), ApiError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| ApiError::File {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;

        let mime = detect_mime(&self.path, &bytes);
        let file_name = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();

        debug!(field = %self.field, file = %file_name, mime = %mime, size = bytes.len(), "Attaching file");

        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(mime)
            .map_err(|e| ApiError::File {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })?;

        Ok((self.field, part))
    }
}

pub fn detect_mime(path: &Path, bytes: &[u8]) -> &'static str {
    if let Some(kind) = infer::get(bytes) {
        return kind.mime_type();
    }

    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .as_deref()
    {
        Some("pdf") => "application/pdf",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("doc") => "application/msword",
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => FALLBACK_MIME,
    }
}
