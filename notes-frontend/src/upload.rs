//! Pre-flight checks for document uploads.
//!
//! Only plain text and PDF documents are accepted. The check runs before any
//! request is built, so a rejected file never reaches the network.

use std::path::{Path, PathBuf};

/// Extensions the notes service can extract text from (lowercase)
pub const ALLOWED_EXTENSIONS: &[&str] = &["txt", "pdf"];

/// A file chosen for upload. Bytes are read when the request is sent.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub path: PathBuf,
    /// Name sent in the multipart part and used for the extension check
    pub file_name: String,
}

impl UploadFile {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());
        Self { path, file_name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn extension(&self) -> String {
        extension_of(&self.file_name)
    }

    /// MIME type for the multipart part
    pub fn mime_type(&self) -> &'static str {
        match self.extension().as_str() {
            "txt" => "text/plain",
            "pdf" => "application/pdf",
            _ => "application/octet-stream",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UploadRejection {
    #[error("No file selected.")]
    NoFile,
    #[error("Only TXT and PDF files allowed.")]
    ExtensionNotAllowed,
}

/// Lowercased text after the last `.` of `name`.
///
/// A name without any `.` is its own extension, so `"txt"` passes and
/// `"README"` does not.
pub fn extension_of(name: &str) -> String {
    name.rsplit('.').next().unwrap_or_default().to_lowercase()
}

pub fn is_allowed(name: &str) -> bool {
    let ext = extension_of(name);
    ALLOWED_EXTENSIONS.contains(&ext.as_str())
}

pub fn validate(file: Option<&UploadFile>) -> Result<&UploadFile, UploadRejection> {
    let file = file.ok_or(UploadRejection::NoFile)?;
    if !is_allowed(&file.file_name) {
        return Err(UploadRejection::ExtensionNotAllowed);
    }
    Ok(file)
}
