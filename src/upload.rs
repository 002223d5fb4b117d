//! Disk-backed storage for uploaded qualification files.
//!
//! Uploads are filtered to PDF, written under the configured directory with a
//! millisecond-timestamp prefix to avoid collisions, and referenced from the
//! database by their public `/uploads/...` path. The MIME check runs before
//! any byte reaches disk, so a rejected upload leaves nothing behind.

use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::error::ApiError;

/// The only content type accepted for qualification files.
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Fallback name for uploads whose filename sanitizes to nothing.
const FALLBACK_FILE_NAME: &str = "upload.pdf";

#[derive(Debug, Clone)]
pub struct UploadStore {
    root: PathBuf,
}

impl UploadStore {
    /// Create a store rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory the store writes into.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the upload directory if it does not exist.
    pub async fn ensure_dir(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.root).await
    }

    /// Validate and persist an uploaded PDF.
    ///
    /// Returns the public `/uploads/{name}` path stored alongside the
    /// application row. The stored name is the upload timestamp in
    /// milliseconds joined to the sanitized client filename.
    pub async fn store_pdf(
        &self,
        original_name: &str,
        content_type: &str,
        data: &[u8],
    ) -> Result<String, ApiError> {
        if content_type != PDF_CONTENT_TYPE {
            return Err(ApiError::UnsupportedFileType {
                content_type: content_type.to_string(),
            });
        }

        let file_name = format!(
            "{}-{}",
            Utc::now().timestamp_millis(),
            sanitize_file_name(original_name)
        );

        tokio::fs::write(self.root.join(&file_name), data).await?;

        Ok(format!("/uploads/{}", file_name))
    }
}

/// Reduce a client-supplied filename to a safe basename.
///
/// Path separators are stripped and anything outside `[A-Za-z0-9._-]` is
/// replaced, so the stored name can never escape the upload directory.
fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.is_empty() || cleaned.chars().all(|c| c == '.') {
        FALLBACK_FILE_NAME.to_string()
    } else {
        cleaned
    }
}

// =============================================================================
// Tests
// =============================================================================
