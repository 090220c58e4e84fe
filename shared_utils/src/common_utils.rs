//! Common Utilities Module
//!
//! File and path helpers shared across the workspace.

use anyhow::{Context, Result};
use std::path::Path;

/// Get a file's extension in lowercase, or an empty string if it has none.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use shared_utils::common_utils::get_extension_lowercase;
///
/// assert_eq!(get_extension_lowercase(Path::new("test.JPG")), "jpg");
/// assert_eq!(get_extension_lowercase(Path::new("noext")), "");
/// ```
pub fn get_extension_lowercase(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default()
}

/// Check whether a file's extension is in the given list (case-insensitive).
///
/// # Examples
/// ```
/// use std::path::Path;
/// use shared_utils::common_utils::has_extension;
///
/// let extensions = &["jpg", "jpeg", "png"];
/// assert!(has_extension(Path::new("photo.JPG"), extensions));
/// assert!(!has_extension(Path::new("video.mp4"), extensions));
/// ```
pub fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    let ext = get_extension_lowercase(path);
    extensions.contains(&ext.as_str())
}

/// Create a directory (including parents). Idempotent.
pub fn ensure_dir_exists(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))
}

/// Create the parent directory of a file path, if there is one.
pub fn ensure_parent_dir_exists(file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        ensure_dir_exists(parent)?;
    }
    Ok(())
}

// Reject empty or truncated files before handing them to the decoder.
pub fn validate_file_integrity(path: &Path) -> Result<()> {
    let metadata = std::fs::metadata(path)?;
    let size = metadata.len();

    if size == 0 {
        anyhow::bail!("File is empty (0 bytes)");
    }

    // Every supported image header is at least a dozen bytes.
    if size < 12 {
        anyhow::bail!("File is too small (< 12 bytes) to be a valid image");
    }

    Ok(())
}
