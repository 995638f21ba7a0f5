//! Path display for reports: relative to the working directory when possible,
//! always with forward slashes.

use std::path::Path;

/// Format a path for display, making it relative to `base` if possible.
///
/// - If `base` is provided and `path` is below it, returns the relative path.
/// - Uses forward slashes as separators for consistent cross-platform output.
/// - If the path cannot be made relative, returns the path as-is with normalized separators.
/// - Returns `"."` for empty relative paths (when `path` equals `base`).
#[must_use]
pub fn display_path(path: &Path, base: Option<&Path>) -> String {
    let display_path = base.map_or_else(
        || path.to_path_buf(),
        |base| {
            path.strip_prefix(base)
                .map_or_else(|_| path.to_path_buf(), std::path::Path::to_path_buf)
        },
    );

    // Convert to string with forward slashes for consistent output
    let result = normalize_separators(&display_path.to_string_lossy());

    // Return "." for empty relative paths
    if result.is_empty() {
        ".".to_string()
    } else {
        result
    }
}

/// Normalize path separators to forward slashes.
#[must_use]
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}
