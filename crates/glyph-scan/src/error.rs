//! Scan error types for glyph-scan.

use std::path::PathBuf;

/// Errors that abort a scan.
///
/// Per-file parse and read failures are not errors here; they are recorded
/// in the scan report and the scan continues.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// A root directory could not be traversed (missing, permission denied).
    #[error("failed to walk '{}': {source}", root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: ignore::Error,
    },
}
