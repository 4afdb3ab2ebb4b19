//! Cross-cutting error types for Glyphset.
//!
//! Domain-specific errors (`ParserError`, `ScanError`, ...) live in their
//! respective crates. `glyph-cli` converges everything into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by core type conversions.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A variant name did not match any known Material Symbols style.
    #[error("Unknown variant '{0}' (expected one of: sharp, rounded, outlined)")]
    UnknownVariant(String),
}
