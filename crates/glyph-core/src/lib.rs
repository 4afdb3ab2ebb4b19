//! # glyph-core
//!
//! Core types and error types for Glyphset.
//!
//! This crate provides the foundational types shared across all Glyphset crates:
//! - [`Variant`]: the three Material Symbols styles and their compiled-in
//!   font family / marker class table
//! - [`FontAxes`]: the four variable-font axis ranges passed through to the
//!   stylesheet URL
//! - [`IconSet`]: the deduplicated, always-sorted accumulator of icon names
//! - [`SourceFile`]: a source path paired with its text
//! - [`CoreError`]: cross-cutting errors
//! - [`lenient`]: serde helpers for strings that may arrive as numbers

pub mod axes;
pub mod errors;
pub mod icons;
pub mod lenient;
pub mod source;
pub mod variant;

pub use axes::FontAxes;
pub use errors::CoreError;
pub use icons::IconSet;
pub use source::{SOURCE_EXTENSIONS, SourceFile, is_source_path};
pub use variant::Variant;
