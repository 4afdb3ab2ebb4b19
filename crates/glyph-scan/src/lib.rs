//! # glyph-scan
//!
//! Directory collection and pipeline orchestration for Glyphset.
//!
//! ```no_run
//! use std::path::PathBuf;
//! use glyph_config::ResolvedConfig;
//! use glyph_core::Variant;
//! use glyph_scan::Pipeline;
//!
//! let config = ResolvedConfig::new(Variant::Rounded, vec![PathBuf::from("src")]);
//! let pipeline = Pipeline::new(config);
//! let (html, report) = pipeline
//!     .transform_html("<html><head></head><body></body></html>")
//!     .expect("scan");
//! println!("{} icons -> {html}", report.icons.len());
//! ```

pub mod collect;
pub mod error;
pub mod pipeline;

pub use collect::{Collection, collect_sources};
pub use error::ScanError;
pub use pipeline::{Pipeline, ScanReport, SkipReason, SkippedFile};
