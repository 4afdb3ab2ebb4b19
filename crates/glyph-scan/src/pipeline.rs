//! Pipeline orchestrator: one full scan per build.
//!
//! ```text
//! paths ──collect──┐
//!                  ├─► parse + scan (parallel) ─► IconSet ∪ safelist ─► URL ─► <head>
//! files ──read─────┘
//! ```
//!
//! Each rayon worker fills its own [`IconSet`]; the sets are merged at the
//! end, so the result is independent of scheduling and file order.

use std::path::PathBuf;

use glyph_config::ResolvedConfig;
use glyph_core::{IconSet, SourceFile};
use glyph_link::{inject_link, link_element, stylesheet_url};
use glyph_parser::IconExtractor;
use rayon::prelude::*;
use serde::Serialize;

use crate::collect::collect_sources;
use crate::error::ScanError;

/// Why a file contributed nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The file could not be read as UTF-8 text.
    Read,
    /// The file is not valid TSX.
    Parse,
}

/// A file that was skipped during a scan.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: SkipReason,
    pub message: String,
}

/// Outcome of one scan.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanReport {
    /// Discovered names plus the safelist, sorted.
    pub icons: IconSet,
    /// Files parsed successfully.
    pub files_scanned: usize,
    pub skipped: Vec<SkippedFile>,
}

/// Drives collection, extraction and link injection for one configuration.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: ResolvedConfig,
    extractor: IconExtractor,
}

impl Pipeline {
    #[must_use]
    pub fn new(config: ResolvedConfig) -> Self {
        let extractor = IconExtractor::new(config.variant, config.icon_props.clone());
        Self { config, extractor }
    }

    #[must_use]
    pub const fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    /// Scan all configured roots and files.
    ///
    /// # Errors
    /// Returns `ScanError::Walk` if a root directory cannot be traversed.
    /// Per-file read and parse failures are reported in
    /// [`ScanReport::skipped`] instead.
    pub fn scan(&self) -> Result<ScanReport, ScanError> {
        let mut sources = Vec::new();
        let mut skipped = Vec::new();

        for root in &self.config.paths {
            let collection = collect_sources(root)?;
            sources.extend(collection.files);
            skipped.extend(collection.skipped);
        }

        for path in &self.config.files {
            match std::fs::read_to_string(path) {
                Ok(text) => sources.push(SourceFile::new(path.clone(), text)),
                Err(error) => {
                    tracing::warn!(
                        path = %path.display(),
                        %error,
                        "failed to read file; skipping"
                    );
                    skipped.push(SkippedFile {
                        path: path.clone(),
                        reason: SkipReason::Read,
                        message: error.to_string(),
                    });
                }
            }
        }

        let mut report = self.scan_sources(&sources);
        skipped.append(&mut report.skipped);
        report.skipped = skipped;

        tracing::info!(
            variant = %self.config.variant,
            icons = report.icons.len(),
            files = report.files_scanned,
            skipped = report.skipped.len(),
            "icon scan complete"
        );
        Ok(report)
    }

    /// Extract icons from already-loaded sources and add the safelist.
    #[must_use]
    pub fn scan_sources(&self, sources: &[SourceFile]) -> ScanReport {
        let per_file: Vec<(IconSet, Option<SkippedFile>)> = sources
            .par_iter()
            .map(|file| {
                let mut found = IconSet::new();
                match self.extractor.process_file(file, &mut found) {
                    Ok(_) => (found, None),
                    Err(error) => (
                        found,
                        Some(SkippedFile {
                            path: file.path.clone(),
                            reason: SkipReason::Parse,
                            message: error.to_string(),
                        }),
                    ),
                }
            })
            .collect();

        let mut report = ScanReport {
            icons: self.config.safelist.iter().collect(),
            ..ScanReport::default()
        };
        for (found, skipped) in per_file {
            report.icons.merge(found);
            match skipped {
                Some(skipped) => report.skipped.push(skipped),
                None => report.files_scanned += 1,
            }
        }
        report
    }

    /// Subset stylesheet URL for `icons` with the configured variant and axes.
    #[must_use]
    pub fn stylesheet_url(&self, icons: &IconSet) -> String {
        stylesheet_url(self.config.variant, &self.config.axes, icons.iter())
    }

    /// Run a full scan and prepend the stylesheet link into `html`'s head.
    ///
    /// A link is always emitted, even when no icons were found.
    ///
    /// # Errors
    /// Returns `ScanError::Walk` if a root directory cannot be traversed.
    pub fn transform_html(&self, html: &str) -> Result<(String, ScanReport), ScanError> {
        let report = self.scan()?;
        let url = self.stylesheet_url(&report.icons);
        Ok((inject_link(html, &link_element(&url)), report))
    }
}
