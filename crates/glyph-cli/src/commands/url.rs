use glyph_core::Variant;
use glyph_scan::Pipeline;
use serde::Serialize;

use crate::bootstrap;
use crate::cli::{GlobalFlags, OutputFormat, ScanArgs};
use crate::output::output;

#[derive(Debug, Serialize)]
struct UrlResponse {
    variant: Variant,
    icons: usize,
    url: String,
}

/// Handle `glyphs url`.
pub fn handle(args: &ScanArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let pipeline = Pipeline::new(bootstrap::load_config(flags, args)?);
    let report = pipeline.scan()?;
    let response = UrlResponse {
        variant: pipeline.config().variant,
        icons: report.icons.len(),
        url: pipeline.stylesheet_url(&report.icons),
    };

    match flags.format {
        OutputFormat::Text => output(&response.url, flags.format),
        OutputFormat::Json | OutputFormat::Raw => output(&response, flags.format),
    }
}
