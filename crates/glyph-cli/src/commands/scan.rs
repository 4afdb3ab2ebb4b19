use glyph_scan::Pipeline;

use crate::bootstrap;
use crate::cli::{GlobalFlags, OutputFormat, ScanArgs};
use crate::output::output;

/// Handle `glyphs scan`.
pub fn handle(args: &ScanArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let config = bootstrap::load_config(flags, args)?;
    let report = Pipeline::new(config).scan()?;

    match flags.format {
        OutputFormat::Text => output(&report.icons, flags.format),
        OutputFormat::Json | OutputFormat::Raw => output(&report, flags.format),
    }
}
