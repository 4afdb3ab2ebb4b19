use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use glyph_scan::Pipeline;
use serde::Serialize;

use crate::bootstrap;
use crate::cli::{GlobalFlags, InjectArgs};
use crate::output::output;

#[derive(Debug, Serialize)]
struct InjectResponse {
    output: PathBuf,
    icons: usize,
    files_scanned: usize,
    files_skipped: usize,
}

/// Handle `glyphs inject`.
///
/// The transformed document goes to `--output` or stdout. A summary is
/// printed only when writing to a file, so stdout stays pure HTML otherwise.
pub fn handle(args: &InjectArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let html = read_input(&args.input)?;
    let pipeline = Pipeline::new(bootstrap::load_config(flags, &args.scan)?);
    let (transformed, report) = pipeline.transform_html(&html)?;

    let Some(path) = &args.output else {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(transformed.as_bytes())
            .context("failed to write html to stdout")?;
        return stdout.flush().context("failed to flush stdout");
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, transformed)
        .with_context(|| format!("failed to write {}", path.display()))?;

    if !flags.quiet {
        output(
            &InjectResponse {
                output: path.clone(),
                icons: report.icons.len(),
                files_scanned: report.files_scanned,
                files_skipped: report.skipped.len(),
            },
            flags.format,
        )?;
    }
    Ok(())
}

fn read_input(input: &Path) -> anyhow::Result<String> {
    if input == Path::new("-") {
        let mut html = String::new();
        std::io::stdin()
            .read_to_string(&mut html)
            .context("failed to read html from stdin")?;
        return Ok(html);
    }
    std::fs::read_to_string(input).with_context(|| format!("failed to read {}", input.display()))
}
