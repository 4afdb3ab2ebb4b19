use std::path::PathBuf;

use clap::{Args, Subcommand};
use glyph_core::Variant;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Scan sources and print the discovered icon names.
    Scan(ScanArgs),
    /// Print the subset stylesheet URL for the discovered icons.
    Url(ScanArgs),
    /// Inject the stylesheet link into an HTML document.
    Inject(InjectArgs),
}

/// Scan options. Anything left unset falls back to `glyphset.toml` and
/// `GLYPHSET_*` variables.
#[derive(Clone, Debug, Default, Args)]
pub struct ScanArgs {
    /// Root directories to scan recursively
    pub paths: Vec<PathBuf>,

    /// Font style: sharp, rounded or outlined
    #[arg(long)]
    pub variant: Option<Variant>,

    /// Extra file to scan (repeatable)
    #[arg(long = "file", value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Icon name to always include (repeatable)
    #[arg(long, value_name = "ICON")]
    pub safelist: Vec<String>,

    /// JSX prop whose value is an icon name (repeatable)
    #[arg(long = "icon-prop", value_name = "PROP")]
    pub icon_props: Vec<String>,

    /// Optical size axis range
    #[arg(long)]
    pub opsz: Option<String>,

    /// Weight axis range
    #[arg(long)]
    pub wght: Option<String>,

    /// Fill axis range
    #[arg(long)]
    pub fill: Option<String>,

    /// Grade axis range
    #[arg(long, allow_hyphen_values = true)]
    pub grad: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct InjectArgs {
    /// HTML document to transform (`-` reads stdin)
    pub input: PathBuf,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub scan: ScanArgs,
}
