use std::path::PathBuf;

use anyhow::Context;
use glyph_config::{GlyphConfig, ResolvedConfig};
use glyph_core::Variant;
use serde::Serialize;

use crate::cli::{GlobalFlags, ScanArgs};

/// Flags the user actually passed, shaped like [`GlyphConfig`] so figment
/// can merge them as the top layer.
#[derive(Debug, Default, Serialize)]
struct FlagOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    variant: Option<Variant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    paths: Option<Vec<PathBuf>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    files: Option<Vec<PathBuf>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    safelist: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon_props: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    opsz: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    wght: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fill: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    grad: Option<String>,
}

impl From<&ScanArgs> for FlagOverrides {
    fn from(args: &ScanArgs) -> Self {
        fn non_empty<T: Clone>(values: &[T]) -> Option<Vec<T>> {
            (!values.is_empty()).then(|| values.to_vec())
        }

        Self {
            variant: args.variant,
            paths: non_empty(&args.paths),
            files: non_empty(&args.files),
            safelist: non_empty(&args.safelist),
            icon_props: non_empty(&args.icon_props),
            opsz: args.opsz.clone(),
            wght: args.wght.clone(),
            fill: args.fill.clone(),
            grad: args.grad.clone(),
        }
    }
}

/// Load layered config with command-line flags on top and validate it.
pub fn load_config(flags: &GlobalFlags, args: &ScanArgs) -> anyhow::Result<ResolvedConfig> {
    let overrides = FlagOverrides::from(args);
    let config = GlyphConfig::load_with_overrides(flags.config.as_deref(), &overrides)
        .context("failed to load glyphset configuration")?;
    config
        .validate()
        .context("invalid glyphset configuration (set it in glyphset.toml or pass it as a flag)")
}
