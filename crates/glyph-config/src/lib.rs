//! # glyph-config
//!
//! Layered configuration loading for Glyphset using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`GLYPHSET_*` prefix, `__` as separator)
//! 2. Project-level `glyphset.toml` (or an explicit `--config` file)
//! 3. Built-in defaults
//!
//! Command-line flags are merged on top by `glyph-cli` through
//! [`GlyphConfig::load_with_overrides`].
//!
//! # Example `glyphset.toml`
//!
//! ```toml
//! variant = "rounded"
//! paths = ["src"]
//! files = ["index.tsx"]
//! safelist = ["progress_activity"]
//! icon_props = ["leftIcon", "rightIcon"]
//! wght = "400"
//! ```
//!
//! # Environment Variable Mapping
//!
//! `GLYPHSET_VARIANT=sharp`, `GLYPHSET_PATHS=[src, lib]`, `GLYPHSET_WGHT=300..500`.
//! Numeric values (`GLYPHSET_WGHT=400`, `GLYPHSET_SAFELIST=[home, 123]`) are
//! read back as the text that was written.

mod error;

pub use error::ConfigError;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use glyph_core::{FontAxes, Variant};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project config file looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "glyphset.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "GLYPHSET_";

/// Raw configuration as merged from all sources.
///
/// `variant` and `paths` are required but optional here so that every
/// source may omit them; [`GlyphConfig::validate`] enforces presence.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GlyphConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<Variant>,

    /// Root directories scanned recursively.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paths: Option<Vec<PathBuf>>,

    /// Individual files scanned in addition to `paths`.
    #[serde(default)]
    pub files: Vec<PathBuf>,

    /// Icon names always included. Numeric names such as `123` are kept as
    /// written.
    #[serde(default, deserialize_with = "glyph_core::lenient::string_list")]
    pub safelist: Vec<String>,

    /// Extra JSX props whose values are icon names.
    #[serde(default)]
    pub icon_props: Vec<String>,

    #[serde(flatten)]
    pub axes: FontAxes,
}

/// Validated configuration consumed by the scan pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub variant: Variant,
    pub paths: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
    pub safelist: Vec<String>,
    pub icon_props: Vec<String>,
    pub axes: FontAxes,
}

impl ResolvedConfig {
    /// Config with only the required options set.
    #[must_use]
    pub fn new(variant: Variant, paths: Vec<PathBuf>) -> Self {
        Self {
            variant,
            paths,
            files: Vec::new(),
            safelist: Vec::new(),
            icon_props: Vec::new(),
            axes: FontAxes::default(),
        }
    }
}

impl GlyphConfig {
    /// Load configuration from the TOML file and environment variables.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env`
    /// support.
    ///
    /// # Errors
    /// Returns `ConfigError::Figment` if a source is malformed.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        Self::figment(config_file)
            .extract()
            .map_err(ConfigError::from)
    }

    /// Load configuration after reading `.env` from the working directory.
    ///
    /// # Errors
    /// Returns `ConfigError::Figment` if a source is malformed.
    pub fn load_with_dotenv(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        // A missing .env is normal.
        let _ = dotenvy::dotenv();
        Self::load(config_file)
    }

    /// Load configuration with `overrides` merged above every other source.
    ///
    /// Fields `overrides` does not serialize are left to the lower layers.
    ///
    /// # Errors
    /// Returns `ConfigError::Figment` if a source is malformed.
    pub fn load_with_overrides<T: Serialize>(
        config_file: Option<&Path>,
        overrides: &T,
    ) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::figment(config_file)
            .merge(Serialized::defaults(overrides))
            .extract()
            .map_err(ConfigError::from)
    }

    /// Build the figment provider chain.
    ///
    /// An explicit `config_file` replaces the `glyphset.toml` lookup and is
    /// required to exist.
    pub fn figment(config_file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        match config_file {
            Some(path) => figment = figment.merge(Toml::file_exact(path)),
            None => {
                let local_path = PathBuf::from(PROJECT_CONFIG_FILE);
                if local_path.exists() {
                    figment = figment.merge(Toml::file(local_path));
                }
            }
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Check required options and produce a [`ResolvedConfig`].
    ///
    /// # Errors
    /// Returns `ConfigError::Missing` when `variant` or `paths` is absent and
    /// `ConfigError::InvalidValue` for blank icon prop names.
    pub fn validate(self) -> Result<ResolvedConfig, ConfigError> {
        let variant = self.variant.ok_or_else(|| ConfigError::Missing {
            field: "variant".to_string(),
        })?;
        let paths = self.paths.ok_or_else(|| ConfigError::Missing {
            field: "paths".to_string(),
        })?;

        if let Some(index) = self.icon_props.iter().position(|p| p.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: format!("icon_props[{index}]"),
                reason: "prop names must not be empty".to_string(),
            });
        }

        Ok(ResolvedConfig {
            variant,
            paths,
            files: self.files,
            safelist: self.safelist,
            icon_props: self.icon_props,
            axes: self.axes,
        })
    }
}
