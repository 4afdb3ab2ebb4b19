//! Material Symbols style variants.
//!
//! Each variant maps to a fixed font family (used in the stylesheet URL) and
//! a marker class (searched for in `className` attributes). The table is
//! compiled in and not configurable.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// A Material Symbols font style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Sharp,
    Rounded,
    Outlined,
}

impl Variant {
    pub const ALL: [Self; 3] = [Self::Sharp, Self::Rounded, Self::Outlined];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sharp => "sharp",
            Self::Rounded => "rounded",
            Self::Outlined => "outlined",
        }
    }

    /// Font family name as the provider knows it.
    #[must_use]
    pub const fn font_family(self) -> &'static str {
        match self {
            Self::Sharp => "Material Symbols Sharp",
            Self::Rounded => "Material Symbols Rounded",
            Self::Outlined => "Material Symbols Outlined",
        }
    }

    /// Class name that marks an element as rendering a glyph of this style.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Sharp => "material-symbols-sharp",
            Self::Rounded => "material-symbols-rounded",
            Self::Outlined => "material-symbols-outlined",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| CoreError::UnknownVariant(s.to_string()))
    }
}
