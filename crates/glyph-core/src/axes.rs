//! Variable-font axis ranges.

use serde::{Deserialize, Serialize};

fn default_opsz() -> String {
    "20..48".to_string()
}

fn default_wght() -> String {
    "100..700".to_string()
}

fn default_fill() -> String {
    "0..1".to_string()
}

fn default_grad() -> String {
    "-50..200".to_string()
}

/// Axis ranges requested from the font provider.
///
/// Values are opaque: they are never validated and are written into the
/// stylesheet URL verbatim, in the order optical size, weight, fill, grade.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FontAxes {
    /// Optical size range.
    #[serde(default = "default_opsz", deserialize_with = "crate::lenient::string")]
    pub opsz: String,

    /// Weight range.
    #[serde(default = "default_wght", deserialize_with = "crate::lenient::string")]
    pub wght: String,

    /// Fill range (`FILL` in the URL).
    #[serde(default = "default_fill", deserialize_with = "crate::lenient::string")]
    pub fill: String,

    /// Grade range (`GRAD` in the URL).
    #[serde(default = "default_grad", deserialize_with = "crate::lenient::string")]
    pub grad: String,
}

impl Default for FontAxes {
    fn default() -> Self {
        Self {
            opsz: default_opsz(),
            wght: default_wght(),
            fill: default_fill(),
            grad: default_grad(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let axes = FontAxes::default();
        assert_eq!(axes.opsz, "20..48");
        assert_eq!(axes.wght, "100..700");
        assert_eq!(axes.fill, "0..1");
        assert_eq!(axes.grad, "-50..200");
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let axes: FontAxes = serde_json::from_str(r#"{"wght": "400"}"#).unwrap();
        assert_eq!(axes.wght, "400");
        assert_eq!(axes.opsz, "20..48");
        assert_eq!(axes.grad, "-50..200");
    }

    #[test]
    fn numeric_values_keep_their_text() {
        let axes: FontAxes = serde_json::from_str(r#"{"wght": 400, "fill": 0, "grad": -25}"#).unwrap();
        assert_eq!(axes.wght, "400");
        assert_eq!(axes.fill, "0");
        assert_eq!(axes.grad, "-25");
        assert_eq!(axes.opsz, "20..48");
    }
}
