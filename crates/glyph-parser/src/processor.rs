//! File processor: parse one source file and scan it for icon names.

use glyph_core::{IconSet, SourceFile, Variant};

use crate::error::ParserError;
use crate::parser::parse_tsx;
use crate::scanner::scan_elements;

/// Per-run extraction settings: which marker class to look for and which
/// extra props carry icon names.
#[derive(Debug, Clone)]
pub struct IconExtractor {
    variant: Variant,
    icon_props: Vec<String>,
}

impl IconExtractor {
    #[must_use]
    pub const fn new(variant: Variant, icon_props: Vec<String>) -> Self {
        Self {
            variant,
            icon_props,
        }
    }

    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    #[must_use]
    pub fn icon_props(&self) -> &[String] {
        &self.icon_props
    }

    /// Extract icon names from source text.
    ///
    /// # Errors
    /// Returns a `ParserError` if the text is not valid TSX.
    pub fn extract_source(&self, source: &str) -> Result<IconSet, ParserError> {
        let tree = parse_tsx(source)?;
        let mut out = IconSet::new();
        scan_elements(
            &tree.root(),
            self.variant.marker(),
            &self.icon_props,
            &mut out,
        );
        Ok(out)
    }

    /// Scan `file` and merge its icon names into `acc`.
    ///
    /// Returns how many distinct names the file produced. A file that fails
    /// to parse is logged, contributes nothing, and its error is handed back
    /// for reporting; it never affects what other files contribute.
    ///
    /// # Errors
    /// Returns a `ParserError` if the file is not valid TSX.
    pub fn process_file(&self, file: &SourceFile, acc: &mut IconSet) -> Result<usize, ParserError> {
        match self.extract_source(&file.text) {
            Ok(found) => {
                let count = found.len();
                tracing::debug!(path = %file.path.display(), icons = count, "scanned source file");
                acc.merge(found);
                Ok(count)
            }
            Err(error) => {
                tracing::warn!(
                    path = %file.path.display(),
                    %error,
                    "failed to parse source file; skipping"
                );
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extracts_for_selected_variant_only() {
        let source = r#"
export const Toolbar = () => (
    <>
        <span className="material-symbols-sharp">edit</span>
        <span className="material-symbols-rounded">share</span>
    </>
);
"#;
        let sharp = IconExtractor::new(Variant::Sharp, Vec::new());
        let rounded = IconExtractor::new(Variant::Rounded, Vec::new());
        assert_eq!(sharp.extract_source(source).unwrap().to_sorted_vec(), vec!["edit"]);
        assert_eq!(
            rounded.extract_source(source).unwrap().to_sorted_vec(),
            vec!["share"]
        );
    }

    #[test]
    fn process_file_merges_into_accumulator() {
        let extractor = IconExtractor::new(Variant::Outlined, Vec::new());
        let mut acc: IconSet = ["seeded"].into_iter().collect();
        let file = SourceFile::new(
            "src/A.tsx",
            r#"const a = <i className="material-symbols-outlined">add</i>;"#,
        );
        assert_eq!(extractor.process_file(&file, &mut acc).unwrap(), 1);
        assert_eq!(acc.to_sorted_vec(), vec!["add", "seeded"]);
    }

    #[test]
    fn process_file_skips_broken_source() {
        let extractor = IconExtractor::new(Variant::Outlined, Vec::new());
        let mut acc: IconSet = ["seeded"].into_iter().collect();
        let file = SourceFile::new("src/Broken.tsx", "export const = <<< ;;; %%%");
        assert!(extractor.process_file(&file, &mut acc).is_err());
        assert_eq!(acc.to_sorted_vec(), vec!["seeded"]);
    }
}
