//! Directory collector: every React source file under a root.
//!
//! The walk is raw: `.gitignore`, hidden-file and other standard filters are
//! disabled so every subdirectory is visited. Symlinks are not followed.

use std::path::Path;

use glyph_core::{SourceFile, is_source_path};
use ignore::WalkBuilder;

use crate::error::ScanError;
use crate::pipeline::{SkipReason, SkippedFile};

/// Files collected under one root.
#[derive(Debug, Default)]
pub struct Collection {
    /// Readable source files, sorted by path.
    pub files: Vec<SourceFile>,
    /// Source files that matched but could not be read as UTF-8 text.
    pub skipped: Vec<SkippedFile>,
}

/// Recursively collect `.js`/`.jsx`/`.ts`/`.tsx` files under `root`.
///
/// # Errors
/// Returns `ScanError::Walk` if `root` or any directory below it cannot be
/// traversed. Unreadable files are skipped with a warning instead.
pub fn collect_sources(root: &Path) -> Result<Collection, ScanError> {
    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(false);
    builder.hidden(false);
    builder.follow_links(false);

    let mut collection = Collection::default();
    for entry in builder.build() {
        let entry = entry.map_err(|source| ScanError::Walk {
            root: root.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_some_and(|ft| ft.is_file()) || !is_source_path(entry.path()) {
            continue;
        }

        match std::fs::read_to_string(entry.path()) {
            Ok(text) => collection
                .files
                .push(SourceFile::new(entry.into_path(), text)),
            Err(error) => {
                tracing::warn!(
                    path = %entry.path().display(),
                    %error,
                    "failed to read source file; skipping"
                );
                collection.skipped.push(SkippedFile {
                    path: entry.into_path(),
                    reason: SkipReason::Read,
                    message: error.to_string(),
                });
            }
        }
    }

    collection.files.sort_by(|a, b| a.path.cmp(&b.path));
    tracing::debug!(
        root = %root.display(),
        files = collection.files.len(),
        "collected source files"
    );
    Ok(collection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    // Helper: create a fixture directory with nested sources and noise
    fn create_fixture(dir: &Path) {
        let dirs = ["src/components/deep", "node_modules/pkg", ".storybook"];
        for d in &dirs {
            fs::create_dir_all(dir.join(d)).expect("mkdir should succeed");
        }

        let files = [
            ("src/App.tsx", "export const App = () => null;"),
            ("src/index.js", "import './App';"),
            ("src/components/Button.jsx", "export default () => null;"),
            ("src/components/deep/types.ts", "export type X = 1;"),
            ("src/styles.css", ".a {}"),
            ("src/README.md", "# readme"),
            ("node_modules/pkg/index.js", "module.exports = {};"),
            (".storybook/preview.tsx", "export default {};"),
            (".gitignore", "node_modules/\n"),
        ];
        for (path, content) in &files {
            fs::write(dir.join(path), content).expect("write should succeed");
        }
    }

    fn relative_paths(collection: &Collection, root: &Path) -> Vec<String> {
        collection
            .files
            .iter()
            .map(|f| {
                f.path
                    .strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn collects_every_source_file_recursively() {
        let tmp = tempfile::tempdir().unwrap();
        create_fixture(tmp.path());

        let collection = collect_sources(tmp.path()).expect("walk should succeed");
        let paths = relative_paths(&collection, tmp.path());

        assert_eq!(
            paths,
            vec![
                ".storybook/preview.tsx",
                "node_modules/pkg/index.js",
                "src/App.tsx",
                "src/components/Button.jsx",
                "src/components/deep/types.ts",
                "src/index.js",
            ]
        );
        assert!(collection.skipped.is_empty());
    }

    #[test]
    fn file_text_is_loaded() {
        let tmp = tempfile::tempdir().unwrap();
        create_fixture(tmp.path());

        let collection = collect_sources(&tmp.path().join("src")).unwrap();
        let app = collection
            .files
            .iter()
            .find(|f| f.path.ends_with("App.tsx"))
            .expect("App.tsx collected");
        assert_eq!(app.text, "export const App = () => null;");
    }

    #[test]
    fn non_utf8_file_is_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("bad.tsx"), [0xff, 0xfe, 0x00, 0x80]).unwrap();
        fs::write(tmp.path().join("good.tsx"), "const a = 1;").unwrap();

        let collection = collect_sources(tmp.path()).unwrap();
        assert_eq!(collection.files.len(), 1);
        assert_eq!(collection.skipped.len(), 1);
        assert_eq!(collection.skipped[0].reason, SkipReason::Read);
        assert!(collection.skipped[0].path.ends_with("bad.tsx"));
    }

    #[test]
    fn missing_root_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("does-not-exist");
        let err = collect_sources(&missing).unwrap_err();
        assert!(
            err.to_string().contains("does-not-exist"),
            "err: {err}"
        );
    }
}
