//! Stylesheet URL and `<link>` element construction.
//!
//! The URL layout is fixed by the font provider:
//!
//! ```text
//! https://fonts.googleapis.com/css2?family=<family>:opsz,wght,FILL,GRAD@<opsz>,<wght>,<FILL>,<GRAD>&icon_names=<icons>&display=block
//! ```

use glyph_core::{FontAxes, Variant};

/// Google Fonts CSS2 API endpoint.
pub const FONTS_CSS_ENDPOINT: &str = "https://fonts.googleapis.com/css2";

/// Build the subset stylesheet URL.
///
/// Icons are sorted, deduplicated and stripped of blanks here as well, so
/// callers may pass any iterable of names.
#[must_use]
pub fn stylesheet_url<I, S>(variant: Variant, axes: &FontAxes, icons: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut names: Vec<String> = icons
        .into_iter()
        .map(|name| name.as_ref().trim().to_string())
        .filter(|name| !name.is_empty())
        .collect();
    names.sort();
    names.dedup();

    let family = variant.font_family().replace(' ', "+");
    format!(
        "{FONTS_CSS_ENDPOINT}?family={family}:opsz,wght,FILL,GRAD@{},{},{},{}&icon_names={}&display=block",
        axes.opsz,
        axes.wght,
        axes.fill,
        axes.grad,
        names.join(","),
    )
}

/// Render a stylesheet `<link>` element for `url`.
#[must_use]
pub fn link_element(url: &str) -> String {
    format!(
        r#"<link rel="stylesheet" href="{}">"#,
        html_escape::encode_double_quoted_attribute(url)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn rounded_defaults_match_provider_format() {
        let url = stylesheet_url(Variant::Rounded, &FontAxes::default(), ["home", "search"]);
        assert_eq!(
            url,
            "https://fonts.googleapis.com/css2?family=Material+Symbols+Rounded:opsz,wght,FILL,GRAD@20..48,100..700,0..1,-50..200&icon_names=home,search&display=block"
        );
    }

    #[rstest]
    #[case(Variant::Sharp, "family=Material+Symbols+Sharp:")]
    #[case(Variant::Outlined, "family=Material+Symbols+Outlined:")]
    fn family_per_variant(#[case] variant: Variant, #[case] expected: &str) {
        let url = stylesheet_url(variant, &FontAxes::default(), ["home"]);
        assert!(url.contains(expected), "url: {url}");
    }

    #[test]
    fn icons_are_sorted_deduped_and_non_empty() {
        let url = stylesheet_url(
            Variant::Rounded,
            &FontAxes::default(),
            ["search", "", "home", "search", "  "],
        );
        assert!(url.contains("&icon_names=home,search&"), "url: {url}");
    }

    #[test]
    fn zero_icons_still_produce_a_url() {
        let url = stylesheet_url(Variant::Sharp, &FontAxes::default(), Vec::<String>::new());
        assert!(url.ends_with("&icon_names=&display=block"), "url: {url}");
    }

    #[test]
    fn axes_are_passed_through_verbatim() {
        let axes = FontAxes {
            opsz: "24".to_string(),
            wght: "400".to_string(),
            fill: "0".to_string(),
            grad: "0".to_string(),
        };
        let url = stylesheet_url(Variant::Outlined, &axes, ["add"]);
        assert!(url.contains(":opsz,wght,FILL,GRAD@24,400,0,0&"), "url: {url}");
    }

    #[test]
    fn link_element_escapes_ampersands() {
        let link = link_element("https://x.test/css2?a=1&b=2");
        assert_eq!(
            link,
            r#"<link rel="stylesheet" href="https://x.test/css2?a=1&amp;b=2">"#
        );
    }

    #[test]
    fn link_element_escapes_quotes() {
        let link = link_element(r#"https://x.test/"><script>"#);
        assert!(link.contains("https://x.test/&quot;"), "link: {link}");
        assert!(!link.contains(r#""><script>"#), "link: {link}");
        assert_eq!(link.matches('"').count(), 4, "link: {link}");
    }
}
