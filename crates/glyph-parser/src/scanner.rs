//! Element scanner: finds icon-hosting JSX elements in a parsed file.
//!
//! Every JSX element (paired or self-closing) gets two independent checks:
//!
//! 1. **Marker class**: if its `className` matches the marker, its children
//!    are extracted: text nodes contribute their trimmed text, expression
//!    containers go through the walker.
//! 2. **Icon props**: each configured prop present on the element has its
//!    value extracted, whether a plain string or an expression container.

use ast_grep_core::Node;
use glyph_core::IconSet;

use crate::helpers::{
    attribute_value, decode_character_references, inner_expression, jsx_attributes,
};
use crate::matcher::class_matches;
use crate::walker::extract_literals;

/// Attribute carrying the element's CSS classes.
const CLASS_ATTRIBUTE: &str = "className";

/// Scan every JSX element under `root` in document order.
pub fn scan_elements<D: ast_grep_core::Doc>(
    root: &Node<D>,
    marker: &str,
    icon_props: &[String],
    out: &mut IconSet,
) {
    let kind = root.kind();
    match kind.as_ref() {
        "jsx_element" => {
            if let Some(open_tag) = root.field("open_tag") {
                scan_element(&open_tag, Some(root), marker, icon_props, out);
            }
        }
        "jsx_self_closing_element" => scan_element(root, None, marker, icon_props, out),
        _ => {}
    }

    // Recurse into children without holding borrows across iterations
    let children: Vec<_> = root.children().collect();
    for child in &children {
        scan_elements(child, marker, icon_props, out);
    }
}

/// Apply both checks to one element.
///
/// `tag` holds the attributes; `element` is the paired element whose
/// children are extracted (self-closing elements have none).
fn scan_element<D: ast_grep_core::Doc>(
    tag: &Node<D>,
    element: Option<&Node<D>>,
    marker: &str,
    icon_props: &[String],
    out: &mut IconSet,
) {
    let attrs = jsx_attributes(tag);

    if let Some(element) = element
        && class_matches(attribute_value(&attrs, CLASS_ATTRIBUTE).as_ref(), marker)
    {
        extract_children(element, out);
    }

    for prop in icon_props {
        let Some(value) = attribute_value(&attrs, prop) else {
            continue;
        };
        match value.kind().as_ref() {
            "jsx_expression" => extract_literals(inner_expression(&value).as_ref(), out),
            _ => extract_literals(Some(&value), out),
        }
    }
}

/// Collect names from the direct children of a marked element.
///
/// Adjacent text and character references (`arrow&#95;back`) form one
/// text run, decoded and inserted as a single name.
fn extract_children<D: ast_grep_core::Doc>(element: &Node<D>, out: &mut IconSet) {
    let mut run = String::new();
    for child in element.children() {
        match child.kind().as_ref() {
            "jsx_text" => run.push_str(&child.text()),
            "html_character_reference" => {
                run.push_str(&decode_character_references(&child.text()));
            }
            "jsx_expression" => {
                out.insert(&std::mem::take(&mut run));
                extract_literals(inner_expression(&child).as_ref(), out);
            }
            _ => {
                out.insert(&std::mem::take(&mut run));
            }
        }
    }
    out.insert(&run);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_tsx;
    use pretty_assertions::assert_eq;

    const MARKER: &str = "material-symbols-rounded";

    fn scan(source: &str, icon_props: &[&str]) -> Vec<String> {
        let tree = parse_tsx(source).expect("source should parse");
        let props: Vec<String> = icon_props.iter().map(ToString::to_string).collect();
        let mut out = IconSet::new();
        scan_elements(&tree.root(), MARKER, &props, &mut out);
        out.to_sorted_vec()
    }

    #[test]
    fn text_child_of_marked_element() {
        let found = scan(
            r#"const a = <span className="material-symbols-rounded">home</span>;"#,
            &[],
        );
        assert_eq!(found, vec!["home"]);
    }

    #[test]
    fn text_is_trimmed() {
        let source = r#"
const a = (
    <span className="material-symbols-rounded">
        settings
    </span>
);
"#;
        assert_eq!(scan(source, &[]), vec!["settings"]);
    }

    #[test]
    fn character_references_join_surrounding_text() {
        let found = scan(
            r#"const a = <span className="material-symbols-rounded">arrow&#95;back</span>;"#,
            &[],
        );
        assert_eq!(found, vec!["arrow_back"]);
    }

    #[test]
    fn named_and_hex_references_are_decoded() {
        let found = scan(
            r#"const a = <span className="material-symbols-rounded">&nbsp;arrow&#x5F;forward&amp;</span>;"#,
            &[],
        );
        assert_eq!(found, vec!["arrow_forward&"]);
    }

    #[test]
    fn text_runs_split_at_expressions() {
        let found = scan(
            r#"const a = <span className="material-symbols-rounded">home{" "}menu</span>;"#,
            &[],
        );
        assert_eq!(found, vec!["home", "menu"]);
    }

    #[test]
    fn conditional_child_takes_both_branches() {
        let found = scan(
            r#"const a = <span className="material-symbols-rounded">{isLoggedIn ? 'logout' : 'login'}</span>;"#,
            &[],
        );
        assert_eq!(found, vec!["login", "logout"]);
    }

    #[test]
    fn unmarked_element_is_ignored() {
        let found = scan(r#"const a = <span className="label">home</span>;"#, &[]);
        assert!(found.is_empty(), "found: {found:?}");
    }

    #[test]
    fn element_without_class_is_ignored() {
        let found = scan("const a = <p>home</p>;", &[]);
        assert!(found.is_empty(), "found: {found:?}");
    }

    #[test]
    fn other_variant_marker_is_ignored() {
        let found = scan(
            r#"const a = <span className="material-symbols-outlined">home</span>;"#,
            &[],
        );
        assert!(found.is_empty(), "found: {found:?}");
    }

    #[test]
    fn nested_elements_are_not_children_text() {
        let source = r#"
const a = (
    <span className="material-symbols-rounded">
        <b>bold</b>
        star
    </span>
);
"#;
        assert_eq!(scan(source, &[]), vec!["star"]);
    }

    #[test]
    fn nested_marked_element_is_scanned() {
        let source = r#"
const a = (
    <div>
        <button>
            <i className="material-symbols-rounded">delete</i>
        </button>
    </div>
);
"#;
        assert_eq!(scan(source, &[]), vec!["delete"]);
    }

    #[test]
    fn icon_prop_string_value() {
        let source = r#"const a = <IconComponent leftIcon="home" />;"#;
        assert_eq!(scan(source, &["leftIcon"]), vec!["home"]);
        assert!(scan(source, &[]).is_empty());
    }

    #[test]
    fn icon_prop_string_decodes_references() {
        let source = r#"const a = <IconComponent leftIcon="arrow&#95;back" />;"#;
        assert_eq!(scan(source, &["leftIcon"]), vec!["arrow_back"]);
    }

    #[test]
    fn icon_prop_expression_value() {
        let source = r#"const a = <Button rightIcon={open ? "expand_less" : "expand_more"}>Go</Button>;"#;
        assert_eq!(
            scan(source, &["rightIcon"]),
            vec!["expand_less", "expand_more"]
        );
    }

    #[test]
    fn icon_prop_name_is_exact() {
        let source = r#"const a = <IconComponent lefticon="home" />;"#;
        assert!(scan(source, &["leftIcon"]).is_empty());
    }

    #[test]
    fn class_and_props_on_same_element() {
        let source = r#"
const a = (
    <span className="material-symbols-rounded" trailingIcon="close">
        menu
    </span>
);
"#;
        assert_eq!(scan(source, &["trailingIcon"]), vec!["close", "menu"]);
    }

    #[test]
    fn self_closing_marked_element_has_no_children() {
        let source = r#"const a = <span className="material-symbols-rounded" title="home" />;"#;
        assert!(scan(source, &[]).is_empty());
    }

    #[test]
    fn dynamic_child_is_ignored() {
        let source = r#"const a = <span className="material-symbols-rounded">{props.icon}</span>;"#;
        assert!(scan(source, &[]).is_empty());
    }

    #[test]
    fn empty_expression_container_is_ignored() {
        let source = r#"const a = <span className="material-symbols-rounded">{/* none */}</span>;"#;
        assert!(scan(source, &[]).is_empty());
    }
}
