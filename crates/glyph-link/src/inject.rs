//! Prepend a link element into an HTML document's `<head>`.
//!
//! The document is parsed with the tree-sitter HTML grammar only to locate
//! insertion points; the rest of the document is copied through untouched.
//! The link goes first in `<head>` so later stylesheets keep their cascade
//! order.

use ast_grep_core::Node;
use ast_grep_language::{LanguageExt, SupportLang};

/// Insert `link` as the first child of `<head>`.
///
/// Without a `<head>`, one is created right after the `<html>` start tag.
/// Without either, the link goes after the doctype (or at the very start).
#[must_use]
pub fn inject_link(html: &str, link: &str) -> String {
    let tree = SupportLang::Html.ast_grep(html);
    let root = tree.root();

    let (offset, insertion) = if let Some(head) = find_start_tag(&root, "head") {
        (head.range().end, link.to_string())
    } else if let Some(html_tag) = find_start_tag(&root, "html") {
        tracing::debug!("document has no <head>; creating one");
        (html_tag.range().end, format!("<head>{link}</head>"))
    } else {
        tracing::debug!("document has no <html> or <head>; prepending link");
        let after_doctype = root
            .children()
            .find(|c| c.kind().as_ref() == "doctype")
            .map_or(0, |doctype| doctype.range().end);
        (after_doctype, link.to_string())
    };

    let mut out = String::with_capacity(html.len() + insertion.len());
    out.push_str(&html[..offset]);
    out.push_str(&insertion);
    out.push_str(&html[offset..]);
    out
}

/// First `start_tag` whose tag name is `name` (ASCII case-insensitive).
fn find_start_tag<'r, D: ast_grep_core::Doc>(node: &Node<'r, D>, name: &str) -> Option<Node<'r, D>> {
    if node.kind().as_ref() == "start_tag"
        && node
            .children()
            .find(|c| c.kind().as_ref() == "tag_name")
            .is_some_and(|tag| tag.text().eq_ignore_ascii_case(name))
    {
        return Some(node.clone());
    }

    let children: Vec<_> = node.children().collect();
    children.iter().find_map(|child| find_start_tag(child, name))
}
