//! Shared node helpers for the walker, matcher and scanner.

use std::borrow::Cow;

use ast_grep_core::Node;

/// Punctuation and trivia that never carry a value inside wrapper nodes.
fn is_trivia(kind: &str) -> bool {
    matches!(kind, "{" | "}" | "(" | ")" | "," | "comment")
}

/// Cooked value of a `string` node (quotes stripped, escapes decoded).
pub(crate) fn string_value<D: ast_grep_core::Doc>(node: &Node<D>) -> String {
    let mut out = String::new();
    for child in node.children() {
        match child.kind().as_ref() {
            "string_fragment" => out.push_str(&child.text()),
            "html_character_reference" => {
                out.push_str(&decode_character_references(&child.text()));
            }
            "escape_sequence" => push_escape(&mut out, &child.text()),
            _ => {}
        }
    }
    out
}

/// Decode HTML character references (`&amp;`, `&#95;`, `&#x5F;`) the way
/// JSX text and attribute strings are decoded.
pub(crate) fn decode_character_references(text: &str) -> Cow<'_, str> {
    html_escape::decode_html_entities(text)
}

/// Cooked static segments of a `template_string`, split at each
/// `${...}` substitution.
///
/// A template without substitutions yields exactly one segment (possibly
/// empty).
pub(crate) fn template_segments<D: ast_grep_core::Doc>(node: &Node<D>) -> Vec<String> {
    let mut segments = vec![String::new()];
    for child in node.children() {
        match child.kind().as_ref() {
            "string_fragment" => push_last(&mut segments, &child.text()),
            "escape_sequence" => {
                if let Some(last) = segments.last_mut() {
                    push_escape(last, &child.text());
                }
            }
            "template_substitution" => segments.push(String::new()),
            _ => {}
        }
    }
    segments
}

fn push_last(segments: &mut [String], text: &str) {
    if let Some(last) = segments.last_mut() {
        last.push_str(text);
    }
}

fn push_escape(out: &mut String, escape: &str) {
    let body = escape.strip_prefix('\\').unwrap_or(escape);
    match body {
        "n" => out.push('\n'),
        "t" => out.push('\t'),
        "r" => out.push('\r'),
        "0" => out.push('\0'),
        // Line continuation.
        "\n" | "\r\n" => {}
        _ => {
            if let Some(decoded) = decode_unicode_escape(body) {
                out.push(decoded);
            } else {
                out.push_str(body);
            }
        }
    }
}

/// `uXXXX`, `u{X...}` and `xXX` escapes.
fn decode_unicode_escape(body: &str) -> Option<char> {
    let hex = if let Some(rest) = body.strip_prefix('u') {
        rest.trim_start_matches('{').trim_end_matches('}')
    } else {
        body.strip_prefix('x')?
    };
    u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
}

/// The wrapped expression of a `jsx_expression` or
/// `parenthesized_expression`, if any.
///
/// `{}` and `{/* comment */}` have no inner expression.
pub(crate) fn inner_expression<'r, D: ast_grep_core::Doc>(
    node: &Node<'r, D>,
) -> Option<Node<'r, D>> {
    node.children().find(|c| !is_trivia(c.kind().as_ref()))
}

/// Arguments of a `call_expression`.
///
/// Tagged templates (`` css`...` ``) have a `template_string` in the
/// arguments slot and are not calls for our purposes.
pub(crate) fn call_arguments<'r, D: ast_grep_core::Doc>(
    node: &Node<'r, D>,
) -> Vec<Node<'r, D>> {
    let Some(args) = node.field("arguments") else {
        return Vec::new();
    };
    if args.kind().as_ref() != "arguments" {
        return Vec::new();
    }
    args.children()
        .filter(|c| !is_trivia(c.kind().as_ref()))
        .collect()
}

/// Logical operators (`&&`, `||`, `??`) of a `binary_expression`.
pub(crate) fn is_logical<D: ast_grep_core::Doc>(node: &Node<D>) -> bool {
    node.field("operator")
        .is_some_and(|op| matches!(op.text().as_ref(), "&&" | "||" | "??"))
}

/// Attributes of a JSX opening or self-closing element as
/// `(name, value)` pairs.
///
/// Boolean attributes (`<Icon filled />`) have no value. Spread attributes
/// are skipped.
pub(crate) fn jsx_attributes<'r, D: ast_grep_core::Doc>(
    tag: &Node<'r, D>,
) -> Vec<(String, Option<Node<'r, D>>)> {
    tag.children()
        .filter(|c| c.kind().as_ref() == "jsx_attribute")
        .filter_map(|attr| {
            let mut parts = attr.children().filter(|c| {
                let k = c.kind();
                k.as_ref() != "=" && k.as_ref() != "comment"
            });
            let name = parts.next()?.text().to_string();
            Some((name, parts.next()))
        })
        .collect()
}

/// Value node of the first attribute named `name`.
///
/// Returns `None` both when the attribute is absent and when it is a bare
/// boolean attribute.
pub(crate) fn attribute_value<'r, D: ast_grep_core::Doc>(
    attrs: &[(String, Option<Node<'r, D>>)],
    name: &str,
) -> Option<Node<'r, D>> {
    attrs
        .iter()
        .find(|(attr_name, _)| attr_name == name)
        .and_then(|(_, value)| value.clone())
}
