//! Class-attribute matcher.
//!
//! Answers "could this `className` value contain the marker class?" over the
//! same expression shapes the walker understands. One matching branch is
//! enough, unlike the walker which needs every branch.

use ast_grep_core::Node;

use crate::helpers::{call_arguments, inner_expression, is_logical, string_value, template_segments};

/// Whether the class value `node` textually contains `marker`.
///
/// Only literal text is inspected; template substitutions and identifiers
/// never match. `None` and unrecognized shapes return `false`.
pub fn class_matches<D: ast_grep_core::Doc>(node: Option<&Node<D>>, marker: &str) -> bool {
    let Some(node) = node else {
        return false;
    };

    let kind = node.kind();
    match kind.as_ref() {
        "string" => string_value(node).contains(marker),
        "jsx_expression" | "parenthesized_expression" => {
            class_matches(inner_expression(node).as_ref(), marker)
        }
        "call_expression" => call_arguments(node)
            .iter()
            .any(|arg| class_matches(Some(arg), marker)),
        "ternary_expression" => {
            class_matches(node.field("consequence").as_ref(), marker)
                || class_matches(node.field("alternative").as_ref(), marker)
        }
        "binary_expression" if is_logical(node) => {
            class_matches(node.field("left").as_ref(), marker)
                || class_matches(node.field("right").as_ref(), marker)
        }
        "template_string" => template_segments(node)
            .iter()
            .any(|segment| segment.contains(marker)),
        _ => false,
    }
}
