//! Expression walker: every literal an expression can statically produce.
//!
//! | shape                              | contribution                        |
//! |------------------------------------|-------------------------------------|
//! | string literal                     | trimmed value                       |
//! | `a ? b : c`                        | `b` and `c`                         |
//! | `a && b`, `a \|\| b`, `a ?? b`     | `a` and `b`                         |
//! | template without `${}`             | its single segment, trimmed         |
//! | `f(x, y)`                          | `x` and `y`, whatever `f` is        |
//! | `( a )`                            | `a`                                 |
//! | anything else                      | nothing                             |
//!
//! Both sides of conditionals and logicals are always taken: which branch
//! runs is unknowable at build time, so the result over-approximates.

use ast_grep_core::Node;
use glyph_core::IconSet;

use crate::helpers::{call_arguments, inner_expression, is_logical, string_value, template_segments};

/// Add every literal that `node` can statically evaluate to into `out`.
///
/// `None` and unrecognized shapes are no-ops.
pub fn extract_literals<D: ast_grep_core::Doc>(node: Option<&Node<D>>, out: &mut IconSet) {
    let Some(node) = node else {
        return;
    };

    let kind = node.kind();
    match kind.as_ref() {
        "string" => {
            out.insert(&string_value(node));
        }
        "ternary_expression" => {
            extract_literals(node.field("consequence").as_ref(), out);
            extract_literals(node.field("alternative").as_ref(), out);
        }
        "binary_expression" if is_logical(node) => {
            extract_literals(node.field("left").as_ref(), out);
            extract_literals(node.field("right").as_ref(), out);
        }
        "template_string" => {
            // Interpolated templates are left alone.
            if let [only] = template_segments(node).as_slice() {
                out.insert(only);
            }
        }
        "call_expression" => {
            for arg in call_arguments(node) {
                extract_literals(Some(&arg), out);
            }
        }
        "parenthesized_expression" => {
            extract_literals(inner_expression(node).as_ref(), out);
        }
        _ => {}
    }
}
