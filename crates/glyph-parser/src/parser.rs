//! ast-grep wrapper for the TSX grammar.
//!
//! Every source file is parsed with the TSX grammar regardless of extension,
//! so `.js`/`.jsx`/`.ts` files may all contain JSX and type annotations.

use ast_grep_core::Node;
use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_language::{LanguageExt, SupportLang};

use crate::error::ParserError;

/// The concrete AST tree type returned by [`parse_tsx`].
pub type AstTree = ast_grep_core::AstGrep<StrDoc<SupportLang>>;

/// Longest source excerpt quoted in a syntax error.
const SNIPPET_LIMIT: usize = 40;

/// Parse source text as a TSX module.
///
/// tree-sitter always produces a tree. A tree containing an `ERROR` node is
/// reported as [`ParserError::Syntax`], one repaired with a zero-width
/// MISSING node as [`ParserError::Missing`], whichever comes first.
///
/// # Errors
/// Returns `ParserError::Syntax` or `ParserError::Missing` if the source is
/// malformed.
pub fn parse_tsx(source: &str) -> Result<AstTree, ParserError> {
    let tree = SupportLang::Tsx.ast_grep(source);
    if let Some(error) = first_error(&tree.root(), source) {
        return Err(error);
    }
    Ok(tree)
}

fn first_error<D: ast_grep_core::Doc>(node: &Node<D>, source: &str) -> Option<ParserError> {
    if node.is_missing() {
        let (line, column) = location(node, source);
        return Some(ParserError::Missing {
            line,
            column,
            expected: node.kind().to_string(),
        });
    }
    if node.is_error() {
        return Some(syntax_error(node, source));
    }
    let children: Vec<_> = node.children().collect();
    children
        .iter()
        .find_map(|child| first_error(child, source))
}

fn syntax_error<D: ast_grep_core::Doc>(node: &Node<D>, source: &str) -> ParserError {
    let (line, column) = location(node, source);
    let text = node.text();
    let first_line = text.lines().next().unwrap_or_default();
    let snippet: String = first_line.chars().take(SNIPPET_LIMIT).collect();

    ParserError::Syntax {
        line,
        column,
        snippet,
    }
}

/// One-based line and character column of `node`'s start.
fn location<D: ast_grep_core::Doc>(node: &Node<D>, source: &str) -> (usize, usize) {
    let offset = node.range().start;
    let line_start = source[..offset].rfind('\n').map_or(0, |i| i + 1);
    (
        node.start_pos().line() + 1,
        source[line_start..offset].chars().count() + 1,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_jsx_with_types() {
        let source = r#"
import React from "react";

type Props = { icon: string };

export function Icon({ icon }: Props): JSX.Element {
    return <span className="material-symbols-rounded">{icon}</span>;
}
"#;
        let tree = parse_tsx(source).expect("valid tsx should parse");
        assert_eq!(tree.root().kind().as_ref(), "program");
    }

    #[test]
    fn empty_source_parses() {
        assert!(parse_tsx("").is_ok());
    }

    #[test]
    fn malformed_source_is_a_syntax_error() {
        let source = "export const A = () => {\n  return <span>)))(((</span> +;\n};\n%%% @@@";
        let err = parse_tsx(source).err().expect("garbage should not parse");
        let (ParserError::Syntax { line, column, .. } | ParserError::Missing { line, column, .. }) =
            err;
        assert!(line >= 1);
        assert!(column >= 1);
    }

    #[test]
    fn error_message_mentions_location() {
        let err = parse_tsx("const = = = ;").err().expect("should fail");
        let message = err.to_string();
        assert!(message.contains("line 1"), "message: {message}");
    }

    #[test]
    fn unclosed_brace_is_a_syntax_error() {
        let source = "export function A() {\n  return <span className=\"material-symbols-rounded\">home</span>;\n";
        let err = parse_tsx(source).err().expect("truncated function should not parse");
        assert!(matches!(err, ParserError::Missing { .. }), "err: {err}");
        assert!(err.to_string().contains("missing `"), "err: {err}");
    }

    #[test]
    fn unclosed_paren_is_a_syntax_error() {
        let source =
            "const a = (\n  <span className=\"material-symbols-rounded\">home</span>\n;\n";
        assert!(parse_tsx(source).is_err());
    }
}
