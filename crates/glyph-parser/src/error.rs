//! Parser error types for glyph-parser.

/// Errors that can occur while parsing a source file.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    /// The source contains syntax the TSX grammar could not recover from.
    #[error("syntax error at line {line}, column {column}: unexpected `{snippet}`")]
    Syntax {
        line: usize,
        column: usize,
        snippet: String,
    },

    /// The grammar recovered by inserting a token the source lacks
    /// (an unclosed brace or paren, usually a truncated file).
    #[error("syntax error at line {line}, column {column}: missing `{expected}`")]
    Missing {
        line: usize,
        column: usize,
        expected: String,
    },
}
